//! Name formatting for alternate-name fragments and CSS classes.
//!
//! Three small, pure transforms are used when deriving alternate names:
//!
//! - [`to_pascal_identifier`] turns a human label such as a taxonomy's display
//!   text into the differentiator token (`"foo-ba r"` → `"FooBaR"`)
//! - [`encode_fragment`] makes a content type name safe to embed between `__`
//!   separators (`"a-b.c"` → `"a__b_c"`)
//! - [`html_classify`] turns a class seed such as `"term-Categories"` into a
//!   kebab-case CSS class
//!
//! # Examples
//!
//! ```
//! use taxonomy_shapes::naming::{encode_fragment, to_pascal_identifier};
//!
//! assert_eq!(to_pascal_identifier("foo-ba r").as_deref(), Some("FooBaR"));
//! assert_eq!(encode_fragment("a-b.c"), "a__b_c");
//! ```

use heck::ToKebabCase;

/// Converts a dash/whitespace delimited label into a PascalCase identifier.
///
/// The input is trimmed, then every `-` and whitespace character is treated as
/// a token boundary and dropped. The first character of the result and the
/// first character after each boundary are uppercased; every other character
/// passes through unchanged, so this is not a full case normalization.
///
/// Returns `None` for empty input. Input made only of boundary characters
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use taxonomy_shapes::naming::to_pascal_identifier;
///
/// assert_eq!(to_pascal_identifier(""), None);
/// assert_eq!(to_pascal_identifier("foo-ba r").as_deref(), Some("FooBaR"));
/// assert_eq!(
///     to_pascal_identifier("  already-Capitalized  ").as_deref(),
///     Some("AlreadyCapitalized")
/// );
/// ```
#[must_use]
pub fn to_pascal_identifier(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let trimmed = input.trim();
    let mut result = String::with_capacity(trimmed.len());
    let mut next_is_upper = true;

    for c in trimmed.chars() {
        if c == '-' || c.is_whitespace() {
            next_is_upper = true;
            continue;
        }

        if next_is_upper {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }

        next_is_upper = false;
    }

    Some(result)
}

/// Encodes a name so it can be embedded inside a composite alternate name.
///
/// Every `-` becomes `__` and every `.` becomes `_`. The dash rule runs first;
/// the underscores it produces are never touched by the dot rule.
#[must_use]
pub fn encode_fragment(input: &str) -> String {
    input.replace('-', "__").replace('.', "_")
}

/// Turns a class seed into a lowercase, dash-separated CSS class name.
///
/// Word boundaries are taken from case changes as well as from existing
/// separators, so `"term-FooBar"` becomes `"term-foo-bar"`.
#[must_use]
pub fn html_classify(input: &str) -> String {
    input.to_kebab_case()
}
