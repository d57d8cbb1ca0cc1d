// escape.rs - Literal text to regex-safe text.

use std::borrow::Cow;

/// Characters that carry meaning in the emitted dialect and are escaped
/// whenever they appear in literal text.
pub const METACHARACTERS: &[char] = &[
    '[', ']', '\\', '^', '$', '.', '|', '?', '*', '+', '-', '(', ')',
];

#[inline]
pub fn is_metacharacter(c: char) -> bool {
    METACHARACTERS.contains(&c)
}

/// Backslash-escape every metacharacter in `literal`.
///
/// Borrows the input when nothing needs escaping.
///
/// ```
/// assert_eq!(verbex::escape("a.b"), r"a\.b");
/// assert_eq!(verbex::escape("plain"), "plain");
/// ```
pub fn escape(literal: &str) -> Cow<'_, str> {
    let Some(first) = literal.find(is_metacharacter) else {
        return Cow::Borrowed(literal);
    };

    let mut out = String::with_capacity(literal.len() + 8);
    out.push_str(&literal[..first]);
    for c in literal[first..].chars() {
        if is_metacharacter(c) {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}
