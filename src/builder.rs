// builder.rs - The fluent pattern builder.
//
// Holds the accumulated pattern, its flags and the open capture/group
// depths. Every operation appends exactly one fragment (anchors rewrite
// the resolved pattern instead) and hands the builder back for chaining.

use std::borrow::Cow;
use std::fmt;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::escape::{escape, is_metacharacter};
use crate::flags::CompileFlags;

/// Fragments buffered inline before the pending list spills to the heap.
const INLINE_FRAGMENTS: usize = 8;

/// A regular expression assembled from named operations.
///
/// Operations take `&mut self` and return `&mut Self` (or
/// `Result<&mut Self, Error>` when they validate arguments), so calls
/// chain and fallible ones compose with `?`. A failing call leaves the
/// builder untouched.
///
/// # Examples
///
/// ```
/// use verbex::VerbalExpression;
///
/// let mut url = VerbalExpression::new();
/// url.start_of_line()
///     .find("http")
///     .maybe("s")
///     .find("://")
///     .maybe("www.")
///     .anything_but(" ")
///     .end_of_line();
///
/// assert_eq!(
///     url.resolve(),
///     r"^(?:http)(?:s)?(?://)(?:www\.)?(?:[^ ]*)$"
/// );
/// ```
#[derive(Clone, Default)]
pub struct VerbalExpression {
    resolved: String,
    pending: SmallVec<[Cow<'static, str>; INLINE_FRAGMENTS]>,
    case_insensitive: bool,
    stop_at_first: bool,
    single_line: bool,
    capture_depth: usize,
    group_depth: usize,
}

impl VerbalExpression {
    /// Create an empty builder: no pattern, no flags, nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    // === Resolution ===

    /// Flush buffered fragments and return the full pattern.
    ///
    /// Calling this repeatedly without further operations returns the
    /// same string.
    pub fn resolve(&mut self) -> &str {
        if !self.pending.is_empty() {
            let extra: usize = self.pending.iter().map(|f| f.len()).sum();
            self.resolved.reserve(extra);
            for fragment in self.pending.drain(..) {
                self.resolved.push_str(&fragment);
            }
            trace!("resolved pattern {:?}", self.resolved);
        }
        &self.resolved
    }

    /// The full pattern without flushing the buffer.
    ///
    /// Borrows when nothing is pending.
    pub fn as_pattern(&self) -> Cow<'_, str> {
        if self.pending.is_empty() {
            return Cow::Borrowed(&self.resolved);
        }
        let mut out = String::with_capacity(self.pattern_len());
        self.write_pattern(&mut out);
        Cow::Owned(out)
    }

    fn pattern_len(&self) -> usize {
        self.resolved.len() + self.pending.iter().map(|f| f.len()).sum::<usize>()
    }

    fn write_pattern(&self, out: &mut String) {
        out.push_str(&self.resolved);
        for fragment in &self.pending {
            out.push_str(fragment);
        }
    }

    fn push(&mut self, fragment: impl Into<Cow<'static, str>>) -> &mut Self {
        let fragment = fragment.into();
        trace!("append fragment {:?}", fragment);
        self.pending.push(fragment);
        self
    }

    // === Anchors ===

    /// Anchor the pattern at the start of the line. Idempotent.
    pub fn start_of_line(&mut self) -> &mut Self {
        self.resolve();
        if !self.resolved.starts_with('^') {
            self.resolved.insert(0, '^');
        }
        self
    }

    /// Anchor the pattern at the end of the line. Idempotent.
    pub fn end_of_line(&mut self) -> &mut Self {
        self.resolve();
        if !self.resolved.ends_with('$') {
            self.resolved.push('$');
        }
        self
    }

    // === Literal text ===

    /// Match `text` literally.
    pub fn find(&mut self, text: impl fmt::Display) -> &mut Self {
        let text = text.to_string();
        self.push(format!("(?:{})", escape(&text)))
    }

    /// Alias for [`find`](Self::find) that reads better mid-chain.
    pub fn then(&mut self, text: impl fmt::Display) -> &mut Self {
        self.find(text)
    }

    /// Optionally match `text` literally.
    pub fn maybe(&mut self, text: impl fmt::Display) -> &mut Self {
        let text = text.to_string();
        self.push(format!("(?:{})?", escape(&text)))
    }

    /// Zero or more characters, none of which appear in `chars`.
    pub fn anything_but(&mut self, chars: impl fmt::Display) -> &mut Self {
        let chars = chars.to_string();
        self.push(format!("(?:[^{}]*)", class_escape(&chars)))
    }

    /// One or more characters, none of which appear in `chars`.
    pub fn something_but(&mut self, chars: impl fmt::Display) -> &mut Self {
        let chars = chars.to_string();
        self.push(format!("(?:[^{}]+)", class_escape(&chars)))
    }

    /// Any single character from `chars`.
    pub fn any_of(&mut self, chars: impl fmt::Display) -> &mut Self {
        let chars = chars.to_string();
        self.push(format!("(?:[{}])", class_escape(&chars)))
    }

    /// Alias for [`any_of`](Self::any_of).
    pub fn any(&mut self, chars: impl fmt::Display) -> &mut Self {
        self.any_of(chars)
    }

    /// A single character from one of the inclusive ranges given as
    /// consecutive `from`, `to` pairs. Only the first character of each
    /// bound is used.
    ///
    /// ```
    /// # fn main() -> verbex::Result<()> {
    /// let mut hex = verbex::VerbalExpression::new();
    /// hex.range(&["0", "9", "A", "F"])?;
    /// assert_eq!(hex.resolve(), "(?:[0-9A-F])");
    /// # Ok(())
    /// # }
    /// ```
    pub fn range<S: AsRef<str>>(&mut self, bounds: &[S]) -> Result<&mut Self> {
        if bounds.is_empty() || bounds.len() % 2 != 0 {
            return Err(rejected(Error::RangeBoundCount {
                count: bounds.len(),
            }));
        }

        let mut class = String::from("(?:[");
        for (index, bound) in bounds.iter().enumerate() {
            let Some(c) = bound.as_ref().chars().next() else {
                return Err(rejected(Error::EmptyRangeBound { index }));
            };
            if index % 2 == 1 {
                class.push('-');
            }
            if is_metacharacter(c) || is_class_operator(c) {
                class.push('\\');
            }
            class.push(c);
        }
        class.push_str("])");
        Ok(self.push(class))
    }

    // === Character shorthands ===

    /// Zero or more of any character.
    pub fn anything(&mut self) -> &mut Self {
        self.push("(?:.*)")
    }

    /// One or more of any character.
    pub fn something(&mut self) -> &mut Self {
        self.push("(?:.+)")
    }

    /// A Unix (`\n`) or Windows (`\r\n`) line break.
    pub fn line_break(&mut self) -> &mut Self {
        self.push(r"(?:(?:\n)|(?:\r\n))")
    }

    /// Alias for [`line_break`](Self::line_break).
    pub fn br(&mut self) -> &mut Self {
        self.line_break()
    }

    pub fn tab(&mut self) -> &mut Self {
        self.push(r"(?:\t)")
    }

    /// One or more word characters.
    pub fn word(&mut self) -> &mut Self {
        self.push(r"(?:\w+)")
    }

    // === Quantifiers ===
    //
    // These apply to whatever atom or group precedes them.

    /// Exactly `n` repetitions.
    pub fn exactly(&mut self, n: usize) -> Result<&mut Self> {
        check_count("exactly", n)?;
        Ok(self.push(format!("{{{}}}", n)))
    }

    /// Between `min` and `max` repetitions; `max` must exceed `min`.
    pub fn between(&mut self, min: usize, max: usize) -> Result<&mut Self> {
        check_bounds("between", min, max)?;
        Ok(self.push(format!("{{{},{}}}", min, max)))
    }

    /// At least `n` repetitions.
    pub fn at_least(&mut self, n: usize) -> Result<&mut Self> {
        check_count("at_least", n)?;
        Ok(self.push(format!("{{{},}}", n)))
    }

    /// At most `n` repetitions.
    pub fn no_more_than(&mut self, n: usize) -> Result<&mut Self> {
        check_count("no_more_than", n)?;
        Ok(self.push(format!("{{0,{}}}", n)))
    }

    /// `text` repeated at least `min` times, and at most `max` times when
    /// given. Arguments are checked before anything is appended.
    pub fn multiple(
        &mut self,
        text: impl fmt::Display,
        min: usize,
        max: Option<usize>,
    ) -> Result<&mut Self> {
        match max {
            Some(max) => check_bounds("multiple", min, max)?,
            None => check_count("multiple", min)?,
        }
        self.find(text);
        let quantifier = match max {
            Some(max) => format!("{{{},{}}}", min, max),
            None => format!("{{{},}}", min),
        };
        Ok(self.push(quantifier))
    }

    // === Alternation, captures and groups ===

    /// Start a new alternative.
    pub fn alternatively(&mut self) -> &mut Self {
        self.push("|")
    }

    /// Alias for [`alternatively`](Self::alternatively).
    pub fn or(&mut self) -> &mut Self {
        self.alternatively()
    }

    /// Open a capturing group.
    pub fn begin_capture(&mut self) -> &mut Self {
        self.capture_depth += 1;
        self.push("(")
    }

    /// Close the innermost capturing group.
    pub fn end_capture(&mut self) -> Result<&mut Self> {
        if self.capture_depth == 0 {
            return Err(rejected(Error::UnbalancedCapture));
        }
        self.capture_depth -= 1;
        Ok(self.push(")"))
    }

    /// Open a non-capturing group.
    pub fn begin_group(&mut self) -> &mut Self {
        self.group_depth += 1;
        self.push("(?:")
    }

    /// Close the innermost non-capturing group.
    pub fn end_group(&mut self) -> Result<&mut Self> {
        if self.group_depth == 0 {
            return Err(rejected(Error::UnbalancedGroup));
        }
        self.group_depth -= 1;
        Ok(self.push(")"))
    }

    // === Flags ===

    /// Match letters regardless of case.
    pub fn with_any_case(&mut self) -> &mut Self {
        self.case_insensitive = true;
        self
    }

    /// Ask callers to stop after the first match instead of matching
    /// globally.
    pub fn stop_at_first(&mut self) -> &mut Self {
        self.stop_at_first = true;
        self
    }

    /// Treat the subject as one line: `.` matches `\n` too.
    pub fn search_one_line(&mut self) -> &mut Self {
        self.single_line = true;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn stops_at_first(&self) -> bool {
        self.stop_at_first
    }

    pub fn is_single_line(&self) -> bool {
        self.single_line
    }

    /// Number of captures opened and not yet closed.
    pub fn capture_depth(&self) -> usize {
        self.capture_depth
    }

    /// Number of non-capturing groups opened and not yet closed.
    pub fn group_depth(&self) -> usize {
        self.group_depth
    }

    /// `true` when every capture and group has been closed.
    pub fn is_balanced(&self) -> bool {
        self.capture_depth == 0 && self.group_depth == 0
    }

    /// Engine compile options implied by the flags.
    pub fn compile_flags(&self) -> CompileFlags {
        let mut flags = CompileFlags::empty();
        flags.set(CompileFlags::CASE_INSENSITIVE, self.case_insensitive);
        flags.set(CompileFlags::SINGLE_LINE, self.single_line);
        flags
    }

    // === Combination ===

    /// A new builder matching `self` followed by `other`.
    ///
    /// Flags are OR-ed and open depths are summed. Neither operand is
    /// modified.
    ///
    /// ```
    /// use verbex::VerbalExpression;
    ///
    /// let mut scheme = VerbalExpression::new();
    /// scheme.find("http").maybe("s");
    /// let mut rest = VerbalExpression::new();
    /// rest.find("://").with_any_case();
    ///
    /// let mut url = scheme.concat(&rest);
    /// assert_eq!(url.resolve(), "(?:http)(?:s)?(?://)");
    /// assert!(url.is_case_insensitive());
    /// ```
    pub fn concat(&self, other: &VerbalExpression) -> VerbalExpression {
        let mut resolved = String::with_capacity(self.pattern_len() + other.pattern_len());
        self.write_pattern(&mut resolved);
        other.write_pattern(&mut resolved);
        trace!("combined pattern {:?}", resolved);

        VerbalExpression {
            resolved,
            pending: SmallVec::new(),
            case_insensitive: self.case_insensitive || other.case_insensitive,
            stop_at_first: self.stop_at_first || other.stop_at_first,
            single_line: self.single_line || other.single_line,
            capture_depth: self.capture_depth + other.capture_depth,
            group_depth: self.group_depth + other.group_depth,
        }
    }
}

/// Free-function form of [`VerbalExpression::concat`].
pub fn combine(left: &VerbalExpression, right: &VerbalExpression) -> VerbalExpression {
    left.concat(right)
}

/// Escape text for use inside `[...]`. On top of the literal set, `&` and
/// `~` are escaped so doubled ones cannot form class-set operators
/// (`&&`, `~~`) in engines that support them.
fn class_escape(chars: &str) -> String {
    let escaped = escape(chars);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if is_class_operator(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn is_class_operator(c: char) -> bool {
    c == '&' || c == '~'
}

fn rejected(err: Error) -> Error {
    debug!("rejected operation: {}", err);
    err
}

fn check_count(op: &'static str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(rejected(Error::ZeroCount { op }));
    }
    Ok(())
}

fn check_bounds(op: &'static str, min: usize, max: usize) -> Result<()> {
    check_count(op, min)?;
    if max <= min {
        return Err(rejected(Error::InvertedBounds { op, min, max }));
    }
    Ok(())
}

impl<'a> Extend<&'a VerbalExpression> for VerbalExpression {
    /// Append each builder in turn, with the same merge rules as
    /// [`concat`](VerbalExpression::concat).
    fn extend<I: IntoIterator<Item = &'a VerbalExpression>>(&mut self, iter: I) {
        for other in iter {
            self.push(other.as_pattern().into_owned());
            self.case_insensitive |= other.case_insensitive;
            self.stop_at_first |= other.stop_at_first;
            self.single_line |= other.single_line;
            self.capture_depth += other.capture_depth;
            self.group_depth += other.group_depth;
        }
    }
}

impl<'a> FromIterator<&'a VerbalExpression> for VerbalExpression {
    fn from_iter<I: IntoIterator<Item = &'a VerbalExpression>>(iter: I) -> Self {
        let mut combined = VerbalExpression::new();
        combined.extend(iter);
        combined
    }
}

impl PartialEq for VerbalExpression {
    /// Builders are equal when their patterns, flags and depths are; how
    /// much of the pattern is still buffered does not matter.
    fn eq(&self, other: &Self) -> bool {
        self.case_insensitive == other.case_insensitive
            && self.stop_at_first == other.stop_at_first
            && self.single_line == other.single_line
            && self.capture_depth == other.capture_depth
            && self.group_depth == other.group_depth
            && self.as_pattern() == other.as_pattern()
    }
}

impl Eq for VerbalExpression {}

impl fmt::Display for VerbalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolved)?;
        for fragment in &self.pending {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for VerbalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerbalExpression")
            .field("pattern", &self.as_pattern())
            .field("case_insensitive", &self.case_insensitive)
            .field("stop_at_first", &self.stop_at_first)
            .field("single_line", &self.single_line)
            .field("capture_depth", &self.capture_depth)
            .field("group_depth", &self.group_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn new_is_empty() {
        let mut v = VerbalExpression::new();
        assert_eq!(v.resolve(), "");
        assert!(!v.is_case_insensitive());
        assert!(!v.stops_at_first());
        assert!(!v.is_single_line());
        assert_eq!(v.capture_depth(), 0);
        assert_eq!(v.group_depth(), 0);
        assert!(v.is_balanced());
        assert!(v.compile_flags().is_empty());
    }

    #[test]
    fn url_prefix() {
        let mut v = VerbalExpression::new();
        v.find("http").maybe("s").find("://");
        assert_eq!(v.resolve(), "(?:http)(?:s)?(?://)");
        assert_eq!(v.compile_flags(), CompileFlags::empty());
        assert!(!v.stops_at_first());
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut v = VerbalExpression::new();
        v.find("a").anything();
        assert_eq!(v.as_pattern(), "(?:a)(?:.*)");
        let first = v.resolve().to_string();
        assert_eq!(v.resolve(), first);
        assert!(v.pending.is_empty());
        assert!(matches!(v.as_pattern(), Cow::Borrowed(_)));
    }

    #[test]
    fn pending_spills_past_inline_capacity() {
        let mut v = VerbalExpression::new();
        for _ in 0..INLINE_FRAGMENTS * 2 {
            v.tab();
        }
        assert_eq!(v.to_string(), r"(?:\t)".repeat(INLINE_FRAGMENTS * 2));
        assert_eq!(v.resolve(), r"(?:\t)".repeat(INLINE_FRAGMENTS * 2));
    }

    #[test]
    fn start_of_line_once() {
        let mut v = VerbalExpression::new();
        v.find("a").start_of_line().start_of_line();
        assert_eq!(v.resolve(), "^(?:a)");
    }

    #[test]
    fn end_of_line_once() {
        let mut v = VerbalExpression::new();
        v.find("a").end_of_line().end_of_line();
        assert_eq!(v.resolve(), "(?:a)$");
    }

    #[test]
    fn anchors_on_empty_pattern() {
        let mut v = VerbalExpression::new();
        v.start_of_line().end_of_line();
        assert_eq!(v.resolve(), "^$");
    }

    #[test]
    fn literal_ops_escape() {
        let mut v = VerbalExpression::new();
        v.find("1+1").maybe("(x)").anything_but("-]").any_of("$.");
        assert_eq!(
            v.resolve(),
            r"(?:1\+1)(?:\(x\))?(?:[^\-\]]*)(?:[\$\.])"
        );
    }

    #[test]
    fn class_ops_escape_set_operators() {
        let mut v = VerbalExpression::new();
        v.any_of("a&&b").anything_but("~~").something_but("&");
        assert_eq!(
            v.resolve(),
            r"(?:[a\&\&b])(?:[^\~\~]*)(?:[^\&]+)"
        );
    }

    #[test]
    fn find_leaves_ampersand_and_tilde() {
        let mut v = VerbalExpression::new();
        v.find("a&&b~~");
        assert_eq!(v.resolve(), "(?:a&&b~~)");
    }

    #[test]
    fn display_input_is_coerced() {
        let mut v = VerbalExpression::new();
        v.find(42).maybe(1.5).any_of('-');
        assert_eq!(v.resolve(), r"(?:42)(?:1\.5)?(?:[\-])");
    }

    #[test]
    fn shorthands() {
        let mut v = VerbalExpression::new();
        v.anything().something().line_break().tab().word().something_but("x");
        assert_eq!(
            v.resolve(),
            r"(?:.*)(?:.+)(?:(?:\n)|(?:\r\n))(?:\t)(?:\w+)(?:[^x]+)"
        );
    }

    #[test]
    fn aliases_match_originals() {
        let mut a = VerbalExpression::new();
        a.then("x").any("ab").br().or();
        let mut b = VerbalExpression::new();
        b.find("x").any_of("ab").line_break().alternatively();
        assert_eq!(a, b);
    }

    #[test]
    fn range_pairs() {
        let mut v = VerbalExpression::new();
        v.range(&["0", "9", "A", "F"]).unwrap();
        assert_eq!(v.resolve(), "(?:[0-9A-F])");
    }

    #[test]
    fn range_uses_first_char_and_escapes() {
        let mut v = VerbalExpression::new();
        v.range(&["abc", "zzz", "-", "."]).unwrap();
        assert_eq!(v.resolve(), r"(?:[a-z\-\.])");
    }

    #[test]
    fn range_escapes_set_operators() {
        let mut v = VerbalExpression::new();
        v.range(&["a", "&", "&", "z"]).unwrap();
        assert_eq!(v.resolve(), r"(?:[a-\&\&-z])");
    }

    #[test]
    fn range_rejects_bad_bounds() {
        let mut v = VerbalExpression::new();
        v.find("x");

        let err = v.range(&["a", "z", "0"]).unwrap_err();
        assert_eq!(err, Error::RangeBoundCount { count: 3 });
        assert_eq!(err.kind(), ErrorKind::Range);

        let empty: [&str; 0] = [];
        assert_eq!(
            v.range(&empty).unwrap_err(),
            Error::RangeBoundCount { count: 0 }
        );

        let err = v.range(&["a", ""]).unwrap_err();
        assert_eq!(err, Error::EmptyRangeBound { index: 1 });
        assert_eq!(err.kind(), ErrorKind::Type);

        assert_eq!(v.resolve(), "(?:x)");
    }

    #[test]
    fn quantifiers() {
        let mut v = VerbalExpression::new();
        v.find("a").exactly(3).unwrap();
        v.find("b").between(1, 4).unwrap();
        v.find("c").at_least(2).unwrap();
        v.find("d").no_more_than(5).unwrap();
        assert_eq!(v.resolve(), "(?:a){3}(?:b){1,4}(?:c){2,}(?:d){0,5}");
    }

    #[test]
    fn quantifiers_reject_zero() {
        let mut v = VerbalExpression::new();
        assert_eq!(
            v.exactly(0).unwrap_err(),
            Error::ZeroCount { op: "exactly" }
        );
        assert!(v.at_least(0).is_err());
        assert!(v.no_more_than(0).is_err());
        assert!(v.between(0, 2).is_err());
        assert_eq!(v.resolve(), "");
    }

    #[test]
    fn between_requires_strictly_greater_max() {
        let mut v = VerbalExpression::new();
        let err = v.between(3, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(v.between(3, 2).is_err());
        assert!(v.between(3, 4).is_ok());
        assert_eq!(v.resolve(), "{3,4}");
    }

    #[test]
    fn multiple_matches_find_then_quantifier() {
        let mut a = VerbalExpression::new();
        a.multiple("ab", 2, Some(5)).unwrap();
        let mut b = VerbalExpression::new();
        b.find("ab").between(2, 5).unwrap();
        assert_eq!(a.resolve(), b.resolve());

        let mut c = VerbalExpression::new();
        c.multiple("ab", 2, None).unwrap();
        assert_eq!(c.resolve(), "(?:ab){2,}");
    }

    #[test]
    fn multiple_validates_before_appending() {
        let mut v = VerbalExpression::new();
        assert!(v.multiple("ab", 0, None).is_err());
        assert_eq!(
            v.multiple("ab", 4, Some(4)).unwrap_err(),
            Error::InvertedBounds {
                op: "multiple",
                min: 4,
                max: 4
            }
        );
        assert_eq!(v.resolve(), "");
    }

    #[test]
    fn capture_depth_tracks_open_captures() {
        let mut v = VerbalExpression::new();
        v.begin_capture().begin_capture().find("x");
        assert_eq!(v.capture_depth(), 2);
        v.end_capture().unwrap();
        assert_eq!(v.capture_depth(), 1);
        v.end_capture().unwrap();
        assert_eq!(v.capture_depth(), 0);

        let err = v.end_capture().unwrap_err();
        assert_eq!(err, Error::UnbalancedCapture);
        assert_eq!(err.kind(), ErrorKind::Nesting);
        assert_eq!(v.capture_depth(), 0);
        assert_eq!(v.resolve(), "(((?:x)))");
    }

    #[test]
    fn group_depth_tracks_open_groups() {
        let mut v = VerbalExpression::new();
        v.begin_group().find("a").alternatively().find("b");
        assert_eq!(v.group_depth(), 1);
        assert!(!v.is_balanced());
        v.end_group().unwrap().exactly(2).unwrap();
        assert!(v.is_balanced());
        assert_eq!(v.end_group().unwrap_err(), Error::UnbalancedGroup);
        assert_eq!(v.resolve(), "(?:(?:a)|(?:b)){2}");
    }

    #[test]
    fn flag_operations_leave_pattern_alone() {
        let mut v = VerbalExpression::new();
        v.find("a").with_any_case().stop_at_first().search_one_line();
        assert_eq!(v.resolve(), "(?:a)");
        assert!(v.is_case_insensitive());
        assert!(v.stops_at_first());
        assert!(v.is_single_line());
        assert_eq!(v.compile_flags(), CompileFlags::all());
    }

    #[test]
    fn concat_merges_flags_and_depths() {
        let mut a = VerbalExpression::new();
        a.begin_capture().find("a").with_any_case();
        let mut b = VerbalExpression::new();
        b.begin_capture().begin_group().find("b").stop_at_first();

        let mut c = a.concat(&b);
        assert_eq!(c.resolve(), "((?:a)((?:(?:b)");
        assert!(c.is_case_insensitive());
        assert!(c.stops_at_first());
        assert!(!c.is_single_line());
        assert_eq!(c.capture_depth(), 2);
        assert_eq!(c.group_depth(), 1);
    }

    #[test]
    fn concat_leaves_operands_untouched() {
        let mut a = VerbalExpression::new();
        a.find("a");
        let b = VerbalExpression::new();
        let before = a.clone();
        let _ = combine(&a, &b);
        assert_eq!(a, before);
        assert_eq!(a.pending.len(), 1);
    }

    #[test]
    fn combine_is_associative() {
        let mut a = VerbalExpression::new();
        a.find("a").begin_capture();
        let mut b = VerbalExpression::new();
        b.maybe("b").search_one_line();
        let mut c = VerbalExpression::new();
        c.begin_group().word().with_any_case();

        let left = combine(&combine(&a, &b), &c);
        let right = combine(&a, &combine(&b, &c));
        assert_eq!(left, right);
        assert_eq!(left.to_string(), "(?:a)((?:b)?(?:(?:\\w+)");
    }

    #[test]
    fn collect_folds_like_combine() {
        let mut a = VerbalExpression::new();
        a.find("a");
        let mut b = VerbalExpression::new();
        b.find("b").stop_at_first();
        let collected: VerbalExpression = [&a, &b].into_iter().collect();
        assert_eq!(collected, combine(&a, &b));
    }

    #[test]
    fn debug_shows_pattern() {
        let mut v = VerbalExpression::new();
        v.find("a");
        let s = format!("{:?}", v);
        assert!(s.contains("(?:a)"));
        assert!(s.contains("capture_depth: 0"));
    }
}
