// engine.rs - Hand a finished expression to the `regex` crate.
//
// The builder only produces a pattern string and compile flags; this
// module compiles them and exposes the handful of match operations
// callers need, honoring the stop-at-first hint.

use std::borrow::Cow;
use std::collections::HashMap;

use log::trace;
use regex::{Regex, RegexBuilder, Replacer};

pub use regex::{Captures, Match, NoExpand};

use crate::builder::VerbalExpression;
use crate::error::{Error, Result};
use crate::flags::CompileFlags;

impl VerbalExpression {
    /// Compile the current pattern with its flags.
    ///
    /// Literal `{` and `}` are not escaped, and `regex` reads them as
    /// repetition syntax. A pattern such as `(?:{)`, which PCRE takes as
    /// a literal brace, is rejected here with [`Error::Engine`].
    ///
    /// ```
    /// # fn main() -> verbex::Result<()> {
    /// let mut v = verbex::VerbalExpression::new();
    /// v.find("hello").with_any_case();
    /// let m = v.compile()?;
    /// assert!(m.is_match("Say HELLO"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn compile(&self) -> Result<Matcher> {
        let pattern = self.as_pattern();
        let flags = self.compile_flags();
        trace!("compiling {:?} with {:?}", pattern, flags);

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(flags.contains(CompileFlags::CASE_INSENSITIVE))
            .dot_matches_new_line(flags.contains(CompileFlags::SINGLE_LINE))
            .build()
            .map_err(|e| Error::Engine {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(Matcher {
            regex,
            stop_at_first: self.stops_at_first(),
        })
    }
}

/// A compiled [`VerbalExpression`].
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    stop_at_first: bool,
}

impl Matcher {
    /// Check whether `subject` matches anywhere.
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }

    /// Check whether `subject` matches at or after byte offset `start`.
    ///
    /// An offset past the end or inside a UTF-8 sequence never matches.
    pub fn is_match_at(&self, subject: &str, start: Option<usize>) -> bool {
        match start {
            None => self.regex.is_match(subject),
            Some(start) if subject.is_char_boundary(start) => {
                self.regex.is_match_at(subject, start)
            }
            Some(_) => false,
        }
    }

    /// The first match at or after byte offset `start` (default 0).
    pub fn find<'t>(&self, subject: &'t str, start: Option<usize>) -> Option<Match<'t>> {
        let start = start.unwrap_or(0);
        if !subject.is_char_boundary(start) {
            return None;
        }
        self.regex.find_at(subject, start)
    }

    /// Capture groups of the first match, or `None`.
    pub fn captures<'t>(&self, subject: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(subject)
    }

    /// Lazily iterate over non-overlapping matches.
    ///
    /// Yields at most one match when the expression was marked
    /// stop-at-first.
    pub fn find_iter<'r, 't>(&'r self, subject: &'t str) -> FindIter<'r, 't> {
        FindIter {
            inner: self.regex.find_iter(subject),
            done: false,
            single: self.stop_at_first,
        }
    }

    /// Replace matches in `subject`.
    ///
    /// `replacement` may be a string (with `$1`-style expansion; wrap it in
    /// [`NoExpand`] to disable that), a closure over [`Captures`], or a
    /// [`Lookup`] table. At most `max` matches are replaced, or all of
    /// them when `max` is `None`; stop-at-first caps the count at one.
    pub fn replace<'t, R: Replacer>(
        &self,
        subject: &'t str,
        replacement: R,
        max: Option<usize>,
    ) -> Cow<'t, str> {
        let limit = match max {
            Some(0) => return Cow::Borrowed(subject),
            Some(_) if self.stop_at_first => 1,
            Some(n) => n,
            None if self.stop_at_first => 1,
            // replacen treats 0 as "no limit"
            None => 0,
        };
        self.regex.replacen(subject, limit, replacement)
    }

    /// Number of capture groups, excluding the implicit whole-match group.
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len() - 1
    }

    pub fn stops_at_first(&self) -> bool {
        self.stop_at_first
    }

    /// The pattern this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Access the underlying [`Regex`].
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

// === FindIter ===

/// Iterator over matches returned by [`Matcher::find_iter`].
#[derive(Debug)]
pub struct FindIter<'r, 't> {
    inner: regex::Matches<'r, 't>,
    done: bool,
    single: bool,
}

impl<'r, 't> Iterator for FindIter<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        if self.done {
            return None;
        }
        let m = self.inner.next();
        if self.single || m.is_none() {
            self.done = true;
        }
        m
    }
}

// === Lookup ===

/// Replacement that swaps each matched text for its entry in a table.
/// Matches with no entry are left as they are.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a>(pub &'a HashMap<String, String>);

impl Replacer for Lookup<'_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        let matched = &caps[0];
        match self.0.get(matched) {
            Some(value) => dst.push_str(value),
            None => dst.push_str(matched),
        }
    }
}
