//! # verbex
//!
//! Build regular expressions out of readable, named operations instead of
//! writing pattern syntax by hand.
//!
//! A [`VerbalExpression`] accumulates a pattern string together with a few
//! flags (case-insensitive, single-line, stop-at-first) and the number of
//! captures and groups still open. Literal text is escaped on the way in;
//! quantifier and group operations append raw syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use verbex::prelude::*;
//!
//! let mut url = VerbalExpression::new();
//! url.start_of_line()
//!     .find("http")
//!     .maybe("s")
//!     .find("://")
//!     .anything_but(" ")
//!     .end_of_line();
//!
//! assert_eq!(url.resolve(), "^(?:http)(?:s)?(?://)(?:[^ ]*)$");
//! assert!(url.compile_flags().is_empty());
//! ```
//!
//! Quantifiers, `range` and the closing operations validate their
//! arguments and return a [`Result`]:
//!
//! ```rust
//! use verbex::prelude::*;
//!
//! # fn main() -> verbex::Result<()> {
//! let mut year = VerbalExpression::new();
//! year.begin_capture()
//!     .range(&["0", "9"])?
//!     .exactly(4)?
//!     .end_capture()?;
//! assert_eq!(year.resolve(), "((?:[0-9]){4})");
//!
//! let err = year.between(3, 3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! # Ok(())
//! # }
//! ```
//!
//! Two builders are joined with [`combine`] (or
//! [`VerbalExpression::concat`]), which OR-s their flags and sums their
//! open depths.
//!
//! ## Matching
//!
//! With the default `engine` feature, [`VerbalExpression::compile`] hands
//! the pattern and its [`CompileFlags`] to the `regex` crate:
//!
//! ```rust
//! # #[cfg(feature = "engine")]
//! # {
//! use verbex::prelude::*;
//!
//! let mut v = VerbalExpression::new();
//! v.find("cat").with_any_case().stop_at_first();
//! let m = v.compile().unwrap();
//! assert_eq!(m.replace("Cat cat", "dog", None), "dog cat");
//! # }
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`builder`] | [`VerbalExpression`] and [`combine`] |
//! | [`escape`](mod@escape) | Literal text escaping |
//! | [`flags`] | [`CompileFlags`] |
//! | [`error`] | [`Error`] and [`ErrorKind`] |
//! | `engine` | Compilation and matching (feature `engine`) |

pub mod builder;
pub mod error;
pub mod escape;
pub mod flags;
pub mod prelude;

#[cfg(feature = "engine")]
pub mod engine;

pub use builder::{combine, VerbalExpression};
pub use error::{Error, ErrorKind, Result};
pub use escape::escape;
pub use flags::CompileFlags;

#[cfg(feature = "engine")]
pub use engine::{Lookup, Matcher};
