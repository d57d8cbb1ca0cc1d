// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use verbex::prelude::*;
//!
//! let mut v = VerbalExpression::new();
//! v.find("a.b");
//! assert_eq!(v.resolve(), r"(?:a\.b)");
//! ```

pub use crate::builder::{combine, VerbalExpression};
pub use crate::error::{Error, ErrorKind};
pub use crate::escape::escape;
pub use crate::flags::CompileFlags;

#[cfg(feature = "engine")]
pub use crate::engine::{Lookup, Matcher};
