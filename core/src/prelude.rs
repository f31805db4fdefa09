//! Glob-import this module to use the containers of this crate in place of the standard library's `Option` and
//! `Result`, including their variant constructors.
//!
//! ```
//! use duality_core::prelude::*;
//!
//! let parsed: Result<i32, &str> = Some(1).ok_or("missing");
//! assert_eq!(parsed.map(|v| v + 1), Ok(2));
//! assert_eq!(None::<i32>.xor(Some(3)), Some(3));
//! ```

pub use crate::error::Error;
pub use crate::option::Option::{self, None, Some};
pub use crate::result::Result::{self, Err, Ok};
pub use crate::dynamic::Value;
