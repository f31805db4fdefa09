#[macro_use]
pub mod error;
pub mod option;
pub mod result;
pub mod dynamic;
pub mod prelude;

pub use error::Error;
pub use option::Option;
pub use result::Result;
pub use dynamic::Value;
