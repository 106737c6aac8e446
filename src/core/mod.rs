//! Invoice model, code tables, builders and total validation.
//!
//! The types here are plain data; rendering lives in the `cii` module.

mod builder;
pub mod codes;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use types::*;
pub use validation::*;
