//! Core invoice types, parsers, VAT arithmetic and formatting.
//!
//! All operations are pure functions of their inputs; nothing here keeps
//! state between calls.

mod calc;
mod error;
mod invoice;
mod parse;
mod types;

pub use calc::*;
pub use error::*;
pub use invoice::*;
pub use parse::*;
pub use types::*;
