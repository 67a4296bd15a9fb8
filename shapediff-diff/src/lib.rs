#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Hierarchical difference reports between two values of the same type.
//!
//! The engine reflects both values, picks a strategy per [`Shape`] (positional
//! pairing for structs and tuples, key lookup for maps, set difference for
//! sets, case comparison for enums) and emits one pre-indented text block per
//! difference found:
//!
//! ```text
//! Child age:
//! |	Received: 31
//! |	Expected: 30
//! ```
//!
//! Reports are for humans. They are not a patch format.
//!
//! [`Shape`]: shapediff_core::Shape

mod api;
mod canonical;
mod engine;
mod error;
pub mod format;
mod options;
mod report;

pub use api::*;
pub use canonical::Canonicalize;
pub use error::DiffError;
pub use options::DiffOptions;
pub use report::DiffReport;
