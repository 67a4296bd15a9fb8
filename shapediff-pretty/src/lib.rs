#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Renders any [`Reflect`](shapediff_core::Reflect) value as stable,
//! single-line, `Debug`-like text.
//!
//! The diff engine uses this rendering both as its equality oracle (two values
//! are equal when they render identically) and as the fallback description of
//! composite values in reports.

mod printer;

pub use printer::*;
