#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use shapediff_core::*;

/// Derives [`Reflect`](trait@Reflect) for a struct or an enum.
///
/// See the [crate documentation](crate#attributes) for the accepted attributes.
pub use shapediff_macros::Reflect;

pub use shapediff_diff::*;

pub use shapediff_pretty::PrettyPrinter;

pub use shapediff_assert::{assert_no_diff, debug_assert_no_diff};
