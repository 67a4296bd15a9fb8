//! [`Reflect`](crate::Reflect) implementations for std types, plus the two
//! synthetic values the engine and the derive macro build on the fly.

mod collections;
mod core_types;
mod pointers;
mod synthetic;
mod tuples;

pub use synthetic::{Missing, Payload};
