#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Structural reflection for shapediff.
//!
//! A value that implements [`Reflect`] can describe itself as a [`Node`]: a
//! [`Shape`] tag plus an ordered list of labeled [`Child`] values. The diff
//! engine walks these nodes without knowing anything else about the type.
//!
//! Implementations are provided for primitives, strings, smart pointers,
//! `Option`, `Result`, tuples, arrays, slices and the std collections. User
//! types get theirs from `#[derive(Reflect)]` in the `shapediff` crate.

mod impls;
mod node;
mod shape;

pub use impls::{Missing, Payload};
pub use node::*;
pub use shape::*;

use core::fmt;

/// A value whose structure can be inspected at runtime.
///
/// This trait is object safe: the diff engine only ever sees `&dyn Reflect`.
pub trait Reflect {
    /// Reports the shape of this value and its ordered children.
    ///
    /// Must never fail. Values whose structure is unknown report [`Node::opaque`].
    fn reflect(&self) -> Node<'_>;

    /// The name of the concrete type, used for precondition checks.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Writes the canonical text of a leaf value.
    ///
    /// Only called for values that reflect as [`Shape::Opaque`]; composite
    /// values are rendered from their children instead.
    fn fmt_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }

    /// A plain, human-oriented description of the value (strings unquoted,
    /// floats without trailing `.0`).
    ///
    /// `None` means the value should be described by rendering its structure.
    fn describe(&self) -> Option<String> {
        None
    }
}

impl<'a> dyn Reflect + 'a {
    /// Returns a [`Display`](fmt::Display) adapter for [`Reflect::fmt_leaf`].
    pub fn leaf(&self) -> LeafDisplay<'_, 'a> {
        LeafDisplay(self)
    }
}

/// Displays a value through [`Reflect::fmt_leaf`].
pub struct LeafDisplay<'r, 'a>(&'r (dyn Reflect + 'a));

impl fmt::Display for LeafDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_leaf(f)
    }
}
