use shapediff_core::Reflect;
use shapediff_pretty::PrettyPrinter;

/// Renders a value into a stable string used as the engine's equality oracle.
///
/// Two values that canonicalize identically are treated as equal, whether or
/// not they implement `PartialEq`. Implementations must be stable (the same
/// value always renders the same way) and must reflect every piece of state
/// that matters for equality.
pub trait Canonicalize {
    /// The canonical rendering of `value`.
    fn canonicalize(&self, value: &dyn Reflect) -> String;
}

impl Canonicalize for PrettyPrinter {
    fn canonicalize(&self, value: &dyn Reflect) -> String {
        self.format(value)
    }
}
