use std::sync::Arc;

use shapediff_core::Reflect;
use shapediff_pretty::PrettyPrinter;

use crate::Canonicalize;

/// Nesting level past which composite values are compared as leaves.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Nesting depth past which the default description printer elides values.
///
/// The default canonicalizer has no such cap: elided renderings would make
/// values that differ only below it compare equal.
const DEFAULT_RENDER_DEPTH: usize = 256;

/// Options for customizing how values are compared and described.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use shapediff_diff::DiffOptions;
///
/// let options = DiffOptions::new().max_depth(8);
/// ```
#[derive(Clone)]
pub struct DiffOptions {
    pub(crate) max_depth: usize,
    pub(crate) printer: PrettyPrinter,
    pub(crate) canonicalizer: Arc<dyn Canonicalize + Send + Sync>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            printer: PrettyPrinter::new().with_max_depth(DEFAULT_RENDER_DEPTH),
            canonicalizer: Arc::new(PrettyPrinter::new()),
        }
    }
}

impl DiffOptions {
    /// Create a new `DiffOptions` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deepest nesting level the engine descends into.
    ///
    /// Below it, differing composite values are reported as a single
    /// `Received:` / `Expected:` block of their whole renderings.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Replace the equality oracle.
    pub fn canonicalizer(
        mut self,
        canonicalizer: impl Canonicalize + Send + Sync + 'static,
    ) -> Self {
        self.canonicalizer = Arc::new(canonicalizer);
        self
    }

    /// Replace the printer used for plain descriptions of values.
    pub fn printer(mut self, printer: PrettyPrinter) -> Self {
        self.printer = printer;
        self
    }

    pub(crate) fn canonicalize(&self, value: &dyn Reflect) -> String {
        self.canonicalizer.canonicalize(value)
    }

    pub(crate) fn describe(&self, value: &dyn Reflect) -> String {
        self.printer.describe(value)
    }
}

impl core::fmt::Debug for DiffOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiffOptions")
            .field("max_depth", &self.max_depth)
            .field("printer", &self.printer)
            .finish_non_exhaustive()
    }
}
