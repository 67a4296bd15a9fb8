/// Errors reported by the checked entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The two values do not have the same type, so their structures cannot
    /// be paired.
    TypeMismatch {
        /// Type name of the expected value.
        expected: &'static str,
        /// Type name of the received value.
        received: &'static str,
    },
}

impl core::fmt::Display for DiffError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiffError::TypeMismatch { expected, received } => write!(
                f,
                "cannot diff values of different types: expected `{expected}`, received `{received}`"
            ),
        }
    }
}

impl core::error::Error for DiffError {}
