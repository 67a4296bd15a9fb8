#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Assertions that explain themselves.
//!
//! [`assert_no_diff!`] compares two values of the same reflected type and,
//! when they differ, panics with the full structural report instead of two
//! `Debug` dumps.
//!
//! ```
//! use shapediff_assert::assert_no_diff;
//!
//! assert_no_diff!(vec![1, 2, 3], vec![1, 2, 3]);
//! ```

#[doc(hidden)]
pub use shapediff_diff::check_no_diff;
pub use shapediff_diff::DiffReport;

/// Asserts that two values have no structural differences.
///
/// # Panics
///
/// Panics with the plain diff report if any difference is found.
///
/// ```should_panic
/// use shapediff_assert::assert_no_diff;
///
/// assert_no_diff!(vec![1, 2, 3], vec![1, 5, 3], "lists drifted");
/// ```
#[macro_export]
macro_rules! assert_no_diff {
    ($expected:expr, $received:expr $(,)?) => {
        if let ::core::result::Result::Err(report) = $crate::check_no_diff(&$expected, &$received) {
            panic!("assertion `assert_no_diff!(expected, received)` failed\n\n{report}");
        }
    };
    ($expected:expr, $received:expr, $($arg:tt)+) => {
        if let ::core::result::Result::Err(report) = $crate::check_no_diff(&$expected, &$received) {
            panic!(
                "assertion `assert_no_diff!(expected, received)` failed: {}\n\n{report}",
                format_args!($($arg)+)
            );
        }
    };
}

/// Asserts that two values have no structural differences (debug builds only).
///
/// Like [`assert_no_diff!`], but only enabled in debug builds.
#[macro_export]
macro_rules! debug_assert_no_diff {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_no_diff!($($arg)*);
        }
    };
}
