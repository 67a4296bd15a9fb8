//! Entry points.

use std::io::{self, Write};

use shapediff_core::Reflect;
use tracing::debug;

use crate::engine::Engine;
use crate::{DiffError, DiffOptions, DiffReport};

/// Compares `expected` against `received` and returns one rendered entry per
/// difference, in discovery order. Equal values yield an empty list.
///
/// ```
/// use shapediff_diff::diff_list;
///
/// let entries = diff_list(&vec![1, 2, 3], &vec![1, 5, 3]);
/// assert_eq!(entries, ["Child 1:\n|\tReceived: 5\n|\tExpected: 2\n\n"]);
/// ```
pub fn diff_list<T: Reflect>(expected: &T, received: &T) -> Vec<String> {
    diff_list_with(expected, received, &DiffOptions::default())
}

/// Like [`diff_list`], with custom options.
pub fn diff_list_with<T: Reflect>(
    expected: &T,
    received: &T,
    options: &DiffOptions,
) -> Vec<String> {
    collect_entries(expected, received, options)
}

/// Like [`diff_list_with`], for values only known as trait objects.
///
/// Both values must have the same type. This is checked up front and reported
/// as [`DiffError::TypeMismatch`] instead of producing a meaningless report.
pub fn try_diff_list(
    expected: &dyn Reflect,
    received: &dyn Reflect,
    options: &DiffOptions,
) -> Result<Vec<String>, DiffError> {
    let (expected_type, received_type) = (expected.type_name(), received.type_name());
    if expected_type != received_type {
        return Err(DiffError::TypeMismatch {
            expected: expected_type,
            received: received_type,
        });
    }
    Ok(collect_entries(expected, received, options))
}

/// Like [`diff_list`], but skips all work when `PartialEq` already says the
/// values are equal.
pub fn diff_if_ne<T: Reflect + PartialEq>(expected: &T, received: &T) -> Vec<String> {
    if expected == received {
        debug!(type_name = expected.type_name(), "values are equal, skipping diff");
        return Vec::new();
    }
    diff_list(expected, received)
}

/// Collects the differences into a [`DiffReport`].
pub fn diff_report<T: Reflect>(expected: &T, received: &T) -> DiffReport {
    DiffReport::new(diff_list(expected, received))
}

/// `Ok(())` when there is nothing to report, the report otherwise.
pub fn check_no_diff<T: Reflect>(expected: &T, received: &T) -> Result<(), DiffReport> {
    let report = diff_report(expected, received);
    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

/// Prints every entry to standard output, in order.
pub fn dump_diff<T: Reflect>(expected: &T, received: &T) {
    for entry in diff_list(expected, received) {
        print!("{entry}");
    }
}

/// Like [`dump_diff`], but skips all work when `PartialEq` already says the
/// values are equal.
pub fn dump_diff_if_ne<T: Reflect + PartialEq>(expected: &T, received: &T) {
    for entry in diff_if_ne(expected, received) {
        print!("{entry}");
    }
}

/// Writes every entry to `writer`, in order.
pub fn dump_diff_to<W: Write, T: Reflect>(
    writer: &mut W,
    expected: &T,
    received: &T,
) -> io::Result<()> {
    for entry in diff_list(expected, received) {
        writer.write_all(entry.as_bytes())?;
    }
    writer.flush()
}

fn collect_entries(
    expected: &dyn Reflect,
    received: &dyn Reflect,
    options: &DiffOptions,
) -> Vec<String> {
    let mut entries = Vec::new();
    Engine::new(options).compare_values(expected, received, 0, &mut |entry| entries.push(entry));
    debug!(
        type_name = expected.type_name(),
        entries = entries.len(),
        "diff complete"
    );
    entries
}
