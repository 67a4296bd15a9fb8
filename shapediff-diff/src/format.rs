//! Text primitives for diff entries.
//!
//! Every entry is built from two pieces: the indentation marker repeated once
//! per nesting level, and the two-line `Received:` / `Expected:` block. Headers
//! are an indented title line followed by their nested entries, inlined.

/// One level of indentation.
pub const INDENT_MARKER: &str = "|\t";

/// Header of an entry reporting differing child counts.
pub const DIFFERENT_COUNT: &str = "Different count:";

/// Stands in for a missing enum case label.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// The indentation marker repeated `level` times.
pub fn render_indentation(level: usize) -> String {
    INDENT_MARKER.repeat(level)
}

/// The `Received:` line, then the `Expected:` line, then a blank line.
pub fn render_expected_received(expected: &str, received: &str, level: usize) -> String {
    let indent = render_indentation(level);
    format!("{indent}Received: {received}\n{indent}Expected: {expected}\n\n")
}

/// A title line at `level` with `nested` entries inlined below it.
pub fn render_header(title: &str, level: usize, nested: &[String]) -> String {
    let mut out = render_indentation(level);
    out.push_str(title);
    out.push('\n');
    for entry in nested {
        out.push_str(entry);
    }
    out
}

/// `Different count:` with both counts and whole-value renderings one level down.
pub fn render_count_mismatch(
    expected_count: usize,
    expected: &str,
    received_count: usize,
    received: &str,
    level: usize,
) -> String {
    let block = render_expected_received(
        &format!("({expected_count}) {expected}"),
        &format!("({received_count}) {received}"),
        level + 1,
    );
    render_header(DIFFERENT_COUNT, level, &[block])
}

/// One `SetElement missing:` line.
pub fn render_missing_element(element: &str, level: usize) -> String {
    format!("{}SetElement missing: {element}\n", render_indentation(level))
}
