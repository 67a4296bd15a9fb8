//! Collected diff entries with plain and colored rendering.

use owo_colors::OwoColorize;

use crate::format::INDENT_MARKER;

/// The entries of one comparison, kept together for rendering.
///
/// ```
/// use shapediff_diff::diff_report;
///
/// let report = diff_report(&(1, "a"), &(1, "b"));
/// assert_eq!(report.len(), 1);
/// println!("{}", report.render_ansi());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    entries: Vec<String>,
}

impl DiffReport {
    /// Wraps already rendered entries.
    pub const fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The entries, in discovery order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consumes the report, returning its entries.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the compared values had no differences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries concatenated, exactly as produced.
    pub fn render_plain(&self) -> String {
        self.entries.concat()
    }

    /// The plain text with `Received:` lines in red, `Expected:` lines in
    /// green and headers in bold.
    pub fn render_ansi(&self) -> String {
        let plain = self.render_plain();
        let mut out = String::with_capacity(plain.len() * 2);
        for line in plain.split_inclusive('\n') {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            let content = body.trim_start_matches(INDENT_MARKER);
            out.push_str(&body[..body.len() - content.len()]);

            if let Some(rest) = content.strip_prefix("Received: ") {
                out.push_str(&format!("{} {}", "Received:".red().bold(), rest.red()));
            } else if let Some(rest) = content.strip_prefix("Expected: ") {
                out.push_str(&format!("{} {}", "Expected:".green().bold(), rest.green()));
            } else if !content.is_empty() {
                out.push_str(&format!("{}", content.bold()));
            }
            out.push_str(newline);
        }
        out
    }
}

impl core::fmt::Display for DiffReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for entry in &self.entries {
            f.write_str(entry)?;
        }
        Ok(())
    }
}

impl IntoIterator for DiffReport {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
