//! The composed two-pass summary report.

use std::fmt;

/// Heading above the first-pass output.
pub const FIRST_PASS_HEADING: &str = "## First Pass: The Five Cs";
/// Heading above the second-pass output.
pub const SECOND_PASS_HEADING: &str = "## Second Pass: Detailed Analysis";
/// Attribution footer closing every report.
pub const ATTRIBUTION_FOOTER: &str =
    "Summary generated using the methodology from \"How to read a paper\" by S. Keshav.";

/// Final summary: title, both pass outputs verbatim, and the footer.
///
/// Rendering never fails; a failed pass is carried as its placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    title: String,
    first_pass: String,
    second_pass: String,
}

impl SummaryReport {
    /// Creates a report from the paper title and both pass outputs.
    pub fn new(
        title: impl Into<String>,
        first_pass: impl Into<String>,
        second_pass: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            first_pass: first_pass.into(),
            second_pass: second_pass.into(),
        }
    }

    /// The paper title the report was written for.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First-pass output (or its placeholder).
    #[must_use]
    pub fn first_pass(&self) -> &str {
        &self.first_pass
    }

    /// Second-pass output (or its placeholder).
    #[must_use]
    pub fn second_pass(&self) -> &str {
        &self.second_pass
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Summary of \"{}\"", self.title)?;
        writeln!(f)?;
        writeln!(f, "{FIRST_PASS_HEADING}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.first_pass)?;
        writeln!(f)?;
        writeln!(f, "{SECOND_PASS_HEADING}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.second_pass)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "{ATTRIBUTION_FOOTER}")
    }
}
