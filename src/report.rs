//! Console report formatting.
//!
//! Every test case produces one status line and a run ends with a block of
//! statistics. Both are [`fmt::Display`] values, so callers decide where the
//! text goes.

use crate::context::RunContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Column at which the `[OK]`/`[NOK]` status ends.
pub const STATUS_COLUMN: usize = 80;

/// Layout of the console report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain text with differences marked inside failure messages.
    #[default]
    Annotated,
    /// Plain text without difference markers.
    Ascii,
    /// txt2tags table rows.
    Txt2Tags,
}

impl OutputMode {
    /// Whether failure messages mark the differences between values.
    pub fn annotates(self) -> bool {
        self == OutputMode::Annotated
    }
}

/// Status line of one test case.
///
/// Ascii and annotated output:
///
/// ```text
/// TestMath::addition.................................................... [OK]
/// ```
///
/// txt2tags output: `| TestMath::addition |  [OK] | `.
#[derive(Debug, Clone, Copy)]
pub struct CaseStatus<'a> {
    pub mode: OutputMode,
    pub fixture: &'a str,
    pub case: &'a str,
    pub passed: bool,
}

impl fmt::Display for CaseStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { " [OK]" } else { " [NOK]" };

        match self.mode {
            OutputMode::Txt2Tags => {
                writeln!(f, "| {}::{} | {} | ", self.fixture, self.case, status)
            }
            OutputMode::Annotated | OutputMode::Ascii => {
                let header = format!("{}::{}", self.fixture, self.case);
                let used = UnicodeWidthStr::width(header.as_str()) + status.len();
                let dots = STATUS_COLUMN.saturating_sub(used);
                writeln!(f, "{}{}{}", header, ".".repeat(dots), status)
            }
        }
    }
}

const HEADLINE: &str = "Test statistics";
const ASSERTS_LABEL: &str = "#Asserts (#Tests)...: ";
const TODOS_LABEL: &str = "#To do's............: ";
const SUCCESSFUL_LABEL: &str = "#Successful asserts.: ";
const FAILED_LABEL: &str = "#Failed asserts.....: ";

/// Statistics printed after all fixtures ran.
#[derive(Debug, Clone, Copy)]
pub struct FinalReport<'a> {
    pub mode: OutputMode,
    pub context: &'a RunContext,
}

impl fmt::Display for FinalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.context;
        let rows = [
            (
                ASSERTS_LABEL,
                format!("{} ({})", ctx.asserts(), ctx.tests_run()),
            ),
            (TODOS_LABEL, ctx.todos().to_string()),
            (SUCCESSFUL_LABEL, ctx.successful().to_string()),
            (FAILED_LABEL, ctx.fails().to_string()),
        ];

        writeln!(f, "{}", HEADLINE)?;
        for (label, value) in &rows {
            match self.mode {
                OutputMode::Txt2Tags => writeln!(f, "| {} | {} | ", label, value)?,
                OutputMode::Annotated | OutputMode::Ascii => writeln!(f, "{}{}", label, value)?,
            }
        }
        Ok(())
    }
}
