//! Recording of failed comparisons.
//!
//! Every failed `equals`-style assertion leaves an [`AssertRecord`] with the
//! quoted expected and actual values. Records are rendered either verbatim or
//! with the differences marked by [`crate::highlight`].

use crate::highlight::{highlight, HighlightOptions, MarkerRenderer};
use std::fmt;

/// One failed comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertRecord {
    /// Source file of the assertion.
    pub file: String,
    /// Source line of the assertion.
    pub line: u32,
    /// Expected value, already quoted with [`quote_literal`].
    pub expected: String,
    /// Actual value, already quoted with [`quote_literal`].
    pub actual: String,
    /// Extra text supplied by the assertion, printed after the values.
    pub message: Option<String>,
}

impl AssertRecord {
    /// Render this record, marking the differences when `annotate` is set.
    pub fn render(&self, options: &HighlightOptions, annotate: bool) -> String {
        if !annotate {
            return self.to_string();
        }

        let marked = highlight(&self.expected, &self.actual, options, &MarkerRenderer);
        MarkedRecord {
            record: self,
            expected: &marked.expected,
            actual: &marked.actual,
        }
        .to_string()
    }

    fn write_with<W: fmt::Write>(
        &self,
        out: &mut W,
        expected: &str,
        actual: &str,
    ) -> fmt::Result {
        writeln!(out, "Assertion failed in {} at line {}", self.file, self.line)?;
        writeln!(out, "Expected:")?;
        writeln!(out, "{}", expected)?;
        writeln!(out, "Actual:")?;
        writeln!(out, "{}", actual)?;
        if let Some(message) = &self.message {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }
}

impl fmt::Display for AssertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &self.expected, &self.actual)
    }
}

/// A record shown with highlighted values in place of its own.
struct MarkedRecord<'a> {
    record: &'a AssertRecord,
    expected: &'a str,
    actual: &'a str,
}

impl fmt::Display for MarkedRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.record.write_with(f, self.expected, self.actual)
    }
}

/// Ordered collection of [`AssertRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct AssertRecorder {
    records: Vec<AssertRecord>,
}

impl AssertRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record and return a reference to it.
    pub fn record(&mut self, record: AssertRecord) -> &AssertRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[AssertRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render all records in insertion order.
    pub fn render(&self, options: &HighlightOptions, annotate: bool) -> String {
        self.records
            .iter()
            .map(|record| record.render(options, annotate))
            .collect()
    }
}

/// Quote a value for display in a failure report.
///
/// The empty string stays empty. Anything else is wrapped in double quotes
/// with newlines, tabs and carriage returns written as `\n`, `\t` and `\r`.
pub fn quote_literal(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
