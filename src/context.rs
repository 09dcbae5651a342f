//! Counters and failure output of a test run.

use crate::highlight::HighlightOptions;
use crate::recorder::{AssertRecord, AssertRecorder};

/// State accumulated while fixtures run.
///
/// A context is created by the caller, threaded through every case and handed
/// back at the end. Nothing is kept in globals, so separate runs never share
/// counters.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    tests_run: usize,
    asserts: usize,
    fails: usize,
    todos: usize,
    failure_log: Vec<String>,
    recorder: AssertRecorder,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of test cases started.
    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    /// Number of assertions evaluated, failed ones included.
    pub fn asserts(&self) -> usize {
        self.asserts
    }

    pub fn fails(&self) -> usize {
        self.fails
    }

    /// Number of `todo` assertions that still fail.
    pub fn todos(&self) -> usize {
        self.todos
    }

    pub fn successful(&self) -> usize {
        self.asserts.saturating_sub(self.fails)
    }

    pub fn recorder(&self) -> &AssertRecorder {
        &self.recorder
    }

    /// Failure messages in the order they occurred.
    pub fn failure_log(&self) -> &[String] {
        &self.failure_log
    }

    /// All failure messages joined together.
    pub fn failure_text(&self) -> String {
        self.failure_log.concat()
    }

    /// Check if the run had no failed assertion.
    pub fn success(&self) -> bool {
        self.fails == 0
    }

    /// Get the exit code (0 = pass, 1 = failures).
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    pub(crate) fn record_test(&mut self) {
        self.tests_run += 1;
    }

    pub(crate) fn record_pass(&mut self) {
        self.asserts += 1;
    }

    pub(crate) fn record_todo(&mut self) {
        self.todos += 1;
    }

    /// Record a failed assertion that has no expected/actual pair.
    pub(crate) fn record_failure(&mut self, file: &str, line: u32, message: Option<&str>) {
        self.asserts += 1;
        self.fails += 1;

        let mut entry = format!("Assertion failed in {} at line {}\n", file, line);
        if let Some(message) = message {
            entry.push_str(message);
            entry.push('\n');
        }
        tracing::debug!(file, line, "assertion failed");
        self.failure_log.push(entry);
    }

    /// Record a failed comparison and log it rendered with `options`.
    pub(crate) fn record_mismatch(
        &mut self,
        record: AssertRecord,
        options: &HighlightOptions,
        annotate: bool,
    ) {
        self.asserts += 1;
        self.fails += 1;

        tracing::debug!(file = %record.file, line = record.line, "comparison failed");
        let entry = self.recorder.record(record).render(options, annotate);
        self.failure_log.push(entry);
    }
}
