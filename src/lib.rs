//! A small unit-testing harness with diff highlighting for failed
//! comparisons.
//!
//! Fixtures implement [`TestFixture`] and are collected in a [`TestSuite`].
//! Running the suite threads a [`RunContext`] through every case; the
//! context carries the assertion counters and the failure messages and is
//! handed back to the caller together with the console report.
//!
//! When two values differ, the expected and actual text are aligned on their
//! longest common subsequence and the differences are marked, see
//! [`align`] and [`highlight`](mod@highlight).
//!
//! ## Modules
//!
//! - [`align`] - LCS table construction and alignment reconstruction
//! - [`highlight`](mod@highlight) - Segmentation and rendering of aligned text
//! - [`recorder`] - Failed comparison records
//! - [`context`] - Per-run counters and failure log
//! - [`fixture`] - Fixtures, cases and assertions
//! - [`suite`] - Fixture collection and run driver
//! - [`report`] - Status lines and final statistics
//! - [`config`] - TOML run configuration
//! - [`errors`] - Error types

pub mod align;
pub mod config;
pub mod context;
pub mod errors;
pub mod fixture;
pub mod highlight;
pub mod recorder;
pub mod report;
pub mod suite;

// Re-exports for convenient access to core types
pub use align::{
    compute_lcs_table, reconstruct_alignment, AlignmentResult, Annotated, LcsTable,
    SequenceAligner, Tag,
};
pub use config::{NameList, Settings, SuiteConfig};
pub use context::RunContext;
pub use errors::{AlignError, SuiteError, SuiteResult};
pub use fixture::{CaseRunner, Check, Radix, TestFixture};
pub use highlight::{
    highlight, Granularity, HighlightOptions, Highlighted, MarkerRenderer, PlainRenderer, Renderer,
};
pub use recorder::{quote_literal, AssertRecord, AssertRecorder};
pub use report::{CaseStatus, FinalReport, OutputMode};
pub use suite::{RunOutcome, Selector, TestSuite};
