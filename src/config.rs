//! Run configuration loaded from TOML.
//!
//! ```toml
//! output = "ascii"          # annotated | ascii | txt2tags
//! granularity = "words"     # chars | graphemes | words
//! run = "TestMath, TestStrings::concat"
//! exclude = ["TestSlow"]
//! reverse_order = false
//! stop_on_error = true
//! max_table_cells = 1000000
//! ```

use crate::align::SequenceAligner;
use crate::errors::{SuiteError, SuiteResult};
use crate::highlight::{Granularity, HighlightOptions};
use crate::report::OutputMode;
use crate::suite::Selector;
use serde::{Deserialize, Serialize};
use simple_tokenize::tokenize;
use std::fs;
use std::path::Path;

/// Settings that influence how cases run and how failures are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputMode,
    pub highlight: HighlightOptions,
    /// Skip the remaining cases of a fixture after its first failing case.
    pub stop_on_error: bool,
}

/// A list of test names, written either as a TOML array or as one
/// comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    Joined(String),
    List(Vec<String>),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::List(Vec::new())
    }
}

impl NameList {
    /// Individual names, split on commas and whitespace.
    pub fn names(&self) -> Vec<String> {
        let is_separator = |c: char| c == ',' || c.is_whitespace();
        match self {
            NameList::Joined(joined) => tokenize(joined, &is_separator),
            NameList::List(entries) => entries
                .iter()
                .flat_map(|entry| tokenize(entry, &is_separator))
                .collect(),
        }
    }
}

/// Contents of a suite configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub output: OutputMode,
    pub granularity: Granularity,
    /// Selectors to run, in order. Empty runs everything.
    pub run: NameList,
    /// Fixtures removed from the suite before running.
    pub exclude: NameList,
    pub reverse_order: bool,
    pub stop_on_error: bool,
    /// Upper bound on LCS table cells used for diff highlighting.
    pub max_table_cells: Option<usize>,
}

impl SuiteConfig {
    /// Load from a TOML file. A missing file yields the default configuration.
    pub fn load(path: &Path) -> SuiteResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no suite config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SuiteError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            SuiteError::Parse { message } => SuiteError::Parse {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded suite config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> SuiteResult<Self> {
        toml::from_str(content).map_err(|e| SuiteError::Parse {
            message: e.to_string(),
        })
    }

    pub fn settings(&self) -> Settings {
        let aligner = match self.max_table_cells {
            Some(limit) => SequenceAligner::with_cell_limit(limit),
            None => SequenceAligner::new(),
        };

        Settings {
            output: self.output,
            highlight: HighlightOptions {
                granularity: self.granularity,
                aligner,
            },
            stop_on_error: self.stop_on_error,
        }
    }

    /// Parsed `run` entries; empty means run everything.
    pub fn selectors(&self) -> Vec<Selector> {
        self.run.names().iter().map(|name| Selector::parse(name)).collect()
    }

    pub fn excluded(&self) -> Vec<String> {
        self.exclude.names()
    }
}
