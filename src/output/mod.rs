mod json;
mod text;
mod tree;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};
pub use tree::TreeFormatter;

use crate::checker::Violation;
use crate::error::Result;

/// Outcome of one check run, handed to formatters.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub files_checked: usize,
    pub violations: Vec<Violation>,
}

impl CheckOutcome {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.violations.iter().filter(|v| v.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.violations.len() - self.error_count()
    }

    /// Error-severity violations drive the process-level pass/fail decision.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(Violation::is_error)
    }
}

/// Trait for formatting a check outcome into various output formats.
pub trait OutputFormatter {
    /// Format the outcome into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, outcome: &CheckOutcome) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
