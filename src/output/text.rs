use std::io::Write as IoWrite;

use crate::checker::{Severity, Violation};
use crate::error::Result;

use super::{CheckOutcome, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_violation(&self, violation: &Violation, output: &mut Vec<u8>) {
        let (icon, color) = match violation.severity {
            Severity::Error => ("✗", ansi::RED),
            Severity::Warning => ("⚠", ansi::YELLOW),
        };
        let location = format!("line {}", violation.line);
        writeln!(
            output,
            "  {} {}: {} [{}]",
            self.colorize(icon, color),
            location,
            violation.message,
            violation.rule.name()
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &CheckOutcome) -> Result<String> {
        let mut output = Vec::new();

        // Violations arrive pre-sorted by (file, line, rule); group headers
        // follow file boundaries.
        let mut current_file: Option<&std::path::Path> = None;
        for violation in &outcome.violations {
            if current_file != Some(violation.file.as_path()) {
                if current_file.is_some() {
                    writeln!(output).ok();
                }
                writeln!(output, "== {} ==", violation.file.display()).ok();
                current_file = Some(violation.file.as_path());
            }
            self.format_violation(violation, &mut output);
        }

        if !outcome.violations.is_empty() {
            writeln!(output).ok();
        }

        let errors = outcome.error_count();
        let warnings = outcome.warning_count();
        let errors_str = self.colorize(&errors.to_string(), ansi::RED);
        let warnings_str = self.colorize(&warnings.to_string(), ansi::YELLOW);
        writeln!(
            output,
            "Summary: {} files checked, {errors_str} errors, {warnings_str} warnings",
            outcome.files_checked
        )
        .ok();

        let verdict = if outcome.has_errors() {
            self.colorize("✗ checks failed", ansi::RED)
        } else {
            self.colorize("✓ checks passed", ansi::GREEN)
        };
        writeln!(output, "{verdict}").ok();

        if self.verbose >= 1 && outcome.violations.is_empty() {
            writeln!(output, "No violations found.").ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
