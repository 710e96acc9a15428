use serde::Serialize;

use crate::checker::{Severity, Violation};
use crate::error::Result;

use super::{CheckOutcome, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<ViolationRecord>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    total: usize,
    errors: usize,
    warnings: usize,
    passed: bool,
}

#[derive(Serialize)]
struct ViolationRecord {
    file: String,
    line: usize,
    rule: &'static str,
    severity: &'static str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &CheckOutcome) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_checked: outcome.files_checked,
                total: outcome.violations.len(),
                errors: outcome.error_count(),
                warnings: outcome.warning_count(),
                passed: !outcome.has_errors(),
            },
            violations: outcome.violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> ViolationRecord {
    ViolationRecord {
        file: violation.file.display().to_string(),
        line: violation.line,
        rule: violation.rule.name(),
        severity: match violation.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        },
        message: violation.message.clone(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
