use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Every rule the evaluator can raise, in declaration order.
///
/// Declaration order is the tie-break for violations on the same file and
/// line, so output ordering is deterministic across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    UnreadableFile,
    StructuralWarning,
    TabCharacter,
    IndentWidth,
    LineLength,
    MultiplePublicClasses,
    StaticField,
    EmptyMethod,
    UnusedPrivateMethod,
    MissingClassJavadoc,
    MissingMethodJavadoc,
    MissingJavadocTag,
    MissingOverride,
    MissingTestAnnotation,
    TestNamePrefix,
    MissingAssertDelta,
}

impl RuleId {
    /// Stable rule name used in output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnreadableFile => "unreadable-file",
            Self::StructuralWarning => "structural-warning",
            Self::TabCharacter => "tab-character",
            Self::IndentWidth => "indent-width",
            Self::LineLength => "line-length",
            Self::MultiplePublicClasses => "multiple-public-classes",
            Self::StaticField => "static-field",
            Self::EmptyMethod => "empty-method",
            Self::UnusedPrivateMethod => "unused-private-method",
            Self::MissingClassJavadoc => "missing-class-javadoc",
            Self::MissingMethodJavadoc => "missing-method-javadoc",
            Self::MissingJavadocTag => "missing-javadoc-tag",
            Self::MissingOverride => "missing-override",
            Self::MissingTestAnnotation => "missing-test-annotation",
            Self::TestNamePrefix => "test-name-prefix",
            Self::MissingAssertDelta => "missing-assert-delta",
        }
    }

    /// Structural warnings do not fail the run by themselves; everything
    /// else does.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::StructuralWarning => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// One rule violation raised against a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleId,
    pub severity: Severity,
    pub file: PathBuf,
    /// 1-based line the violation references; always a line that exists in
    /// the file it was raised against.
    pub line: usize,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(rule: RuleId, file: &Path, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            file: file.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl Ord for Violation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file
            .cmp(&other.file)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.rule.cmp(&other.rule))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
