mod inheritance;
mod javadoc;
mod style;
mod testing;
mod violation;

pub use inheritance::{AncestorIndex, InheritanceChecker};
pub use javadoc::JavadocChecker;
pub use style::StyleChecker;
pub use testing::TestingChecker;
pub use violation::{RuleId, Severity, Violation};

use crate::config::RulesConfig;
use crate::extractor::SourceFile;

/// Applies every enabled rule to a set of scanned files.
///
/// Rules are independent and order-insensitive in effect; the final sort by
/// (file, line, rule declaration order) makes output byte-identical across
/// runs on the same input.
pub struct RuleEvaluator {
    config: RulesConfig,
}

impl RuleEvaluator {
    #[must_use]
    pub const fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Evaluate all rules over the symbol models, returning the ordered
    /// violation sequence.
    #[must_use]
    pub fn evaluate(&self, files: &[SourceFile]) -> Vec<Violation> {
        let index = AncestorIndex::build(files);
        let style = StyleChecker::new(&self.config.style);
        let javadoc = JavadocChecker::new(&self.config.style);
        let inheritance = InheritanceChecker::new(&self.config.style);
        let testing = TestingChecker::new(&self.config.testing);

        let mut violations = Vec::new();
        for file in files {
            for issue in &file.issues {
                violations.push(Violation::new(
                    RuleId::StructuralWarning,
                    &file.path,
                    issue.line,
                    issue.message.clone(),
                ));
            }
            style.check(file, &mut violations);
            javadoc.check(file, &mut violations);
            inheritance.check(file, &index, &mut violations);
            testing.check(file, &mut violations);
        }

        violations.sort();
        violations
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
