use std::path::Path;

use super::*;

#[test]
fn severity_mapping() {
    assert_eq!(RuleId::StructuralWarning.severity(), Severity::Warning);
    assert_eq!(RuleId::LineLength.severity(), Severity::Error);
    assert_eq!(RuleId::UnreadableFile.severity(), Severity::Error);
}

#[test]
fn names_are_stable() {
    assert_eq!(RuleId::MissingOverride.name(), "missing-override");
    assert_eq!(RuleId::TabCharacter.name(), "tab-character");
}

#[test]
fn ordering_by_file_then_line_then_rule() {
    let a = Violation::new(RuleId::LineLength, Path::new("A.java"), 10, "x");
    let b = Violation::new(RuleId::TabCharacter, Path::new("A.java"), 2, "x");
    let c = Violation::new(RuleId::TabCharacter, Path::new("B.java"), 1, "x");
    let d = Violation::new(RuleId::LineLength, Path::new("A.java"), 2, "x");

    let mut violations = vec![a.clone(), b.clone(), c.clone(), d.clone()];
    violations.sort();

    // A.java:2 tab (declared before line-length), A.java:2 length,
    // A.java:10, then B.java
    assert_eq!(violations, vec![b, d, a, c]);
}

#[test]
fn is_error_reflects_severity() {
    let error = Violation::new(RuleId::LineLength, Path::new("A.java"), 1, "x");
    let warning = Violation::new(RuleId::StructuralWarning, Path::new("A.java"), 1, "x");
    assert!(error.is_error());
    assert!(!warning.is_error());
}
