use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::SubmitGuardError;

use super::*;
use crate::report::{Coverage, NodeStatus};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<report name="example">
  <package name="com/example">
    <class name="com/example/Full">
      <method name="covered" desc="()V">
        <counter type="METHOD" missed="0" covered="1"/>
        <counter type="LINE" missed="0" covered="5"/>
      </method>
    </class>
    <class name="com/example/Partial">
      <method name="half" desc="()V">
        <counter type="METHOD" missed="0" covered="1"/>
        <counter type="LINE" missed="2" covered="3"/>
      </method>
    </class>
  </package>
  <counter type="METHOD" missed="0" covered="2"/>
  <counter type="BRANCH" missed="1" covered="3"/>
  <counter type="LINE" missed="2" covered="8"/>
</report>
"#;

fn write_report(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("jacoco.xml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn builds_package_class_method_tree() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, SAMPLE);

    let tree = CoverageReportBuilder::new(CounterKind::Line)
        .build_tree(&path)
        .unwrap();

    assert_eq!(tree.name, "example");
    let package = &tree.children[0];
    assert_eq!(package.name, "com.example");
    assert_eq!(package.children.len(), 2);
    assert_eq!(package.children[0].name, "Full");
    assert_eq!(package.children[1].name, "Partial");
}

#[test]
fn aggregation_sums_children_without_double_counting() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, SAMPLE);

    let tree = CoverageReportBuilder::new(CounterKind::Line)
        .build_tree(&path)
        .unwrap();

    let package = &tree.children[0];
    assert_eq!(package.coverage, Some(Coverage::new(8, 10)));
    assert!((package.coverage.unwrap().percent() - 80.0).abs() < f64::EPSILON);
    assert_eq!(tree.coverage, Some(Coverage::new(8, 10)));
    assert_eq!(package.status, NodeStatus::Partial);
}

#[test]
fn gap_tree_prunes_covered_class() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, SAMPLE);

    let tree = CoverageReportBuilder::new(CounterKind::Line)
        .build_tree(&path)
        .unwrap();
    let gaps = tree.gap_tree(100.0).expect("coverage is incomplete");

    let package = &gaps.children[0];
    assert_eq!(package.children.len(), 1);
    assert_eq!(package.children[0].name, "Partial");
}

#[test]
fn method_counter_selects_other_counters() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, SAMPLE);

    let tree = CoverageReportBuilder::new(CounterKind::Method)
        .build_tree(&path)
        .unwrap();
    // Both methods fully covered by METHOD counters
    assert_eq!(tree.coverage, Some(Coverage::new(2, 2)));
    assert!(tree.gap_tree(100.0).is_none());
}

#[test]
fn totals_read_report_level_counters() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, SAMPLE);

    let totals = read_totals(&path).unwrap();
    assert_eq!(totals.method, Coverage::new(2, 2));
    assert_eq!(totals.branch, Coverage::new(3, 4));
    assert_eq!(totals.line, Coverage::new(8, 10));
    assert!(totals.method.is_complete());
    assert!(!totals.branch.is_complete());
}

#[test]
fn missing_counter_defaults_to_vacuous() {
    let minimal = r#"<report name="empty">
  <package name="com/example">
    <class name="com/example/NoCounters">
      <method name="mystery" desc="()V"/>
    </class>
  </package>
</report>"#;
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, minimal);

    let tree = CoverageReportBuilder::new(CounterKind::Line)
        .build_tree(&path)
        .unwrap();
    assert_eq!(tree.coverage, Some(Coverage::new(0, 0)));
    assert!(tree.gap_tree(100.0).is_none());
}

#[test]
fn missing_file_is_distinct_error() {
    let result = CoverageReportBuilder::new(CounterKind::Line)
        .build_tree(std::path::Path::new("/no/such/jacoco.xml"));
    assert!(matches!(result, Err(SubmitGuardError::ReportMissing { .. })));
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "<report><oops>");

    let result = CoverageReportBuilder::new(CounterKind::Line).build_tree(&path);
    assert!(matches!(result, Err(SubmitGuardError::ReportParse { .. })));
}

#[test]
fn unexpected_root_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "<testsuite name=\"T\"/>");

    let result = read_totals(&path);
    assert!(matches!(result, Err(SubmitGuardError::ReportParse { .. })));
}
