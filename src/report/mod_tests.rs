use super::*;

fn method(name: &str, covered: u64, total: u64) -> ReportNode {
    let mut node = ReportNode::leaf(name.to_string(), NodeKind::Method, NodeStatus::Pass);
    node.coverage = Some(Coverage::new(covered, total));
    node
}

#[test]
fn empty_counter_is_vacuously_complete() {
    let cov = Coverage::new(0, 0);
    assert!((cov.percent() - 100.0).abs() < f64::EPSILON);
    assert!(cov.is_complete());
}

#[test]
fn percent_computes_ratio() {
    let cov = Coverage::new(8, 10);
    assert!((cov.percent() - 80.0).abs() < f64::EPSILON);
}

#[test]
fn coverage_aggregates_from_direct_children() {
    let full = ReportNode::internal(
        "Full".to_string(),
        NodeKind::Class,
        vec![method("a()", 5, 5)],
    );
    let partial = ReportNode::internal(
        "Partial".to_string(),
        NodeKind::Class,
        vec![method("b()", 3, 5)],
    );
    let mut package =
        ReportNode::internal("com.example".to_string(), NodeKind::Package, vec![full, partial]);
    package.aggregate();

    assert_eq!(package.coverage, Some(Coverage::new(8, 10)));
    assert!((package.coverage.unwrap().percent() - 80.0).abs() < f64::EPSILON);
    assert_eq!(package.status, NodeStatus::Partial);
}

#[test]
fn gap_tree_contains_only_incomplete_nodes() {
    let full = ReportNode::internal(
        "Full".to_string(),
        NodeKind::Class,
        vec![method("a()", 5, 5)],
    );
    let partial = ReportNode::internal(
        "Partial".to_string(),
        NodeKind::Class,
        vec![method("b()", 3, 5)],
    );
    let mut package =
        ReportNode::internal("com.example".to_string(), NodeKind::Package, vec![full, partial]);
    package.aggregate();

    let gaps = package.gap_tree(100.0).expect("package is below threshold");
    assert_eq!(gaps.children.len(), 1);
    assert_eq!(gaps.children[0].name, "Partial");
}

#[test]
fn fully_covered_tree_has_no_gaps() {
    let mut class = ReportNode::internal(
        "Full".to_string(),
        NodeKind::Class,
        vec![method("a()", 5, 5), method("b()", 0, 0)],
    );
    class.aggregate();
    assert!(class.gap_tree(100.0).is_none());
}

#[test]
fn gap_tree_respects_lower_threshold() {
    let mut class = ReportNode::internal(
        "Mostly".to_string(),
        NodeKind::Class,
        vec![method("a()", 9, 10)],
    );
    class.aggregate();
    assert!(class.gap_tree(90.0).is_none());
    assert!(class.gap_tree(95.0).is_some());
}

#[test]
fn status_fail_dominates() {
    let mut suite = ReportNode::internal(
        "Suite".to_string(),
        NodeKind::Suite,
        vec![
            ReportNode::leaf("ok".to_string(), NodeKind::Case, NodeStatus::Pass),
            ReportNode::leaf("bad".to_string(), NodeKind::Case, NodeStatus::Fail),
            ReportNode::leaf("meh".to_string(), NodeKind::Case, NodeStatus::Skip),
        ],
    );
    suite.aggregate();
    assert_eq!(suite.status, NodeStatus::Fail);
    assert!(suite.has_failure());
}

#[test]
fn status_skip_when_no_failures() {
    let mut suite = ReportNode::internal(
        "Suite".to_string(),
        NodeKind::Suite,
        vec![
            ReportNode::leaf("ok".to_string(), NodeKind::Case, NodeStatus::Pass),
            ReportNode::leaf("meh".to_string(), NodeKind::Case, NodeStatus::Skip),
        ],
    );
    suite.aggregate();
    assert_eq!(suite.status, NodeStatus::Skip);
    assert!(!suite.has_failure());
}

#[test]
fn status_pass_when_all_pass() {
    let mut suite = ReportNode::internal(
        "Suite".to_string(),
        NodeKind::Suite,
        vec![ReportNode::leaf("ok".to_string(), NodeKind::Case, NodeStatus::Pass)],
    );
    suite.aggregate();
    assert_eq!(suite.status, NodeStatus::Pass);
}
