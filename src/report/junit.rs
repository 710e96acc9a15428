use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Result, SubmitGuardError};

use super::{NodeKind, NodeStatus, ReportNode};

/// Builds a suite/class/case tree from JUnit-style XML reports
/// (`testsuite`/`testcase` elements with optional `failure`/`error`/
/// `skipped` children).
pub struct JunitReportBuilder;

impl JunitReportBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse one or more report files into a single aggregated tree.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or is not a well-formed
    /// JUnit report. A malformed report never yields a partial tree.
    pub fn build_tree(&self, paths: &[std::path::PathBuf]) -> Result<ReportNode> {
        let mut suites = Vec::new();
        for path in paths {
            suites.extend(self.parse_file(path)?);
        }

        let mut root = ReportNode::internal("Test Results".to_string(), NodeKind::Suite, suites);
        root.aggregate();
        Ok(root)
    }

    fn parse_file(&self, path: &Path) -> Result<Vec<ReportNode>> {
        let content =
            std::fs::read_to_string(path).map_err(|source| SubmitGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let doc = roxmltree::Document::parse(&content).map_err(|e| {
            SubmitGuardError::ReportParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        let root = doc.root_element();
        let suite_elements: Vec<roxmltree::Node<'_, '_>> = match root.tag_name().name() {
            "testsuite" => vec![root],
            "testsuites" => root
                .children()
                .filter(|n| n.has_tag_name("testsuite"))
                .collect(),
            other => {
                return Err(SubmitGuardError::ReportParse {
                    path: path.to_path_buf(),
                    message: format!("expected <testsuite> or <testsuites> root, found <{other}>"),
                });
            }
        };

        suite_elements
            .into_iter()
            .map(|el| self.parse_suite(path, el))
            .collect()
    }

    fn parse_suite(&self, path: &Path, suite: roxmltree::Node<'_, '_>) -> Result<ReportNode> {
        let suite_name = suite.attribute("name").unwrap_or("(unnamed suite)");

        // Group flat testcase records on their package-qualified class name.
        let mut by_class: IndexMap<String, Vec<ReportNode>> = IndexMap::new();
        for case in suite.children().filter(|n| n.has_tag_name("testcase")) {
            let name = case
                .attribute("name")
                .ok_or_else(|| SubmitGuardError::ReportParse {
                    path: path.to_path_buf(),
                    message: "testcase element without a name attribute".to_string(),
                })?;
            let classname = case.attribute("classname").unwrap_or(suite_name);
            by_class
                .entry(classname.to_string())
                .or_default()
                .push(Self::parse_case(name, case));
        }

        let children = if by_class.len() == 1
            && by_class.keys().next().is_some_and(|k| k == suite_name)
        {
            // A single class matching the suite name collapses into it.
            by_class.into_iter().next().map_or_else(Vec::new, |(_, v)| v)
        } else {
            by_class
                .into_iter()
                .map(|(classname, cases)| {
                    ReportNode::internal(classname, NodeKind::Class, cases)
                })
                .collect()
        };

        Ok(ReportNode::internal(
            suite_name.to_string(),
            NodeKind::Suite,
            children,
        ))
    }

    fn parse_case(name: &str, case: roxmltree::Node<'_, '_>) -> ReportNode {
        let mut node = ReportNode::leaf(name.to_string(), NodeKind::Case, NodeStatus::Pass);

        for child in case.children().filter(roxmltree::Node::is_element) {
            match child.tag_name().name() {
                "failure" => {
                    node.status = NodeStatus::Fail;
                    node.message = child
                        .attribute("message")
                        .map(str::to_string)
                        .or_else(|| Some("test failed".to_string()));
                }
                "error" => {
                    node.status = NodeStatus::Fail;
                    node.message = Some(
                        child
                            .attribute("message")
                            .map_or_else(|| "test error".to_string(), |m| format!("error: {m}")),
                    );
                }
                "skipped" => {
                    node.status = NodeStatus::Skip;
                    node.message = child.attribute("message").map(str::to_string);
                }
                _ => {}
            }
        }

        node
    }
}

impl Default for JunitReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "junit_tests.rs"]
mod tests;
