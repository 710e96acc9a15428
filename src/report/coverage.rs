use std::path::Path;

use crate::error::{Result, SubmitGuardError};

use super::{Coverage, NodeKind, NodeStatus, ReportNode};

/// JaCoCo counter type selected for the coverage tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterKind {
    Method,
    Branch,
    #[default]
    Line,
}

impl CounterKind {
    #[must_use]
    pub const fn xml_name(self) -> &'static str {
        match self {
            Self::Method => "METHOD",
            Self::Branch => "BRANCH",
            Self::Line => "LINE",
        }
    }
}

/// Report-level coverage totals across the counter types the checks use.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct CoverageTotals {
    pub method: Coverage,
    pub branch: Coverage,
    pub line: Coverage,
}

/// Builds package/class/method coverage trees from JaCoCo-style XML
/// (`report`/`package`/`class`/`method` elements with `counter` children).
pub struct CoverageReportBuilder {
    counter: CounterKind,
}

impl CoverageReportBuilder {
    #[must_use]
    pub const fn new(counter: CounterKind) -> Self {
        Self { counter }
    }

    /// Parse a coverage report into an aggregated tree. Counts are taken
    /// from method leaves only; every inner node sums its direct children,
    /// so nothing is double-counted.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a well-formed
    /// coverage report.
    pub fn build_tree(&self, path: &Path) -> Result<ReportNode> {
        let content = read_report(path)?;
        let doc = parse_document(path, &content)?;
        let root = expect_report_root(path, &doc)?;

        let packages = root
            .children()
            .filter(|n| n.has_tag_name("package"))
            .map(|pkg| self.parse_package(pkg))
            .collect();

        let mut tree = ReportNode::internal(
            root.attribute("name").unwrap_or("Coverage").to_string(),
            NodeKind::Suite,
            packages,
        );
        tree.aggregate();
        Ok(tree)
    }

    fn parse_package(&self, pkg: roxmltree::Node<'_, '_>) -> ReportNode {
        let name = pkg
            .attribute("name")
            .unwrap_or("(default)")
            .replace('/', ".");

        let classes = pkg
            .children()
            .filter(|n| n.has_tag_name("class"))
            .map(|class| self.parse_class(class))
            .collect();

        ReportNode::internal(name, NodeKind::Package, classes)
    }

    fn parse_class(&self, class: roxmltree::Node<'_, '_>) -> ReportNode {
        let qualified = class.attribute("name").unwrap_or("(unnamed)");
        let simple = qualified.rsplit('/').next().unwrap_or(qualified);

        let methods = class
            .children()
            .filter(|n| n.has_tag_name("method"))
            .map(|method| self.parse_method(method))
            .collect();

        ReportNode::internal(simple.to_string(), NodeKind::Class, methods)
    }

    fn parse_method(&self, method: roxmltree::Node<'_, '_>) -> ReportNode {
        let name = method.attribute("name").unwrap_or("(unnamed)");
        let mut node =
            ReportNode::leaf(format!("{name}()"), NodeKind::Method, NodeStatus::Pass);
        node.coverage = Some(
            counter_of(method, self.counter.xml_name()).unwrap_or_default(),
        );
        node
    }
}

/// Read the report-level METHOD/BRANCH/LINE totals.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_totals(path: &Path) -> Result<CoverageTotals> {
    let content = read_report(path)?;
    let doc = parse_document(path, &content)?;
    let root = expect_report_root(path, &doc)?;

    Ok(CoverageTotals {
        method: counter_of(root, "METHOD").unwrap_or_default(),
        branch: counter_of(root, "BRANCH").unwrap_or_default(),
        line: counter_of(root, "LINE").unwrap_or_default(),
    })
}

fn read_report(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SubmitGuardError::ReportMissing {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| SubmitGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_document<'a>(path: &Path, content: &'a str) -> Result<roxmltree::Document<'a>> {
    roxmltree::Document::parse(content).map_err(|e| SubmitGuardError::ReportParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn expect_report_root<'a, 'input>(
    path: &Path,
    doc: &'a roxmltree::Document<'input>,
) -> Result<roxmltree::Node<'a, 'input>> {
    let root = doc.root_element();
    if root.tag_name().name() == "report" {
        Ok(root)
    } else {
        Err(SubmitGuardError::ReportParse {
            path: path.to_path_buf(),
            message: format!(
                "expected <report> root, found <{}>",
                root.tag_name().name()
            ),
        })
    }
}

/// The direct `counter` child of the given type, as a covered/total pair.
fn counter_of(node: roxmltree::Node<'_, '_>, counter_type: &str) -> Option<Coverage> {
    node.children()
        .filter(|n| n.has_tag_name("counter"))
        .find(|n| n.attribute("type") == Some(counter_type))
        .map(|counter| {
            let covered = attr_u64(counter, "covered");
            let missed = attr_u64(counter, "missed");
            Coverage::new(covered, covered + missed)
        })
}

fn attr_u64(node: roxmltree::Node<'_, '_>, name: &str) -> u64 {
    node.attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
