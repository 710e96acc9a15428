mod coverage;
mod junit;

pub use coverage::{CounterKind, CoverageReportBuilder, CoverageTotals, read_totals};
pub use junit::JunitReportBuilder;

use serde::Serialize;

/// Kind of a report tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Suite,
    Case,
    Package,
    Class,
    Method,
}

/// Aggregated outcome of a report tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Pass,
    Fail,
    Skip,
    Partial,
}

/// A covered/total counter pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub covered: u64,
    pub total: u64,
}

impl Coverage {
    #[must_use]
    pub const fn new(covered: u64, total: u64) -> Self {
        Self { covered, total }
    }

    /// Coverage percentage; an empty counter (0/0) is vacuously complete.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.covered as f64 / self.total as f64) * 100.0
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.covered == self.total
    }

    pub const fn add(&mut self, other: Self) {
        self.covered += other.covered;
        self.total += other.total;
    }
}

/// One node of a rendered report tree (test results or coverage).
///
/// A leaf has no children. An internal node's status and coverage are
/// aggregates of its direct children, never double-counted.
#[derive(Debug, Clone, Serialize)]
pub struct ReportNode {
    pub name: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    #[must_use]
    pub const fn leaf(name: String, kind: NodeKind, status: NodeStatus) -> Self {
        Self {
            name,
            kind,
            status,
            message: None,
            coverage: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn internal(name: String, kind: NodeKind, children: Vec<Self>) -> Self {
        Self {
            name,
            kind,
            status: NodeStatus::Pass,
            message: None,
            coverage: None,
            children,
        }
    }

    /// Recompute status and coverage bottom-up.
    ///
    /// Status: fail if any descendant fails, else partial if coverage is
    /// incomplete anywhere below, else skip if any descendant was skipped,
    /// else pass. Coverage: sum of the direct children's pairs.
    pub fn aggregate(&mut self) {
        for child in &mut self.children {
            child.aggregate();
        }

        if self.children.is_empty() {
            if let Some(cov) = self.coverage {
                self.status = if cov.is_complete() {
                    NodeStatus::Pass
                } else {
                    NodeStatus::Partial
                };
            }
            return;
        }

        if self.children.iter().any(|c| c.coverage.is_some()) {
            let mut sum = Coverage::default();
            for child in &self.children {
                if let Some(cov) = child.coverage {
                    sum.add(cov);
                }
            }
            self.coverage = Some(sum);
        }

        self.status = if self.children.iter().any(|c| c.status == NodeStatus::Fail) {
            NodeStatus::Fail
        } else if self.children.iter().any(|c| c.status == NodeStatus::Partial) {
            NodeStatus::Partial
        } else if self.children.iter().any(|c| c.status == NodeStatus::Skip) {
            NodeStatus::Skip
        } else {
            NodeStatus::Pass
        };
    }

    /// Whether any descendant (or this node) failed.
    #[must_use]
    pub fn has_failure(&self) -> bool {
        self.status == NodeStatus::Fail
            || self.children.iter().any(Self::has_failure)
    }

    /// The filtered coverage gap tree: only nodes whose coverage is below
    /// `threshold` percent survive, so gap output stays proportional to the
    /// actual deficiency. Fully-covered subtrees are pruned.
    #[must_use]
    pub fn gap_tree(&self, threshold: f64) -> Option<Self> {
        let cov = self.coverage?;
        if cov.percent() >= threshold {
            return None;
        }
        Some(Self {
            name: self.name.clone(),
            kind: self.kind,
            status: self.status,
            message: self.message.clone(),
            coverage: Some(cov),
            children: self
                .children
                .iter()
                .filter_map(|c| c.gap_tree(threshold))
                .collect(),
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
