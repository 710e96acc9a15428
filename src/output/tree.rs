use std::fmt::Write;

use crate::report::{CoverageTotals, NodeStatus, ReportNode};

use super::text::ColorMode;

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders report trees as indented text with per-node status icons.
pub struct TreeFormatter {
    use_colors: bool,
}

impl TreeFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var("NO_COLOR").is_err()
                    && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        };
        Self { use_colors }
    }

    #[must_use]
    pub fn format_tree(&self, node: &ReportNode) -> String {
        let mut output = String::new();
        self.format_node(node, 0, &mut output);
        output
    }

    fn format_node(&self, node: &ReportNode, depth: usize, output: &mut String) {
        let indent = "  ".repeat(depth);
        let icon = self.status_icon(node.status);

        write!(output, "{indent}{icon} {}", node.name).ok();
        if let Some(cov) = node.coverage {
            write!(
                output,
                " — {:.1}% ({}/{})",
                cov.percent(),
                cov.covered,
                cov.total
            )
            .ok();
        }
        if let Some(message) = &node.message {
            write!(output, " — {message}").ok();
        }
        writeln!(output).ok();

        for child in &node.children {
            self.format_node(child, depth + 1, output);
        }
    }

    fn status_icon(&self, status: NodeStatus) -> String {
        let (icon, color) = match status {
            NodeStatus::Pass => ("✓", ansi::GREEN),
            NodeStatus::Fail => ("✗", ansi::RED),
            NodeStatus::Skip => ("-", ansi::CYAN),
            NodeStatus::Partial => ("◐", ansi::YELLOW),
        };
        if self.use_colors {
            format!("{color}{icon}{}", ansi::RESET)
        } else {
            icon.to_string()
        }
    }

    /// One-line-per-counter coverage summary from the report totals.
    #[must_use]
    pub fn format_coverage_summary(&self, totals: &CoverageTotals) -> String {
        let mut output = String::new();
        for (label, cov) in [
            ("Method", totals.method),
            ("Branch", totals.branch),
            ("Line", totals.line),
        ] {
            let line = format!(
                "{label} coverage: {:.1}% ({}/{})",
                cov.percent(),
                cov.covered,
                cov.total
            );
            let colored = if !self.use_colors {
                line
            } else if cov.is_complete() {
                format!("{}{line}{}", ansi::GREEN, ansi::RESET)
            } else {
                format!("{}{line}{}", ansi::YELLOW, ansi::RESET)
            };
            writeln!(output, "{colored}").ok();
        }
        output
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
