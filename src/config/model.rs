use serde::{Deserialize, Serialize};

/// Sentinel value disabling the line length rule entirely.
/// Use `-1` in a profile to indicate no limit should be applied.
pub const UNLIMITED: i64 = -1;

/// Fully-resolved rule profile: a flat `style`/`testing` mapping.
///
/// Loaded once per run (named profile merged with CLI overrides) and treated
/// as read-only input by the evaluator. Every rule key has a documented
/// default, so a profile may omit any subset of keys without silently
/// disabling a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RulesConfig {
    /// Coding/styling rules.
    #[serde(default)]
    pub style: StyleConfig,

    /// Correctness/testing rules.
    #[serde(default)]
    pub testing: TestingConfig,
}

/// Indentation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndentationConfig {
    /// Required indentation step in spaces.
    #[serde(default = "default_spaces_per_indent")]
    pub spaces_per_indent: usize,

    /// Tab expansion width used when measuring visible line length.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

impl Default for IndentationConfig {
    fn default() -> Self {
        Self {
            spaces_per_indent: default_spaces_per_indent(),
            tab_width: default_tab_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct StyleConfig {
    #[serde(default)]
    pub indentation: IndentationConfig,

    /// Disallow tab characters in leading whitespace.
    #[serde(default = "default_true")]
    pub no_tabs: bool,

    /// Maximum visible line length. `-1` disables the rule entirely.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: i64,

    /// At most one public top-level type per file.
    #[serde(default = "default_true")]
    pub one_public_class_per_file: bool,

    /// Disallow static fields (static final constants are exempt).
    #[serde(default = "default_true")]
    pub disallow_global_variables: bool,

    /// Disallow methods whose body contains no statement.
    #[serde(default = "default_true")]
    pub no_empty_methods: bool,

    /// Disallow private methods that are never called.
    #[serde(default = "default_true")]
    pub no_unused_methods: bool,

    /// Require Javadoc on public classes and public/protected methods.
    #[serde(default = "default_true")]
    pub javadoc_required: bool,

    /// Require an `@author` tag on class Javadoc.
    #[serde(default = "default_true")]
    pub javadoc_require_author: bool,

    /// Require a `@version` tag on class Javadoc.
    #[serde(default = "default_true")]
    pub javadoc_require_version: bool,

    /// Require one `@param` tag per declared parameter on method Javadoc.
    #[serde(default = "default_true")]
    pub javadoc_require_params: bool,

    /// Require a `@return` tag on non-void method Javadoc.
    #[serde(default = "default_true")]
    pub javadoc_require_return: bool,

    /// Require `@Override` on methods redeclaring an ancestor signature.
    /// Ancestors are resolved only within the scanned file set.
    #[serde(default = "default_true")]
    pub require_override: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            indentation: IndentationConfig::default(),
            no_tabs: true,
            max_line_length: default_max_line_length(),
            one_public_class_per_file: true,
            disallow_global_variables: true,
            no_empty_methods: true,
            no_unused_methods: true,
            javadoc_required: true,
            javadoc_require_author: true,
            javadoc_require_version: true,
            javadoc_require_params: true,
            javadoc_require_return: true,
            require_override: true,
        }
    }
}

impl StyleConfig {
    /// Whether the line length rule is active. A value of exactly `-1`
    /// disables the rule, not merely sets an unreachable threshold.
    #[must_use]
    pub const fn line_length_limit(&self) -> Option<usize> {
        if self.max_line_length > 0 {
            Some(self.max_line_length as usize)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestingConfig {
    /// Require `@Test` on test-prefixed public methods in test classes.
    #[serde(default = "default_true")]
    pub annotation_required: bool,

    /// Required prefix for public void test methods in test classes.
    #[serde(default = "default_test_prefix")]
    pub test_methods_prefix: String,

    /// Flag two-argument `assertEquals` calls on floating-point values
    /// (a third delta argument is required).
    #[serde(default = "default_true")]
    pub require_assert_equals_delta: bool,

    /// Fail the report check unless method coverage is complete.
    #[serde(default = "default_true")]
    pub require_full_method_coverage: bool,

    /// Fail the report check unless branch coverage is complete.
    #[serde(default = "default_true")]
    pub require_full_branch_coverage: bool,

    /// Coverage percentage below which a node appears in the gap tree.
    #[serde(default = "default_coverage_threshold")]
    pub coverage_threshold: f64,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            annotation_required: true,
            test_methods_prefix: default_test_prefix(),
            require_assert_equals_delta: true,
            require_full_method_coverage: true,
            require_full_branch_coverage: true,
            coverage_threshold: default_coverage_threshold(),
        }
    }
}

const fn default_spaces_per_indent() -> usize {
    4
}

const fn default_tab_width() -> usize {
    4
}

const fn default_max_line_length() -> i64 {
    80
}

fn default_test_prefix() -> String {
    "test".to_string()
}

const fn default_true() -> bool {
    true
}

const fn default_coverage_threshold() -> f64 {
    100.0
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
