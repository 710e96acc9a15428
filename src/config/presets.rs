use crate::error::{Result, SubmitGuardError};

use super::RulesConfig;

/// Available built-in profile names.
pub const AVAILABLE_PROFILES: &[&str] = &["cs2114", "minimal"];

/// Load a built-in profile by name.
///
/// # Errors
/// Returns an error if the profile name is unknown.
pub fn load_profile(name: &str) -> Result<RulesConfig> {
    let content = match name {
        "cs2114" => PROFILE_CS2114,
        "minimal" => PROFILE_MINIMAL,
        _ => {
            return Err(SubmitGuardError::Config(format!(
                "Unknown profile: '{}'. Available profiles: {}",
                name,
                AVAILABLE_PROFILES.join(", ")
            )));
        }
    };

    serde_json::from_str(content)
        .map_err(|e| SubmitGuardError::Config(format!("Failed to parse profile '{name}': {e}")))
}

/// The default strict profile used by introductory courses: every style and
/// testing rule on, full coverage required.
pub const PROFILE_CS2114: &str = r#"{
  "style": {
    "indentation": { "spaces_per_indent": 4, "tab_width": 4 },
    "no_tabs": true,
    "max_line_length": 80,
    "one_public_class_per_file": true,
    "disallow_global_variables": true,
    "no_empty_methods": true,
    "no_unused_methods": true,
    "javadoc_required": true,
    "javadoc_require_author": true,
    "javadoc_require_version": true,
    "javadoc_require_params": true,
    "javadoc_require_return": true,
    "require_override": true
  },
  "testing": {
    "annotation_required": true,
    "test_methods_prefix": "test",
    "require_assert_equals_delta": true,
    "require_full_method_coverage": true,
    "require_full_branch_coverage": true,
    "coverage_threshold": 100.0
  }
}"#;

/// A relaxed profile: whitespace hygiene only, no Javadoc or testing rules.
pub const PROFILE_MINIMAL: &str = r#"{
  "style": {
    "indentation": { "spaces_per_indent": 4, "tab_width": 4 },
    "no_tabs": true,
    "max_line_length": -1,
    "one_public_class_per_file": true,
    "disallow_global_variables": false,
    "no_empty_methods": false,
    "no_unused_methods": false,
    "javadoc_required": false,
    "javadoc_require_author": false,
    "javadoc_require_version": false,
    "javadoc_require_params": false,
    "javadoc_require_return": false,
    "require_override": false
  },
  "testing": {
    "annotation_required": false,
    "test_methods_prefix": "test",
    "require_assert_equals_delta": false,
    "require_full_method_coverage": false,
    "require_full_branch_coverage": false,
    "coverage_threshold": 100.0
  }
}"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
