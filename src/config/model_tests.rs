use super::*;

#[test]
fn default_config_enables_every_rule() {
    let config = RulesConfig::default();
    assert!(config.style.no_tabs);
    assert!(config.style.one_public_class_per_file);
    assert!(config.style.disallow_global_variables);
    assert!(config.style.no_empty_methods);
    assert!(config.style.no_unused_methods);
    assert!(config.style.javadoc_required);
    assert!(config.style.javadoc_require_author);
    assert!(config.style.javadoc_require_version);
    assert!(config.style.javadoc_require_params);
    assert!(config.style.javadoc_require_return);
    assert!(config.style.require_override);
    assert!(config.testing.annotation_required);
    assert!(config.testing.require_assert_equals_delta);
    assert!(config.testing.require_full_method_coverage);
    assert!(config.testing.require_full_branch_coverage);
}

#[test]
fn default_parameters() {
    let config = RulesConfig::default();
    assert_eq!(config.style.indentation.spaces_per_indent, 4);
    assert_eq!(config.style.indentation.tab_width, 4);
    assert_eq!(config.style.max_line_length, 80);
    assert_eq!(config.testing.test_methods_prefix, "test");
    assert!((config.testing.coverage_threshold - 100.0).abs() < f64::EPSILON);
}

#[test]
fn line_length_limit_disabled_by_sentinel() {
    let disabled = StyleConfig {
        max_line_length: UNLIMITED,
        ..StyleConfig::default()
    };
    assert_eq!(disabled.line_length_limit(), None);

    let bounded = StyleConfig {
        max_line_length: 80,
        ..StyleConfig::default()
    };
    assert_eq!(bounded.line_length_limit(), Some(80));
}

#[test]
fn missing_keys_fall_back_to_documented_defaults() {
    // A profile that only overrides one key must not silently disable the
    // rest.
    let config: RulesConfig =
        serde_json::from_str(r#"{"style": {"max_line_length": 120}}"#).unwrap();
    assert_eq!(config.style.max_line_length, 120);
    assert!(config.style.javadoc_required);
    assert!(config.testing.annotation_required);
}

#[test]
fn empty_profile_is_the_default() {
    let config: RulesConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RulesConfig::default());
}
