use super::*;

fn has_error(report: &ValidationReport, path: &str) -> bool {
    report.errors().any(|issue| issue.path == path)
}

fn has_warning(report: &ValidationReport, path: &str) -> bool {
    report.warnings().any(|issue| issue.path == path)
}

#[test]
fn test_validate_default_config() {
    let report = ConfigValidator::validate(&RegistryConfig::default());
    assert!(report.is_valid());
    assert_eq!(report.warnings().count(), 0);
    assert!(report.into_result().unwrap().is_empty());
}

#[test]
fn test_validate_empty_job_prefix() {
    let mut config = RegistryConfig::default();
    config.naming.job_prefix = String::new();

    let report = ConfigValidator::validate(&config);
    assert!(!report.is_valid());
    assert!(has_error(&report, "naming.job_prefix"));
}

#[test]
fn test_validate_whitespace_group_prefix() {
    let mut config = RegistryConfig::default();
    config.naming.group_prefix = "job group".to_string();

    let report = ConfigValidator::validate(&config);
    assert!(!report.is_valid());
    assert!(has_error(&report, "naming.group_prefix"));
}

#[test]
fn test_validate_custom_prefix_warning() {
    let mut config = RegistryConfig::default();
    config.naming.job_prefix = "sched".to_string();

    let report = ConfigValidator::validate(&config);
    assert!(report.is_valid());
    assert!(has_warning(&report, "naming.job_prefix"));
}

#[test]
fn test_validate_identical_prefixes_warning() {
    let mut config = RegistryConfig::default();
    config.naming.job_prefix = "x".to_string();
    config.naming.group_prefix = "x".to_string();

    let report = ConfigValidator::validate(&config);
    assert!(report.is_valid());
    assert!(has_warning(&report, "naming"));
}

#[test]
fn test_validate_exact_group_match_warning() {
    let mut config = RegistryConfig::default();
    config.deletion.group_match = GroupMatchMode::Exact;

    let report = ConfigValidator::validate(&config);
    assert!(report.is_valid());
    assert!(has_warning(&report, "deletion.group_match"));
}

#[test]
fn test_into_result_returns_first_error() {
    let mut config = RegistryConfig::default();
    config.naming.job_prefix = String::new();
    config.naming.group_prefix = "a b".to_string();

    match ConfigValidator::validate(&config).into_result() {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "naming.job_prefix"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_into_result_keeps_warnings() {
    let mut config = RegistryConfig::default();
    config.deletion.group_match = GroupMatchMode::Exact;

    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert!(warnings[0].to_string().starts_with("deletion.group_match: "));
}
