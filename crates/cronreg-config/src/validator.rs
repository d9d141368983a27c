//! Checks on a loaded `RegistryConfig`.
//!
//! Errors make a configuration unusable. Warnings flag settings that work
//! but change which persisted jobs the registry can reach.

use std::fmt;

use crate::error::ConfigError;
use crate::schema::{DEFAULT_GROUP_PREFIX, DEFAULT_JOB_PREFIX, GroupMatchMode, RegistryConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, addressed by its dotted config path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub path: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every finding for one configuration, in check order.
#[derive(Debug, Default)]
pub struct ValidationReport {
    issues: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.by_severity(Severity::Warning)
    }

    /// The warnings, or the first error as [`ConfigError::InvalidValue`].
    pub fn into_result(self) -> Result<Vec<ConfigIssue>, ConfigError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .issues
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);

        match errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path.to_string(),
                message: error.message,
            }),
            None => Ok(warnings),
        }
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }

    fn error(&mut self, path: &'static str, message: impl Into<String>) {
        self.push(Severity::Error, path, message);
    }

    fn warn(&mut self, path: &'static str, message: impl Into<String>) {
        self.push(Severity::Warning, path, message);
    }

    fn push(&mut self, severity: Severity, path: &'static str, message: impl Into<String>) {
        self.issues.push(ConfigIssue {
            severity,
            path,
            message: message.into(),
        });
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &RegistryConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        Self::check_prefixes(config, &mut report);
        Self::check_group_match(config, &mut report);
        report
    }

    fn check_prefixes(config: &RegistryConfig, report: &mut ValidationReport) {
        let naming = &config.naming;
        let prefixes = [
            ("naming.job_prefix", &naming.job_prefix, DEFAULT_JOB_PREFIX),
            ("naming.group_prefix", &naming.group_prefix, DEFAULT_GROUP_PREFIX),
        ];

        for (path, prefix, default) in prefixes {
            if prefix.is_empty() {
                report.error(path, "Prefix cannot be empty");
                continue;
            }
            if prefix.chars().any(char::is_whitespace) {
                report.error(path, format!("Prefix '{prefix}' must not contain whitespace"));
            }
            if prefix != default {
                report.warn(
                    path,
                    format!(
                        "Prefix '{prefix}' differs from '{default}'; jobs registered under the old names will no longer be found"
                    ),
                );
            }
        }

        if !naming.job_prefix.is_empty() && naming.job_prefix == naming.group_prefix {
            report.warn("naming", "Job and group prefixes are identical");
        }
    }

    fn check_group_match(config: &RegistryConfig, report: &mut ValidationReport) {
        if config.deletion.group_match == GroupMatchMode::Exact {
            report.warn(
                "deletion.group_match",
                "Exact group matching no longer removes jobs from groups that merely share the suffix",
            );
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
