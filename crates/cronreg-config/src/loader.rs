//! Reading `RegistryConfig` from TOML.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::{Captures, Regex};

use crate::error::ConfigError;
use crate::schema::RegistryConfig;

/// Loads registry configuration, substituting `${VAR}` references from the
/// environment before parsing.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file. A leading `~` in `path` is
    /// expanded to the home directory.
    pub fn load(path: impl AsRef<Path>) -> Result<RegistryConfig, ConfigError> {
        let path = Self::resolve_path(path.as_ref());
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
            _ => ConfigError::Io(e),
        })?;
        Self::load_str(&content)
    }

    /// Load configuration from TOML text.
    pub fn load_str(content: &str) -> Result<RegistryConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        Ok(toml::from_str(&expanded)?)
    }

    /// Expand a leading `~` to the home directory. Paths that are not valid
    /// UTF-8 are returned unchanged.
    pub fn resolve_path(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
            None => path.to_path_buf(),
        }
    }

    /// Substitute every `${VAR}`. Fails on the first unset variable.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let pattern = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::InvalidValue {
            field: "env pattern".to_string(),
            message: e.to_string(),
        })?;

        let mut missing: Option<String> = None;
        let expanded = pattern.replace_all(content, |caps: &Captures<'_>| {
            std::env::var(&caps[1]).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| caps[1].to_string());
                String::new()
            })
        });

        match missing {
            Some(name) => Err(ConfigError::EnvVarNotSet(name)),
            None => Ok(expanded.into_owned()),
        }
    }
}
