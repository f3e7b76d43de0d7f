// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for wcag-engine

use crate::error::Result;
use crate::issue::WcagLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Checker configuration, read from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Target conformance level ("A", "AA" or "AAA")
    #[serde(default)]
    pub level: WcagLevel,

    /// Directory names skipped when scanning a tree
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            level: WcagLevel::default(),
            exclude: default_exclude(),
        }
    }
}

fn default_exclude() -> Vec<String> {
    [
        "node_modules", ".git", "target", "dist", "build",
        "_build", "vendor", ".next", ".nuxt", "coverage",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl CheckerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a path; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        debug!(?config, "Loaded configuration");
        Ok(config)
    }
}

/// Config file looked up in the working directory when none is given
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".wcag-check.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.level, WcagLevel::AA);
        assert!(config.exclude.contains(&"node_modules".to_string()));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(CheckerConfig::from_toml_str("").unwrap(), CheckerConfig::default());
    }

    #[test]
    fn test_parse_level_and_exclude() {
        let config = CheckerConfig::from_toml_str("level = \"AAA\"\nexclude = [\"legacy\"]\n").unwrap();
        assert_eq!(config.level, WcagLevel::AAA);
        assert_eq!(config.exclude, vec!["legacy".to_string()]);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = CheckerConfig::from_toml_str("level = \"B\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wcag.toml");
        std::fs::write(&path, "level = \"A\"\n").unwrap();
        assert_eq!(CheckerConfig::load(&path).unwrap().level, WcagLevel::A);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CheckerConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CheckerConfig::default());
    }
}
