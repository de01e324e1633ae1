// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for wuzzer
//!
//! Loads configuration from .wuzzrc.toml in current directory or ~/.config/wuzzer/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::errors::IndexError;
use crate::indexer::WalkPolicy;

/// File-name globs used when neither the CLI nor a config file names any.
pub const DEFAULT_PATTERNS: &[&str] = &["*.go", "*.txt", "*.md"];

/// Results shown when nothing else sets a limit.
pub const DEFAULT_MAX_RESULTS: usize = 10;

const LOCAL_CONFIG_FILE: &str = ".wuzzrc.toml";

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from .wuzzrc.toml or ~/.config/wuzzer/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of results to show
    pub max_results: Option<usize>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
    /// File-name globs to index
    pub patterns: Vec<String>,
    /// Directory names to prune; replaces the built-in set when present
    pub skip_dirs: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .wuzzrc.toml in current directory
    /// 2. ~/.config/wuzzer/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(LOCAL_CONFIG_FILE)) {
            return config;
        }

        if let Some(path) = Self::user_config_path() {
            if let Some(config) = Self::load_from_path(&path) {
                return config;
            }
        }

        Self::default()
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("wuzzer").join("config.toml"))
    }

    /// Parse a config file, warning and returning `None` if it is malformed.
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config");
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(ConfigOutputFormat::Json),
                "text" => Some(ConfigOutputFormat::Text),
                _ => None,
            })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value
            .or(self.max_results)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// CLI globs win, then config globs, then [`DEFAULT_PATTERNS`].
    pub fn merge_patterns(&self, cli_patterns: &[String]) -> Vec<String> {
        if !cli_patterns.is_empty() {
            return cli_patterns.to_vec();
        }
        if !self.patterns.is_empty() {
            return self.patterns.clone();
        }
        DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
    }

    /// Walk policy from merged patterns and the configured skip set.
    pub fn walk_policy(&self, cli_patterns: &[String]) -> Result<WalkPolicy, IndexError> {
        let mut policy = WalkPolicy::new(&self.merge_patterns(cli_patterns))?;
        if let Some(skip_dirs) = &self.skip_dirs {
            policy = policy.with_skip_dirs(skip_dirs);
        }
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_all_fields() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
max_results = 3
default_format = "JSON"
patterns = ["*.rs"]
skip_dirs = ["target"]
"#,
        )
        .expect("write");

        let config = Config::load_from_path(&path).expect("config");
        assert_eq!(config.merge_max_results(None), 3);
        assert_eq!(config.merge_max_results(Some(7)), 7);
        assert_eq!(config.output_format(), Some(ConfigOutputFormat::Json));

        let policy = config.walk_policy(&[]).expect("policy");
        assert!(policy.includes_file("main.rs"));
        assert!(!policy.includes_file("main.go"));
        assert!(policy.should_skip_dir("target"));
        assert!(!policy.should_skip_dir("vendor"));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_results = \"many\"").expect("write");
        assert!(Config::load_from_path(&path).is_none());
    }

    #[test]
    fn defaults_apply_without_config() {
        let config = Config::default();
        assert_eq!(config.merge_max_results(None), DEFAULT_MAX_RESULTS);
        assert_eq!(config.merge_patterns(&[]), vec!["*.go", "*.txt", "*.md"]);
        assert_eq!(
            config.merge_patterns(&["*.rs".to_string()]),
            vec!["*.rs".to_string()]
        );
        assert!(config.output_format().is_none());

        let policy = config.walk_policy(&[]).expect("policy");
        assert!(policy.should_skip_dir("node_modules"));
    }
}
