// SPDX-License-Identifier: MIT OR Apache-2.0

//! Skip and include decisions for a directory walk

use glob::Pattern;
use std::collections::BTreeSet;

use crate::errors::IndexError;

/// Conventional build and dependency directories that are never indexed.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["go", "pkg", "node_modules", "vendor", "build", "dist"];

/// Explicit configuration for a walk: which directories to prune and which
/// files to read.
#[derive(Debug, Clone)]
pub struct WalkPolicy {
    skip_dirs: BTreeSet<String>,
    patterns: Vec<Pattern>,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            patterns: Vec::new(),
        }
    }
}

impl WalkPolicy {
    /// Policy with the default skip set and the given file-name globs.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, IndexError> {
        Self::default().with_patterns(patterns)
    }

    /// Replace the file-name globs. An empty list accepts every file.
    pub fn with_patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, IndexError> {
        self.patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|source| IndexError::Pattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Replace the set of directory names to prune.
    pub fn with_skip_dirs<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.skip_dirs = names.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    /// Hidden directories and names in the skip set are pruned.
    pub fn should_skip_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.contains(name)
    }

    /// A file is read when no globs are set or its base name matches one.
    pub fn includes_file(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name))
    }
}
