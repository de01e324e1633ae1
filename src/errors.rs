// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Indexing failures are typed so callers can tell which path broke the walk.
//! Matching never fails; "no results" is reported through a suggestion message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a [`crate::indexer::FileIndex`].
///
/// Every variant aborts the whole traversal; no partial index is returned.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("error walking {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error scanning file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "error scanning file {}: line {line} is longer than {limit} bytes",
        path.display()
    )]
    LineTooLong {
        path: PathBuf,
        line: usize,
        limit: usize,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl IndexError {
    /// Path the failure is attached to, if it concerns a file or directory.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Walk { path, .. }
            | Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::LineTooLong { path, .. } => Some(path.as_path()),
            Self::Pattern { .. } => None,
        }
    }
}

/// Helper functions for creating helpful error messages
pub mod suggestions {
    /// Get suggestion for no results
    pub fn no_results_suggestion(query: &str) -> String {
        format!(
            "No results found for '{}'\n\n\
             Try:\n\
             - Fewer or shorter words (partial words match completions)\n\
             - A broader glob, e.g. --glob '*'\n\
             - Checking that the files live outside hidden or skipped directories",
            query
        )
    }

    /// Get suggestion for a query with no searchable words
    pub fn empty_query_suggestion(query: &str) -> String {
        format!(
            "Query '{}' has no letters or digits to search for\n\n\
             Example: wuzzer search \"red apple\"",
            query
        )
    }
}
