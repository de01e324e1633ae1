// SPDX-License-Identifier: MIT OR Apache-2.0

//! wuzzer - in-memory fuzzy line search library
//!
//! Walks a directory tree into a flat list of lines, then ranks those lines
//! against a short query by word coverage, word order and line length.
//!
//! ```no_run
//! use wuzzer::indexer::index_directory;
//! use wuzzer::matcher::fuzzy_match_indexed;
//!
//! let index = index_directory(".", &["*.rs", "*.md"])?;
//! for m in fuzzy_match_indexed("red apple", &index).iter().take(10) {
//!     println!("{:.2} {}:{}", m.score, m.candidate.path.display(), m.candidate.line_number);
//! }
//! # Ok::<(), wuzzer::errors::IndexError>(())
//! ```

pub mod config;
pub mod errors;
pub mod highlight;
pub mod indexer;
pub mod matcher;
pub mod output;
