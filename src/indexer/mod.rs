// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexer module - walks a directory tree and reads matching files into lines

pub mod index;
pub mod policy;
pub mod reader;
pub mod walker;

pub use index::{index_directory, FileIndex, IndexBuilder, IndexStats, IndexedLine};
pub use policy::{WalkPolicy, DEFAULT_SKIP_DIRS};
