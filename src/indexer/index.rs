// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory line index built from a directory walk

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::policy::WalkPolicy;
use super::reader::{BoundedLines, FsSource, LineError, LineSource, MAX_LINE_BYTES};
use super::walker::{drive, FsCursor, TreeCursor, TreeVisitor};
use crate::errors::IndexError;

/// One line of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedLine {
    pub path: PathBuf,
    /// 1-based.
    pub line_number: usize,
    pub content: String,
}

impl AsRef<str> for IndexedLine {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

/// Lines collected by one traversal, in traversal order, plus walk statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileIndex {
    lines: Vec<IndexedLine>,
    scanned_dirs: Vec<PathBuf>,
    skipped_dirs: Vec<PathBuf>,
    files_scanned: usize,
}

/// Aggregate counts for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub files_scanned: usize,
    pub lines_indexed: usize,
    pub dirs_scanned: usize,
    pub dirs_skipped: usize,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[IndexedLine] {
        &self.lines
    }

    pub fn scanned_dirs(&self) -> &[PathBuf] {
        &self.scanned_dirs
    }

    pub fn skipped_dirs(&self) -> &[PathBuf] {
        &self.skipped_dirs
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            files_scanned: self.files_scanned,
            lines_indexed: self.lines.len(),
            dirs_scanned: self.scanned_dirs.len(),
            dirs_skipped: self.skipped_dirs.len(),
        }
    }

    /// Append a line directly, bypassing the walker.
    pub fn push_line(&mut self, path: PathBuf, line_number: usize, content: String) {
        self.lines.push(IndexedLine {
            path,
            line_number,
            content,
        });
    }
}

/// Visitor that reads every accepted file into a [`FileIndex`].
struct Collector<'s, S: LineSource + ?Sized> {
    source: &'s S,
    index: FileIndex,
}

impl<S: LineSource + ?Sized> Collector<'_, S> {
    fn read_file(&mut self, path: &Path) -> Result<(), IndexError> {
        let reader = self.source.open(path).map_err(|source| IndexError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let start = self.index.lines.len();
        for (idx, line) in BoundedLines::new(reader).enumerate() {
            let line_number = idx + 1;
            let content = line.map_err(|err| match err {
                LineError::Io(source) => IndexError::Read {
                    path: path.to_path_buf(),
                    source,
                },
                LineError::TooLong => IndexError::LineTooLong {
                    path: path.to_path_buf(),
                    line: line_number,
                    limit: MAX_LINE_BYTES,
                },
            })?;
            self.index.push_line(path.to_path_buf(), line_number, content);
        }

        self.index.files_scanned += 1;
        debug!(
            path = %path.display(),
            lines = self.index.lines.len() - start,
            "indexed file"
        );
        Ok(())
    }
}

impl<S: LineSource + ?Sized> TreeVisitor for Collector<'_, S> {
    fn scanned_dir(&mut self, path: &Path) {
        self.index.scanned_dirs.push(path.to_path_buf());
    }

    fn skipped_dir(&mut self, path: &Path) {
        debug!(path = %path.display(), "skipping directory");
        self.index.skipped_dirs.push(path.to_path_buf());
    }

    fn file(&mut self, path: &Path) -> Result<(), IndexError> {
        self.read_file(path)
    }
}

/// Builds a [`FileIndex`] for one root under an explicit [`WalkPolicy`].
pub struct IndexBuilder {
    root: PathBuf,
    policy: WalkPolicy,
}

impl IndexBuilder {
    /// Builder with the default skip set and no file-name filter.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            policy: WalkPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WalkPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Walk the filesystem and read every accepted file.
    pub fn build(&self) -> Result<FileIndex, IndexError> {
        self.build_from(&mut FsCursor::new(&self.root), &FsSource)
    }

    /// Build from any tree and content source.
    pub fn build_from<C, S>(&self, cursor: &mut C, source: &S) -> Result<FileIndex, IndexError>
    where
        C: TreeCursor + ?Sized,
        S: LineSource + ?Sized,
    {
        let mut collector = Collector {
            source,
            index: FileIndex::new(),
        };
        drive(cursor, &self.policy, &mut collector)?;

        let index = collector.index;
        let stats = index.stats();
        info!(
            root = %self.root.display(),
            files = stats.files_scanned,
            lines = stats.lines_indexed,
            dirs_scanned = stats.dirs_scanned,
            dirs_skipped = stats.dirs_skipped,
            "index built"
        );
        Ok(index)
    }
}

/// Index every file under `root` whose base name matches one of `patterns`
/// (all files when `patterns` is empty), skipping hidden and conventional
/// build/dependency directories.
pub fn index_directory<S: AsRef<str>>(
    root: impl AsRef<Path>,
    patterns: &[S],
) -> Result<FileIndex, IndexError> {
    IndexBuilder::new(root)
        .with_policy(WalkPolicy::new(patterns)?)
        .build()
}
