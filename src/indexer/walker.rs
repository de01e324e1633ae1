// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pre-order directory traversal driven by a [`WalkPolicy`]
//!
//! The walk is split into three parts: a [`TreeCursor`] that yields entries
//! and can prune the directory it just yielded, pure policy decisions, and a
//! [`TreeVisitor`] that receives the outcome. `walkdir` backs the cursor on a
//! real filesystem; tests can plug in an in-memory tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::policy::WalkPolicy;
use crate::errors::IndexError;

/// One entry produced by a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    /// 0 for the traversal root.
    pub depth: usize,
}

impl TreeEntry {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A pre-order stream of tree entries.
pub trait TreeCursor {
    fn next_entry(&mut self) -> Option<Result<TreeEntry, IndexError>>;

    /// Do not descend into the directory most recently yielded.
    fn prune(&mut self);
}

/// Receives walk decisions in traversal order.
pub trait TreeVisitor {
    fn scanned_dir(&mut self, path: &Path);
    fn skipped_dir(&mut self, path: &Path);
    fn file(&mut self, path: &Path) -> Result<(), IndexError>;
}

/// Filesystem cursor over `walkdir`, siblings in file-name order.
pub struct FsCursor {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl FsCursor {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self { root, inner }
    }
}

impl TreeCursor for FsCursor {
    fn next_entry(&mut self) -> Option<Result<TreeEntry, IndexError>> {
        let entry = self.inner.next()?;
        Some(match entry {
            Ok(entry) => Ok(TreeEntry {
                is_dir: entry.file_type().is_dir(),
                depth: entry.depth(),
                path: entry.into_path(),
            }),
            Err(source) => Err(IndexError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone()),
                source,
            }),
        })
    }

    fn prune(&mut self) {
        self.inner.skip_current_dir();
    }
}

/// Run a cursor to completion, applying `policy` and reporting to `visitor`.
///
/// Stops at the first error from either the cursor or the visitor. The root
/// itself is never pruned, whatever its name.
pub fn drive<C, V>(cursor: &mut C, policy: &WalkPolicy, visitor: &mut V) -> Result<(), IndexError>
where
    C: TreeCursor + ?Sized,
    V: TreeVisitor + ?Sized,
{
    while let Some(entry) = cursor.next_entry() {
        let entry = entry?;
        let name = entry.file_name();

        if entry.is_dir {
            if entry.depth > 0 && policy.should_skip_dir(&name) {
                cursor.prune();
                visitor.skipped_dir(&entry.path);
            } else {
                visitor.scanned_dir(&entry.path);
            }
            continue;
        }

        if policy.includes_file(&name) {
            visitor.file(&entry.path)?;
        }
    }
    Ok(())
}
