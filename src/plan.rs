//! Rename plan: which files get their directory path prefixed, and what they become.

use std::{
        ffi::{OsStr, OsString},
        path::{Component, Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Separator placed between directory components (and before the original filename).
pub const SEPARATOR: &str = "-";

/// A single mapping from an existing file to its target in the *same* directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
        pub original: PathBuf,
        pub target: PathBuf,
}

impl RenamePair {
        /// Filename component of the original path.
        pub fn original_name(&self) -> &OsStr {
                self.original.file_name().unwrap_or_default()
        }

        /// Filename component of the target path.
        pub fn target_name(&self) -> &OsStr {
                self.target.file_name().unwrap_or_default()
        }
}

/// Ordered rename pairs, in tree-walk discovery order.
#[derive(Debug, Clone)]
pub struct RenamePlan {
        base: PathBuf,
        pairs: Vec<RenamePair>,
}

impl RenamePlan {
        pub fn new(base: impl Into<PathBuf>, pairs: Vec<RenamePair>) -> Self {
                Self { base: base.into(), pairs }
        }

        pub fn pairs(&self) -> &[RenamePair] {
                &self.pairs
        }

        pub fn len(&self) -> usize {
                self.pairs.len()
        }

        pub fn is_empty(&self) -> bool {
                self.pairs.is_empty()
        }

        /// `path` shown relative to the plan's base directory (falls back to `path` itself).
        pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
                path.strip_prefix(&self.base).unwrap_or(path)
        }
}

/// Walk `base` and collect every file below it whose name lacks its directory prefix.
///
/// Files directly inside `base` are never considered.
/// Within a directory, its files come first (lexicographic), then each subdirectory's subtree
/// (lexicographic), so dry-run output is stable.
#[tracing::instrument]
pub fn build_plan(base: &Path) -> Result<RenamePlan> {
        // Guard: base must be an existing directory
        if !base.is_dir() {
                return Err(Error::DirectoryNotFound(base.to_path_buf()));
        }

        let mut pairs = Vec::new();
        let walk = WalkDir::new(base).min_depth(2).sort_by(|a, b| {
                a.file_type().is_dir().cmp(&b.file_type().is_dir()).then_with(|| a.file_name().cmp(b.file_name()))
        });
        for entry in walk {
                // Guard: walk errors (unreadable subdirectory, loop, etc.); an unreadable base is fatal
                let entry = match entry {
                        Ok(entry) => entry,
                        Err(e) if e.depth() == 0 => return Err(e.into()),
                        Err(e) => {
                                tracing::error!("Error encountered while walking dir: {}", e);
                                continue;
                        }
                };
                // Guard: directories (and links to them); file links & dangling links go to `fs::rename` as-is
                if entry.file_type().is_dir() || entry.path().is_dir() {
                        continue;
                }
                let original = entry.path();
                // Guard: path outside of base (should not occur with WalkDir rooted at base)
                let Ok(rel_path) = original.strip_prefix(base) else {
                        tracing::error!("Entry not below base directory: {:?}", original);
                        continue;
                };
                let Some(new_filename) = flattened_file_name(rel_path) else {
                        tracing::trace!("No directory components for: {:?}", rel_path);
                        continue;
                };
                let target = original.with_file_name(&new_filename);
                // Guard: already conforms
                if target.as_path() == original {
                        tracing::trace!("Already prefixed: {:?}", rel_path);
                        continue;
                }
                if target.exists() {
                        tracing::warn!("Rename target already exists and will collide: {:?}", target);
                }
                pairs.push(RenamePair { original: original.to_path_buf(), target });
        }
        tracing::debug!("planned {} renames", pairs.len());
        Ok(RenamePlan::new(base, pairs))
}

/// Compute the flattened filename for a path relative to the base directory.
///
/// `a/b/c.txt` ~~> `a-b-c.txt`. A name that already starts with `a-b-` is returned unchanged.
/// Returns `None` when `rel_path` has no directory components.
pub fn flattened_file_name(rel_path: &Path) -> Option<OsString> {
        let filename = rel_path.file_name()?;
        let dir_parts: Vec<&OsStr> = rel_path
                .parent()?
                .components()
                .filter_map(|c| match c {
                        Component::Normal(part) => Some(part),
                        _ => None,
                })
                .collect();
        if dir_parts.is_empty() {
                return None;
        }

        let mut prefix = OsString::new();
        for part in dir_parts {
                prefix.push(part);
                prefix.push(SEPARATOR);
        }
        if starts_with_os(filename, &prefix) {
                return Some(filename.to_os_string());
        }
        prefix.push(filename);
        Some(prefix)
}

/// Byte-wise prefix test on `OsStr`s (handles non-UTF-8 names).
fn starts_with_os(name: &OsStr, prefix: &OsStr) -> bool {
        name.as_encoded_bytes().starts_with(prefix.as_encoded_bytes())
}
