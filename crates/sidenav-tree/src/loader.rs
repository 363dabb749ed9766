//! Filesystem tree loader.
//!
//! Scans a source directory and produces the default-ordered [`Node`] tree:
//! subdirectories become categories, `*.md` files become documents keyed by
//! filename stem. File contents are never read; only the directory structure
//! matters here.
//!
//! # Default Order
//!
//! Children are sorted directories-first, then case-insensitively by name.
//! The sort is total and depends only on entry names, so repeated scans of
//! an unchanged directory yield an identical tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::node::Node;

/// Directories never treated as documentation categories.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    ".cache",
    "vendor",
    "__pycache__",
];

/// Error returned when tree loading fails.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Source directory missing or not a directory.
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// I/O error while scanning.
    #[error("I/O error scanning {}: {source}", .path.display())]
    Io {
        /// Directory being scanned when the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Two siblings resolved to the same key (e.g. `guide/` next to `guide.md`).
    #[error("Duplicate sibling key '{key}' under '{path}'")]
    DuplicateKey {
        /// Joined path of the parent category (`""` for root).
        path: String,
        /// The colliding key.
        key: String,
    },
}

/// Builds a [`Node`] tree from a directory of markdown sources.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use sidenav_tree::TreeLoader;
///
/// let loader = TreeLoader::new(PathBuf::from("docs"));
/// let tree = loader.load()?;
/// ```
#[derive(Clone, Debug)]
pub struct TreeLoader {
    source_dir: PathBuf,
}

impl TreeLoader {
    /// Create a loader rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the source directory and build the tree.
    ///
    /// The returned root is a category with an empty path whose children are
    /// the top-level categories and documents.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::SourceNotFound`] if the source directory does not
    /// exist, [`TreeError::Io`] on unreadable directories, and
    /// [`TreeError::DuplicateKey`] when two siblings share a key.
    pub fn load(&self) -> Result<Node, TreeError> {
        if !self.source_dir.is_dir() {
            return Err(TreeError::SourceNotFound(self.source_dir.clone()));
        }

        let children = Self::scan_directory(&self.source_dir, &[])?;
        let root = Node::category(Vec::new(), children);
        tracing::debug!(
            source_dir = %self.source_dir.display(),
            nodes = root.node_count(),
            "Loaded documentation tree"
        );
        Ok(root)
    }

    /// Scan one directory level and collect default-ordered children.
    fn scan_directory(dir_path: &Path, segments: &[String]) -> Result<Vec<Node>, TreeError> {
        let entries = fs::read_dir(dir_path).map_err(|source| TreeError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;

        // Collect entries with cached file_type to avoid repeated stat calls in sort.
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name_lower = e.file_name().to_string_lossy().to_lowercase();
                (e, is_dir, name_lower)
            })
            .collect();

        // Sort: directories first, then alphabetical by name
        entries.sort_by(|(_, a_is_dir, a_name), (_, b_is_dir, b_name)| {
            b_is_dir.cmp(a_is_dir).then_with(|| a_name.cmp(b_name))
        });

        let mut children = Vec::new();
        let mut seen_keys: HashSet<String> = HashSet::new();

        for (entry, is_dir, name_lower) in entries {
            // Skip hidden and underscore-prefixed files/dirs
            if name_lower.starts_with('.') || name_lower.starts_with('_') {
                continue;
            }

            if is_dir && SKIP_DIRS.contains(&name_lower.as_str()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();

            let child = if is_dir {
                let mut child_segments = segments.to_vec();
                child_segments.push(name.clone());
                let grandchildren = Self::scan_directory(&entry.path(), &child_segments)?;
                Node::category(child_segments, grandchildren)
            } else if Path::new(&name).extension().is_some_and(|e| e == "md") {
                let stem = name.strip_suffix(".md").unwrap_or(&name).to_owned();
                let mut child_segments = segments.to_vec();
                child_segments.push(stem);
                Node::document(child_segments)
            } else {
                continue;
            };

            if !seen_keys.insert(child.key().to_owned()) {
                return Err(TreeError::DuplicateKey {
                    path: segments.join("/"),
                    key: child.key().to_owned(),
                });
            }
            children.push(child);
        }

        Ok(children)
    }
}
