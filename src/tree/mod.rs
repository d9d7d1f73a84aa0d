//! Directory listing, exclusion policy, sorting, and layout glyphs.

mod exclude;
pub(crate) mod layout;
pub(crate) mod walk;

use std::ffi::OsString;
use std::path::Path;

pub use exclude::{ExclusionSet, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES};
pub use layout::{connector, next_prefix, ELBOW, PIPE, SPACER, TEE};
pub use walk::{compare_entries, list_entries};

/// A single immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw filename component, used for ordering and for building child paths.
    pub file_name: OsString,
    /// Whether this entry is a directory (symlinks are never followed).
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(file_name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            file_name: file_name.into(),
            is_dir,
        }
    }

    /// Display name, lossily converted to UTF-8.
    pub fn name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

/// Configuration for tree traversal.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Maximum depth whose entries are still listed (`None` for unlimited).
    /// The root's direct children sit at depth 0.
    pub max_depth: Option<usize>,
    /// Names excluded from the listing, scoped by entry type.
    pub exclusions: ExclusionSet,
}

/// Abstraction over directory listing so the renderer can be driven without a filesystem.
pub trait DirectoryLister {
    /// Return the filtered, sorted children of `path`. Unreadable paths yield an empty list.
    fn list(&self, path: &Path, exclusions: &ExclusionSet) -> Vec<DirectoryEntry>;
}

/// Default `DirectoryLister` that reads the filesystem through walkdir.
pub struct WalkdirLister;

impl DirectoryLister for WalkdirLister {
    fn list(&self, path: &Path, exclusions: &ExclusionSet) -> Vec<DirectoryEntry> {
        list_entries(path, exclusions)
    }
}
