use std::collections::HashSet;
use std::ffi::OsStr;

use super::DirectoryEntry;

/// Directory names that are always excluded.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "__pycache__", "node_modules", ".idea", ".vscode"];

/// File names that are always excluded.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[".DS_Store", ".gitignore"];

/// Name-exact denylist, partitioned by entry type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    dirs: HashSet<String>,
    files: HashSet<String>,
}

impl ExclusionSet {
    /// Build the exclusion set from the built-in defaults plus user additions.
    pub fn new(user_dirs: &[String], user_files: &[String]) -> Self {
        let dirs = DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|s| s.to_string())
            .chain(user_dirs.iter().cloned())
            .collect();
        let files = DEFAULT_EXCLUDED_FILES
            .iter()
            .map(|s| s.to_string())
            .chain(user_files.iter().cloned())
            .collect();
        Self { dirs, files }
    }

    /// An exclusion set with no names at all, not even the defaults.
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            files: HashSet::new(),
        }
    }

    pub fn excludes_dir(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.dirs.contains(n))
    }

    pub fn excludes_file(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.files.contains(n))
    }

    /// Whether an entry is dropped from listings, either as a pseudo-entry or by name.
    pub fn excludes(&self, entry: &DirectoryEntry) -> bool {
        let name = entry.file_name.as_os_str();
        if name == "." || name == ".." {
            return true;
        }
        if entry.is_dir {
            self.excludes_dir(name)
        } else {
            self.excludes_file(name)
        }
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(&[], &[])
    }
}
