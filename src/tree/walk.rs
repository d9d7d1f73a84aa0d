use std::cmp::Ordering;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::{DirectoryEntry, ExclusionSet};

/// List the immediate children of `path`, filtered by `exclusions` and sorted.
///
/// Any failure to read the directory (missing, not a directory, permission
/// denied, vanished mid-read) yields an empty list rather than an error.
pub fn list_entries(path: &Path, exclusions: &ExclusionSet) -> Vec<DirectoryEntry> {
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let raw: Result<Vec<DirectoryEntry>, walkdir::Error> = walker
        .into_iter()
        .map(|res| {
            res.map(|entry| DirectoryEntry::new(entry.file_name(), entry.file_type().is_dir()))
        })
        .collect();

    let mut entries = match raw {
        Ok(entries) => entries,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable directory, treating as empty");
            return Vec::new();
        }
    };

    entries.retain(|entry| !exclusions.excludes(entry));
    entries.sort_by(compare_entries);
    entries
}

/// Directories first, then byte-wise name order.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    // `true` sorts after `false`, so compare the negated flags.
    (!a.is_dir)
        .cmp(&!b.is_dir)
        .then_with(|| a.file_name.cmp(&b.file_name))
}
