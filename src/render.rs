//! Recursive tree rendering into plain (optionally ANSI-colored) text.

use crate::tree::{connector, next_prefix, DirectoryEntry, DirectoryLister, TreeConfig, WalkdirLister};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, trace};

/// Configuration for line formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Whether directory names are wrapped in ANSI color codes.
    pub use_color: bool,
}

/// Color applied to directory names.
pub const DIR_COLOR: &str = "\x1b[0;34m";
/// Resets all SGR attributes.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Escape control characters so a name cannot break the line structure or
/// inject terminal control sequences.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    let _ = write!(out, "\\x{:02X}", code);
                } else {
                    let _ = write!(out, "\\u{{{:X}}}", code);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Format exactly one output line: `prefix + connector + name + "\n"`.
pub fn format_entry_line(
    entry: &DirectoryEntry,
    prefix: &str,
    is_last: bool,
    config: &RenderConfig,
) -> String {
    let name = sanitize_terminal_text(&entry.name());
    if entry.is_dir && config.use_color {
        format!("{prefix}{}{DIR_COLOR}{name}{COLOR_RESET}\n", connector(is_last))
    } else {
        format!("{prefix}{}{name}\n", connector(is_last))
    }
}

/// Render the tree below `root` using the filesystem.
///
/// The root itself is not printed; the first line is its first child.
pub fn render_tree(root: &Path, tree_config: &TreeConfig, render_config: &RenderConfig) -> String {
    render_tree_with(&WalkdirLister, root, tree_config, render_config)
}

/// Render the tree below `root` using an arbitrary lister.
pub fn render_tree_with<L: DirectoryLister + ?Sized>(
    lister: &L,
    root: &Path,
    tree_config: &TreeConfig,
    render_config: &RenderConfig,
) -> String {
    let renderer = Renderer {
        lister,
        tree_config,
        render_config,
    };
    let mut out = String::new();
    renderer.render_dir(root, "", 0, &mut out);
    out
}

struct Renderer<'a, L: ?Sized> {
    lister: &'a L,
    tree_config: &'a TreeConfig,
    render_config: &'a RenderConfig,
}

impl<L: DirectoryLister + ?Sized> Renderer<'_, L> {
    /// Pre-order descent. `depth` is the depth of `path`'s children.
    fn render_dir(&self, path: &Path, prefix: &str, depth: usize, out: &mut String) {
        if let Some(max) = self.tree_config.max_depth {
            if depth > max {
                trace!(path = %path.display(), depth, "depth limit reached");
                return;
            }
        }

        let entries = self.lister.list(path, &self.tree_config.exclusions);
        debug!(path = %path.display(), depth, count = entries.len(), "listed directory");

        let len = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == len;
            out.push_str(&format_entry_line(entry, prefix, is_last, self.render_config));
            if entry.is_dir {
                let child = path.join(&entry.file_name);
                self.render_dir(&child, &next_prefix(prefix, is_last), depth + 1, out);
            }
        }
    }
}
