#![allow(dead_code)]

use directree::render::RenderConfig;
use directree::tree::{ExclusionSet, TreeConfig};
use std::fs;
use tempfile::TempDir;

/// TreeConfig with the built-in exclusions and no depth limit.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig {
        max_depth: None,
        exclusions: ExclusionSet::default(),
    }
}

/// TreeConfig with a depth limit.
pub fn depth_limited_config(max_depth: usize) -> TreeConfig {
    TreeConfig {
        max_depth: Some(max_depth),
        ..default_tree_config()
    }
}

/// RenderConfig with color disabled.
pub fn no_color_render_config() -> RenderConfig {
    RenderConfig { use_color: false }
}

/// RenderConfig with color enabled.
pub fn color_render_config() -> RenderConfig {
    RenderConfig { use_color: true }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// The fixture from the reference example: `a/x.txt`, empty `b/`, `z.txt`.
pub fn reference_fixture() -> TempDir {
    create_fixture(&["b/", "a/x.txt", "z.txt"])
}

pub const REFERENCE_TREE: &str = "├── a\n│   └── x.txt\n├── b\n└── z.txt\n";

/// Number of 4-column prefix segments before the connector on a rendered line.
pub fn line_depth(line: &str) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut depth = 0;
    while depth * 4 + 4 <= chars.len() {
        let segment: String = chars[depth * 4..depth * 4 + 4].iter().collect();
        if segment == "│   " || segment == "    " {
            depth += 1;
        } else {
            break;
        }
    }
    depth
}

/// The name portion of a rendered line (everything after the connector).
pub fn line_name(line: &str) -> &str {
    line.rsplit_once("── ").map_or(line, |(_, name)| name)
}
