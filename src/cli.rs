use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  directree -max-depth 3 -color ~/projects
  directree -exclude target -exclude-file Cargo.lock -o tree.txt
  directree --clip .";

/// Long flags that may also be spelled with a single leading dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &[
    "max-depth",
    "color",
    "exclude",
    "exclude-file",
    "clip",
    "clip-cmd",
    "verbose",
    "quiet",
    "help",
    "version",
];

/// Long flags whose value may be given as the next token.
const VALUE_FLAGS: &[&str] = &["max-depth", "exclude", "exclude-file", "clip-cmd"];

const SHORT_OUTPUT_FLAG: &str = "o";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "directree",
    version,
    about = "Generate a tree-like visualization of directory structure",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth to traverse (-1 for unlimited)
    #[arg(
        long = "max-depth",
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    pub max_depth: i64,

    /// Enable colored output
    #[arg(long = "color")]
    pub color: bool,

    /// Directory name to exclude (repeatable)
    #[arg(
        long = "exclude",
        value_name = "NAME",
        allow_hyphen_values = true,
        action = clap::ArgAction::Append
    )]
    pub exclude: Vec<String>,

    /// File name to exclude (repeatable)
    #[arg(
        long = "exclude-file",
        value_name = "NAME",
        allow_hyphen_values = true,
        action = clap::ArgAction::Append
    )]
    pub exclude_file: Vec<String>,

    /// Also write the tree to this file
    #[arg(short = 'o', value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Also copy the tree to the clipboard
    #[arg(long = "clip")]
    pub clip: bool,

    /// Clipboard command line (defaults to the platform utility)
    #[arg(long = "clip-cmd", value_name = "COMMAND", allow_hyphen_values = true)]
    pub clip_cmd: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Parse from the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.color = false;
        }
        self
    }

    /// Depth limit as an option; `-1` means unlimited.
    pub fn depth_limit(&self) -> Option<usize> {
        usize::try_from(self.max_depth).ok()
    }
}

/// Rewrite `-max-depth` style tokens into `--max-depth` so clap can parse them.
///
/// Only names in the known long-flag list are rewritten, with or without an
/// `=value` suffix. The token after a value-taking flag is its value and is
/// never rewritten. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;
    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        // argv[0] is the program name
        if i == 0 || passthrough || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let (rewritten, takes_value) = classify_flag(&arg);
        value_next = takes_value;
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

/// Returns the double-dash rewrite of a single-dash long flag (if any) and
/// whether the following token is this flag's value.
fn classify_flag(arg: &OsString) -> (Option<OsString>, bool) {
    let Some(s) = arg.to_str() else {
        return (None, false);
    };
    let (single_dash, rest) = match s.strip_prefix("--") {
        Some(rest) => (false, rest),
        None => match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => return (None, false),
        },
    };
    let (name, inline_value) = match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    };
    let takes_value = !inline_value
        && (VALUE_FLAGS.contains(&name) || (single_dash && name == SHORT_OUTPUT_FLAG));
    let rewritten = (single_dash && SINGLE_DASH_LONG_FLAGS.contains(&name))
        .then(|| OsString::from(format!("-{s}")));
    (rewritten, takes_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|s| s.into_string().unwrap())
            .collect()
    }

    #[test]
    fn single_dash_long_flags_rewritten() {
        assert_eq!(
            normalized(&["directree", "-max-depth", "2", "-color", "-exclude=target", "dir"]),
            vec!["directree", "--max-depth", "2", "--color", "--exclude=target", "dir"]
        );
    }

    #[test]
    fn short_and_double_dash_untouched() {
        assert_eq!(
            normalized(&["directree", "-o", "out.txt", "--clip", "-vv", "-1"]),
            vec!["directree", "-o", "out.txt", "--clip", "-vv", "-1"]
        );
    }

    #[test]
    fn arguments_after_separator_untouched() {
        assert_eq!(
            normalized(&["directree", "--", "-color"]),
            vec!["directree", "--", "-color"]
        );
    }

    #[test]
    fn flag_values_are_not_rewritten() {
        assert_eq!(
            normalized(&["directree", "-exclude", "-clip", "-o", "-color", "-exclude-file=-x", "-clip"]),
            vec!["directree", "--exclude", "-clip", "-o", "-color", "--exclude-file=-x", "--clip"]
        );
        assert_eq!(
            normalized(&["directree", "--clip-cmd", "-verbose", "-max-depth", "-1", "-quiet"]),
            vec!["directree", "--clip-cmd", "-verbose", "--max-depth", "-1", "--quiet"]
        );
    }

    #[test]
    fn hyphenated_values_parse_as_names() {
        let args = Args::parse_from(normalize_args([
            "directree", "-exclude", "-clip", "-exclude-file", "-color", "-o", "-out", "dir",
        ]));
        assert_eq!(args.exclude, vec!["-clip"]);
        assert_eq!(args.exclude_file, vec!["-color"]);
        assert_eq!(args.output.as_deref().and_then(|p| p.to_str()), Some("-out"));
        assert!(!args.clip);
        assert!(!args.color);
        assert_eq!(args.path.to_str(), Some("dir"));
    }

    #[test]
    fn unknown_single_dash_names_untouched() {
        assert_eq!(
            normalized(&["directree", "-colour"]),
            vec!["directree", "-colour"]
        );
    }

    #[test]
    fn depth_limit_maps_sentinel() {
        let args = Args::parse_from(["directree"]);
        assert_eq!(args.max_depth, -1);
        assert_eq!(args.depth_limit(), None);
        let args = Args::parse_from(["directree", "--max-depth", "3"]);
        assert_eq!(args.depth_limit(), Some(3));
    }
}
