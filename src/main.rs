#![forbid(unsafe_code)]

use anyhow::Result;
use directree::cli::Args;
use directree::render::{render_tree, RenderConfig};
use directree::sink::{emit, ClipboardWriter, CommandClipboard, Sinks};
use directree::tree::{ExclusionSet, TreeConfig};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("directree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse_normalized().validated();
    init_logging(args.verbose, args.quiet);

    // Resolve the clipboard command before doing any work so a bad
    // --clip-cmd fails fast.
    let clipboard = if args.clip {
        Some(match args.clip_cmd.as_deref() {
            Some(command_line) => CommandClipboard::from_command_line(command_line)?,
            None => CommandClipboard::platform_default(),
        })
    } else {
        None
    };

    // An unreadable root renders as an empty tree, same as any other directory.
    if !args.path.is_dir() {
        warn!(path = %args.path.display(), "root is not a readable directory");
    }

    let tree_config = TreeConfig {
        max_depth: args.depth_limit(),
        exclusions: ExclusionSet::new(&args.exclude, &args.exclude_file),
    };
    let render_config = RenderConfig {
        use_color: args.color,
    };
    debug!(
        path = %args.path.display(),
        max_depth = ?tree_config.max_depth,
        color = render_config.use_color,
        "rendering tree"
    );

    let tree = render_tree(&args.path, &tree_config, &render_config);

    let sinks = Sinks {
        output_file: args.output.as_deref(),
        clipboard: clipboard.as_ref().map(|c| c as &dyn ClipboardWriter),
    };
    let stdout = std::io::stdout();
    emit(&mut stdout.lock(), &tree, &sinks)
}

/// Install a stderr subscriber. `DIRECTREE_LOG` overrides the flag-derived level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("DIRECTREE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
