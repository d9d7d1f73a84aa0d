//! Output sinks: standard output, an output file, and the system clipboard.
//!
//! Stdout receives the tree followed by one extra newline. The file and the
//! clipboard receive the tree text exactly. Unlike traversal, clipboard and
//! file failures are returned as errors; a stdout failure is only logged.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Capability for placing text on a clipboard.
pub trait ClipboardWriter {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard writer that pipes text to an external command's stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `xclip -selection clipboard`.
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            bail!("clipboard command is empty");
        };
        Ok(Self::new(program, parts.collect()))
    }

    /// The platform's usual clipboard utility.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(windows) {
            Self::new("clip", Vec::new())
        } else {
            Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardWriter for CommandClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        debug!(program = %self.program, args = ?self.args, "spawning clipboard command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to run clipboard command `{}`", self.program))?;

        // A child that exits without reading stdin makes this write fail with
        // EPIPE; its exit status is the more useful error, so reap it first.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .with_context(|| format!("failed to wait for clipboard command `{}`", self.program))?;
        if !status.success() {
            bail!("clipboard command `{}` exited with {}", self.program, status);
        }
        written.with_context(|| format!("failed to write to clipboard command `{}`", self.program))?;
        info!(program = %self.program, bytes = text.len(), "copied tree to clipboard");
        Ok(())
    }
}

/// Write the tree to standard output, followed by one blank line.
pub fn print_tree<W: Write>(writer: &mut W, tree: &str) -> Result<()> {
    writeln!(writer, "{tree}").context("failed to write to stdout")?;
    writer.flush().context("failed to flush stdout")
}

/// Write the tree text verbatim to `path`, replacing any existing file.
pub fn write_output_file(path: &Path, tree: &str) -> Result<()> {
    fs::write(path, tree).with_context(|| format!("{}: failed to write output file", path.display()))?;
    info!(path = %path.display(), bytes = tree.len(), "wrote tree to file");
    Ok(())
}

/// Where the rendered tree goes besides stdout.
#[derive(Default)]
pub struct Sinks<'a> {
    pub output_file: Option<&'a Path>,
    pub clipboard: Option<&'a dyn ClipboardWriter>,
}

/// Deliver the tree: stdout first, then clipboard, then output file.
///
/// A stdout failure (closed pipe, full device) is logged and does not stop the
/// other sinks. Clipboard and file failures are returned, and the first one
/// stops the rest; anything already written stays written.
pub fn emit<W: Write>(stdout: &mut W, tree: &str, sinks: &Sinks<'_>) -> Result<()> {
    if let Err(e) = print_tree(stdout, tree) {
        warn!("{e:#}");
    }
    if let Some(clipboard) = sinks.clipboard {
        clipboard.copy(tree)?;
    }
    if let Some(path) = sinks.output_file {
        write_output_file(path, tree)?;
    }
    Ok(())
}
