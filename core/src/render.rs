//! Console text: the document banner, the help reference and error reports.
//!
//! Everything writes into a caller-supplied `Write` so the binary can target
//! stdout/stderr and tests can capture into a `Vec<u8>`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::DispatchError;
use crate::layout::{display_relative, Layout};
use crate::table::{self, CommandGroup};

pub const SEPARATOR: &str =
    "═══════════════════════════════════════════════════════════════════";

const FOLLOW_UP: &str = "Follow the instructions above to execute this GSD workflow.";

const SYNOPSIS_WIDTH: usize = 28;

const EXAMPLES: [&str; 5] = [
    "new-project",
    "plan-phase 1",
    "execute-phase 1",
    "progress",
    "quick",
];

/// Writes `content` framed by the command banner. The document body is
/// emitted exactly as read.
pub fn write_document<W: Write>(
    out: &mut W,
    name: &str,
    args: &[String],
    content: &[u8],
) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "GSD Command: {name}")?;
    if !args.is_empty() {
        writeln!(out, "Arguments: {}", args.join(" "))?;
    }
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;
    out.write_all(content)?;
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{FOLLOW_UP}")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Paths interpolated into the help reference.
#[derive(Debug, Clone)]
pub struct HelpContext {
    pub program: PathBuf,
    pub tools_script: PathBuf,
    pub references_dir: PathBuf,
    pub workflows_dir: PathBuf,
}

impl HelpContext {
    /// Program and tools paths are shown relative to `cwd` when they sit
    /// beneath it; documentation directories stay absolute.
    pub fn new(layout: &Layout, cwd: Option<&Path>) -> Self {
        let rel = |p: &Path| match cwd {
            Some(cwd) => display_relative(p, cwd),
            None => p.to_path_buf(),
        };
        Self {
            program: rel(layout.program()),
            tools_script: rel(&layout.tools_script()),
            references_dir: layout.references_dir(),
            workflows_dir: layout.workflows_dir(),
        }
    }
}

pub fn write_help<W: Write>(out: &mut W, ctx: &HelpContext) -> io::Result<()> {
    let program = ctx.program.display();

    writeln!(out)?;
    writeln!(out, "GSD CLI — Get Shit Done for GitHub Copilot")?;
    writeln!(out)?;
    writeln!(out, "Usage: {program} <command> [arguments]")?;

    for group in CommandGroup::ALL {
        writeln!(out)?;
        writeln!(out, "{}:", group.title())?;
        for entry in table::in_group(group) {
            writeln!(
                out,
                "  {:<width$} {}",
                entry.synopsis(),
                entry.summary,
                width = SYNOPSIS_WIDTH
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Low-Level Tools:")?;
    writeln!(out, "  For advanced operations, use:")?;
    writeln!(out, "  node {} <command> [args]", ctx.tools_script.display())?;

    writeln!(out)?;
    writeln!(out, "Examples:")?;
    for example in EXAMPLES {
        writeln!(out, "  {program} {example}")?;
    }

    writeln!(out)?;
    writeln!(out, "For detailed documentation, see:")?;
    writeln!(out, "  {}/", ctx.references_dir.display())?;
    writeln!(out, "  {}/", ctx.workflows_dir.display())?;
    writeln!(out)?;
    Ok(())
}

/// User-facing report for a failed dispatch, destined for stderr.
pub fn write_error<W: Write>(out: &mut W, err: &DispatchError, program: &Path) -> io::Result<()> {
    match err {
        DispatchError::UnknownCommand { name } => {
            writeln!(out, "Error: Unknown command '{name}'")?;
            writeln!(
                out,
                "Run '{} help' for available commands.",
                program.display()
            )?;
        }
        DispatchError::MissingDocument { name, tried } => {
            writeln!(
                out,
                "Error: Neither command nor workflow file found for '{name}'"
            )?;
            for path in tried {
                writeln!(out, "  Tried: {path}")?;
            }
        }
        DispatchError::Unreadable { path, source } => {
            writeln!(out, "Error: Failed to read '{}': {source}", path.display())?;
        }
    }
    Ok(())
}
