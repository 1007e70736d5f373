use std::io::{self, Write};
use std::path::Path;

use gsd_core::{resolve, write_document, write_error, write_help, HelpContext, Layout};

const HELP_ALIASES: [&str; 3] = ["help", "--help", "-h"];

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation<'a> {
    Help,
    Dispatch { name: &'a str, args: &'a [String] },
}

impl<'a> Invocation<'a> {
    /// First word is the command, the rest are its arguments.
    pub fn from_words(words: &'a [String]) -> Self {
        Self::classify(
            words.first().map(String::as_str),
            words.get(1..).unwrap_or(&[]),
        )
    }

    /// A missing or empty command selects help, as do the help aliases.
    pub fn classify(command: Option<&'a str>, args: &'a [String]) -> Self {
        match command {
            None => Invocation::Help,
            Some(name) if name.is_empty() || HELP_ALIASES.contains(&name) => Invocation::Help,
            Some(name) => Invocation::Dispatch { name, args },
        }
    }
}

/// Runs one invocation and returns the process exit status. Document and
/// help text go to `out`; failure reports go to `err`.
pub fn run<O: Write, E: Write>(
    invocation: Invocation<'_>,
    layout: &Layout,
    cwd: Option<&Path>,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let help = HelpContext::new(layout, cwd);

    match invocation {
        Invocation::Help => {
            write_help(out, &help)?;
            Ok(0)
        }
        Invocation::Dispatch { name, args } => match resolve(layout.root(), name) {
            Ok(doc) => {
                write_document(out, doc.entry.name, args, &doc.content)?;
                Ok(0)
            }
            Err(e) => {
                tracing::debug!("dispatch failed: {}", e);
                write_error(err, &e, layout.program())?;
                Ok(e.exit_code())
            }
        },
    }
}
