use std::io::{self, Write};

use anyhow::Context;
use gsd_core::Layout;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
use commands::cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let words = cli::Args::parse_verbatim(std::env::args_os()).into_words();
    let layout = Layout::from_current_exe().context("failed to locate the GSD installation")?;
    let cwd = std::env::current_dir().ok();

    let invocation = app::Invocation::from_words(&words);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let exit = app::run(invocation, &layout, cwd.as_deref(), &mut out, &mut err)?;
    out.flush()?;

    if exit != 0 {
        std::process::exit(exit);
    }
    Ok(())
}
