use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod csv;
mod io;

#[cfg(not(windows))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[derive(Subcommand, Debug)]
enum Command {
    Additive(additive::Args),
    Multiplicative(multiplicative::Args),
    Compare(compare::Args),
}

/// Enumerate losing positions of additive and multiplicative Nim
#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // stdout may carry CSV, keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Additive(args) => additive::run(args),
        Command::Multiplicative(args) => multiplicative::run(args),
        Command::Compare(args) => compare::run(args),
    }
}
