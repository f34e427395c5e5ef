use crate::{csv, io::FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser};
use nimscan::{games::multiplicative::MultiplicativeNim, generator::GenerationMode};
use std::io::Write;
use tracing::info;

/// Find losing positions of multiplicative Nim: products congruent to one modulo a prime
#[derive(Parser, Debug)]
pub struct Args {
    /// Maximum value of each pile
    max_value: u32,

    /// Prime used to restrict piles and to reduce products
    prime: u32,

    /// Number of piles in each position
    count: usize,

    /// Output CSV path, `-` for stdout. Nothing is exported if omitted
    #[arg(long, default_value = None)]
    output: Option<FileOrStdout>,

    /// Generate every ordered tuple instead of one sorted representative per multiset
    #[arg(long)]
    duplicates: bool,

    /// Write `pile1,pile2,...` header row
    #[arg(long)]
    header: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    let game = MultiplicativeNim::new(args.max_value, args.prime)?;
    let mode = GenerationMode::from_allow_duplicates(args.duplicates);

    info!(n = args.count, domain = %game.domain(), "Generating positions");
    let expected = mode.count(game.domain(), args.count);
    super::warn_if_large(expected);
    if let Some(unique) = game.count_positions(args.count) {
        info!(unique, "Closed-form number of unique positions");
    }

    let analysis = game.analyze(args.count, mode)?;
    info!(total = analysis.generated, "Total positions generated");
    info!(filtered = analysis.filtered, "Filtered positions");
    info!(losing = analysis.losing.len(), "Losing positions");

    if let Some(output) = &args.output {
        let mut w = output
            .create()
            .with_context(|| format!("Could not create file '{}'", output))?;
        csv::write_positions(&mut w, &analysis.losing, args.count, args.header)
            .and_then(|()| w.flush())
            .with_context(|| format!("Could not write to file '{}'", output))?;
        info!(output = %output, "Results exported");
    }

    Ok(())
}
