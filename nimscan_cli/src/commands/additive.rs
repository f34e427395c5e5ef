use crate::{csv, io::FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser};
use nimscan::games::additive::AdditiveNim;
use std::io::Write;
use tracing::info;

/// Generate losing positions of Nim, i.e. positions with zero nim-sum
#[derive(Parser, Debug)]
pub struct Args {
    /// Maximum number of stones in any pile
    #[arg(long)]
    max_value: u32,

    /// Number of piles
    #[arg(long, default_value_t = 3)]
    arity: usize,

    /// Output CSV path, `-` for stdout
    #[arg(long, default_value = "nim_data.csv")]
    output: FileOrStdout,

    /// Also print every losing position with its nim-sum
    #[arg(long)]
    list: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    info!(max_value = args.max_value, arity = args.arity, "Generating data");

    let game = AdditiveNim::new(args.max_value);
    super::warn_if_large(game.domain().count_tuples(args.arity));
    let analysis = game.analyze(args.arity)?;

    let mut w = args
        .output
        .create()
        .with_context(|| format!("Could not create file '{}'", args.output))?;
    csv::write_positions(&mut w, &analysis.losing, args.arity, true)
        .and_then(|()| w.flush())
        .with_context(|| format!("Could not write to file '{}'", args.output))?;
    info!(output = %args.output, "Data saved");

    info!(
        generated = analysis.generated,
        losing = analysis.losing.len(),
        "Generated losing positions"
    );
    if args.list {
        eprintln!("Losing positions (XOR=0):");
        for position in &analysis.losing {
            eprintln!("{}", position.nim_sum_equation());
        }
    }

    Ok(())
}
