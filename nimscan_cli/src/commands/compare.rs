use crate::{
    csv,
    io::{FileOrStdin, FileOrStdout},
};
use anyhow::{Context, Result, bail};
use clap::{self, Parser, ValueEnum};
use nimscan::{
    partition::{Bucket, Partition},
    position::Position,
};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Debug, Clone, Serialize)]
struct Report<'a> {
    bucket: Bucket,
    position: &'a Position,
}

/// Split positions from two or three CSV files into exclusive and overlapping groups
#[derive(Parser, Debug)]
pub struct Args {
    /// Two or three CSV files with one position per row, `-` for stdin
    #[arg(num_args = 2..=3, required = true)]
    files: Vec<FileOrStdin>,

    /// Output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: FileOrStdout,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    if args.files.iter().filter(|f| matches!(f, FileOrStdin::Stdin)).count() > 1 {
        bail!("At most one input can be read from stdin");
    }

    let mut inputs = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let reader = file
            .open()
            .with_context(|| format!("Could not open file '{}'", file))?;
        let positions = csv::read_positions(reader, &file.to_string())?;
        debug!(file = %file, positions = positions.len(), "Read positions");
        inputs.push(positions);
    }

    let arity = inputs.iter().flatten().map(Position::arity).next().unwrap_or(0);
    let mut inputs = inputs.into_iter();
    let (a, b, c) = (
        inputs.next().unwrap_or_default(),
        inputs.next().unwrap_or_default(),
        inputs.next().unwrap_or_default(),
    );
    let partition = Partition::of_three(a, b, c).context("Could not compare inputs")?;

    for (bucket, positions) in partition.buckets() {
        info!(%bucket, positions = positions.len(), "Bucket");
    }

    let mut w = args
        .output
        .create()
        .with_context(|| format!("Could not create file '{}'", args.output))?;
    match args.format {
        Format::Csv => csv::write_partition(&mut w, &partition, arity)
            .with_context(|| format!("Could not write to file '{}'", args.output))?,
        Format::Json => {
            for (bucket, positions) in partition.buckets() {
                for position in positions {
                    let report = Report { bucket, position };
                    serde_json::to_writer(&mut w, &report)?;
                    writeln!(w)
                        .with_context(|| format!("Could not write to file '{}'", args.output))?;
                }
            }
        }
    }
    w.flush()
        .with_context(|| format!("Could not write to file '{}'", args.output))?;

    Ok(())
}
