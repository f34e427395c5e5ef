//! Comma separated tables of pile sizes

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use nimscan::{partition::Partition, position::Position};
use std::io::{self, BufRead, Write};

/// `pile1,pile2,...,pileN`
pub fn pile_header(arity: usize) -> String {
    (1..=arity).map(|i| format!("pile{i}")).join(",")
}

pub fn write_positions<W>(
    w: &mut W,
    positions: &[Position],
    arity: usize,
    header: bool,
) -> io::Result<()>
where
    W: Write,
{
    if header {
        writeln!(w, "{}", pile_header(arity))?;
    }
    for position in positions {
        writeln!(w, "{}", position.piles().iter().join(","))?;
    }
    Ok(())
}

/// One row per position, prefixed with its bucket label. Empty buckets produce no rows and an
/// empty partition produces no output at all.
pub fn write_partition<W>(w: &mut W, partition: &Partition, arity: usize) -> io::Result<()>
where
    W: Write,
{
    if partition.is_empty() {
        return Ok(());
    }
    writeln!(w, "bucket,{}", pile_header(arity))?;
    for (bucket, positions) in partition.buckets() {
        for position in positions {
            writeln!(w, "{},{}", bucket, position.piles().iter().join(","))?;
        }
    }
    Ok(())
}

/// Read positions, one per row.
///
/// A first row in which no cell is an integer is taken as header. Every row must have as many
/// columns as the first one.
pub fn read_positions<R>(reader: R, source: &str) -> Result<Vec<Position>>
where
    R: BufRead,
{
    let mut width: Option<usize> = None;
    let mut seen_row = false;
    let mut positions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Could not read '{source}' at line {line_no}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = line.split(',').map(str::trim).collect::<Vec<_>>();
        let is_first_row = !seen_row;
        seen_row = true;

        let piles = match cells
            .iter()
            .map(|cell| cell.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(piles) => piles,
            Err(_)
                if is_first_row && cells.iter().all(|cell| cell.parse::<i64>().is_err()) =>
            {
                width = Some(cells.len());
                continue;
            }
            Err(err) => {
                bail!("'{source}' line {line_no}: could not parse '{line}' as pile sizes: {err}")
            }
        };

        match width {
            None => width = Some(piles.len()),
            Some(expected) if piles.len() < expected => bail!(
                "'{source}' line {line_no}: too few columns, expected {expected}, found {}",
                piles.len()
            ),
            Some(expected) if piles.len() > expected => bail!(
                "'{source}' line {line_no}: too many columns, expected {expected}, found {}",
                piles.len()
            ),
            Some(_) => {}
        }
        positions.push(Position::new(piles));
    }

    if !seen_row {
        bail!("File '{source}' is empty");
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<Vec<Position>> {
        read_positions(input.as_bytes(), "test.csv")
    }

    #[test]
    fn reads_with_and_without_header() {
        let expected = vec![Position::from([1, 2, 3]), Position::from([0, 0, 0])];
        assert_eq!(read("pile1,pile2,pile3\n1,2,3\n0,0,0\n").unwrap(), expected);
        assert_eq!(read("1,2,3\n\n 0, 0 ,0\n").unwrap(), expected);
        assert_eq!(read("a,b\n").unwrap(), vec![]);
    }

    #[test]
    fn rejects_bad_input() {
        let empty = read("\n  \n").unwrap_err().to_string();
        assert_eq!(empty, "File 'test.csv' is empty");

        let malformed = read("1,2,3\n1,x,3\n").unwrap_err().to_string();
        assert!(malformed.starts_with("'test.csv' line 2: could not parse"));

        let negative = read("pile1\n-1\n").unwrap_err().to_string();
        assert!(negative.contains("line 2"));

        // a partly numeric first row is data, not a header
        let malformed_first = read("1,x,3\n4,5,6\n").unwrap_err().to_string();
        assert!(malformed_first.starts_with("'test.csv' line 1: could not parse"));

        let negative_first = read("-1,2,3\n4,5,6\n").unwrap_err().to_string();
        assert!(negative_first.starts_with("'test.csv' line 1: could not parse"));

        let short = read("pile1,pile2,pile3\n1,2\n").unwrap_err().to_string();
        assert_eq!(
            short,
            "'test.csv' line 2: too few columns, expected 3, found 2"
        );

        let long = read("1,2\n1,2,3\n").unwrap_err().to_string();
        assert_eq!(
            long,
            "'test.csv' line 2: too many columns, expected 2, found 3"
        );
    }

    #[test]
    fn writes_positions() {
        let mut out = Vec::new();
        write_positions(
            &mut out,
            &[Position::from([1, 2, 3]), Position::from([4, 4, 0])],
            3,
            true,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "pile1,pile2,pile3\n1,2,3\n4,4,0\n"
        );

        let mut out = Vec::new();
        write_positions(&mut out, &[Position::from([1, 4])], 2, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,4\n");
    }

    #[test]
    fn writes_partition() {
        let partition = Partition::of_two(
            [Position::from([1, 2]), Position::from([3, 4])],
            [Position::from([3, 4])],
        )
        .unwrap();
        let mut out = Vec::new();
        write_partition(&mut out, &partition, 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "bucket,pile1,pile2\nonly_a,1,2\na_and_b_not_c,3,4\n"
        );
    }

    #[test]
    fn empty_partition_writes_nothing() {
        let partition = Partition::of_two([], []).unwrap();
        let mut out = Vec::new();
        write_partition(&mut out, &partition, 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn round_trips_through_reader() {
        let positions = vec![Position::from([7, 1]), Position::from([2, 9])];
        let mut out = Vec::new();
        write_positions(&mut out, &positions, 2, true).unwrap();
        assert_eq!(read_positions(out.as_slice(), "mem").unwrap(), positions);
    }
}
