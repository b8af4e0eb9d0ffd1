//! Reading and writing the PLINK `.map` format.
//!
//! Each line of a `.map` file describes a single SNP by four whitespace-separated columns:
//! chromosome, SNP label, genetic distance, and physical position.

use std::{
    fmt,
    io::{self, BufRead},
};

use super::Coordinate;

/// The number of columns in a `.map` record.
pub const COLUMNS: usize = 4;

/// A single `.map` record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Chromosome.
    pub chromosome: String,
    /// SNP label.
    pub label: String,
    /// Genetic distance.
    pub distance: String,
    /// Physical position.
    pub position: String,
}

impl Record {
    /// Returns the coordinate of the record.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.chromosome.as_str(), self.position.as_str())
    }

    fn parse(line: &str) -> Result<Self, usize> {
        let fields = line.split_whitespace().collect::<Vec<_>>();

        match fields[..] {
            [chromosome, label, distance, position] => Ok(Self {
                chromosome: chromosome.to_string(),
                label: label.to_string(),
                distance: distance.to_string(),
                position: position.to_string(),
            }),
            _ => Err(fields.len()),
        }
    }

    /// Writes the record as a single tab-separated line.
    pub fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.chromosome, self.label, self.distance, self.position
        )
    }
}

/// Reads all records in `.map` format from a reader.
///
/// Blank lines are skipped. Any other line without exactly four columns is an error.
pub fn read_records<R>(reader: &mut R) -> io::Result<Vec<Record>>
where
    R: BufRead,
{
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let record = Record::parse(&line).map_err(|found| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                ParseMapError { line: i + 1, found },
            )
        })?;

        records.push(record);
    }

    Ok(records)
}

/// Reads the coordinates of all records in `.map` format from a reader.
///
/// The coordinates are in the same order as the records, and duplicates are kept.
pub fn read_coordinates<R>(reader: &mut R) -> io::Result<Vec<Coordinate>>
where
    R: BufRead,
{
    read_records(reader).map(|records| records.iter().map(Record::coordinate).collect())
}

/// An error associated with parsing a `.map` record.
#[derive(Debug)]
pub struct ParseMapError {
    line: usize,
    found: usize,
}

impl fmt::Display for ParseMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {COLUMNS} columns in map record on line {}, found {}",
            self.line, self.found
        )
    }
}

impl std::error::Error for ParseMapError {}
