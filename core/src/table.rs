//! Genotype-quality tables.
//!
//! A genotype-quality table is a whitespace-delimited text table with a header line
//!
//! ```text
//! CHROM POS {sample1}.GT {sample1}.GQ {sample1}.RGQ {sample1}.DP {sample2}.GT ...
//! ```
//!
//! followed by one line per site. This is the format written by GATK `VariantsToTable` when asked
//! for the `GT`, `GQ`, `RGQ`, and `DP` genotype fields.
//!
//! The tokens `NA` and `./.` mark a value as absent in any column. Present `GQ`, `RGQ`, and `DP`
//! values must be non-negative integers, and anything else, including a negative integer, makes
//! the row malformed.

use std::{
    fmt,
    io::{self, BufRead},
};

pub mod call;
pub use call::{Call, Metric};

pub mod header;
pub use header::Header;

use crate::plink::map;

/// The number of leading site columns in each line.
pub const SITE_COLUMNS: usize = 2;

/// A single site in a genotype-quality table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// Chromosome, as written in the table.
    pub chromosome: String,
    /// Position.
    pub position: String,
    /// Calls for each sample, in the order of the header.
    pub calls: Vec<Call>,
}

impl Row {
    fn parse(line: &str, header: &Header) -> Result<Self, ParseTableErrorKind> {
        let fields = line.split_whitespace().collect::<Vec<_>>();

        let expected = header.columns();
        if fields.len() != expected {
            return Err(ParseTableErrorKind::ColumnCount {
                expected,
                found: fields.len(),
            });
        }

        let calls = fields[SITE_COLUMNS..]
            .chunks_exact(Metric::N)
            .map(|chunk| Call::parse(chunk[0], chunk[1], chunk[2], chunk[3]))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ParseTableErrorKind::Call)?;

        Ok(Self {
            chromosome: fields[0].to_string(),
            position: fields[1].to_string(),
            calls,
        })
    }

    /// Returns the `.map` record for the site.
    ///
    /// Any leading `chr` prefix is removed from the chromosome, while the SNP label is made from
    /// the chromosome as written in the table and the position.
    pub fn map_record(&self) -> map::Record {
        let chromosome = self
            .chromosome
            .trim_start_matches(|c: char| matches!(c, 'c' | 'h' | 'r'));

        map::Record {
            chromosome: chromosome.to_string(),
            label: format!("{}.{}", self.chromosome, self.position),
            distance: String::from("0"),
            position: self.position.clone(),
        }
    }
}

/// A genotype-quality table reader.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
    header: Header,
    line: usize,
    buf: String,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a new reader, reading the header from the inner reader.
    ///
    /// The header must be the first non-blank line.
    pub fn new(mut inner: R) -> io::Result<Self> {
        let mut buf = String::new();
        let mut line = 0;

        let header = loop {
            buf.clear();
            line += 1;

            if inner.read_line(&mut buf)? == 0 {
                return Err(invalid_data(line, ParseTableErrorKind::MissingHeader));
            }

            if buf.trim().is_empty() {
                continue;
            }

            break Header::parse(&buf).map_err(|kind| invalid_data(line, kind))?;
        };

        Ok(Self {
            inner,
            header,
            line,
            buf,
        })
    }

    /// Returns the header of the table.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Reads the next row of the table, returning `None` when the table is exhausted.
    ///
    /// Blank lines are skipped. A repeated header line, as found when tables are concatenated, is
    /// skipped if it names the same samples as the first header, and is an error otherwise.
    pub fn read_row(&mut self) -> io::Result<Option<Row>> {
        loop {
            self.buf.clear();
            self.line += 1;

            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }

            if self.buf.trim().is_empty() {
                continue;
            }

            if Header::is_header(&self.buf) {
                let header = Header::parse(&self.buf).map_err(|k| invalid_data(self.line, k))?;

                if header != self.header {
                    return Err(invalid_data(self.line, ParseTableErrorKind::HeaderMismatch));
                }

                continue;
            }

            return Row::parse(&self.buf, &self.header)
                .map(Some)
                .map_err(|kind| invalid_data(self.line, kind));
        }
    }
}

fn invalid_data(line: usize, kind: ParseTableErrorKind) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, ParseTableError { line, kind })
}

/// An error associated with parsing a genotype-quality table.
#[derive(Debug)]
pub struct ParseTableError {
    line: usize,
    kind: ParseTableErrorKind,
}

#[derive(Debug)]
enum ParseTableErrorKind {
    MissingHeader,
    InvalidHeader(usize),
    HeaderMismatch,
    ColumnCount { expected: usize, found: usize },
    Call(call::ParseCallError),
}

impl fmt::Display for ParseTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;

        match &self.kind {
            ParseTableErrorKind::MissingHeader => {
                write!(f, "expected header line starting with 'CHROM' on line {line}")
            }
            ParseTableErrorKind::InvalidHeader(found) => write!(
                f,
                "expected two site columns and four columns per sample in header on line {line}, \
                found {found} columns"
            ),
            ParseTableErrorKind::HeaderMismatch => {
                write!(f, "header on line {line} does not match the first header")
            }
            ParseTableErrorKind::ColumnCount { expected, found } => write!(
                f,
                "expected {expected} columns on line {line}, found {found}"
            ),
            ParseTableErrorKind::Call(e) => write!(f, "{e} on line {line}"),
        }
    }
}

impl std::error::Error for ParseTableError {}
