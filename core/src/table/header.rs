//! Genotype-quality table header.

use super::{Metric, ParseTableErrorKind, SITE_COLUMNS};

/// A genotype-quality table header, naming the samples of the table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    samples: Vec<String>,
}

impl Header {
    /// The first column name of a header line.
    pub const START: &'static str = "CHROM";

    /// Creates a new header from sample names.
    pub fn new(samples: Vec<String>) -> Self {
        Self { samples }
    }

    /// Returns the sample names, in the order of the table.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Returns the number of columns in each line of the table.
    pub fn columns(&self) -> usize {
        SITE_COLUMNS + Metric::N * self.samples.len()
    }

    pub(super) fn is_header(line: &str) -> bool {
        line.split_whitespace().next() == Some(Self::START)
    }

    pub(super) fn parse(line: &str) -> Result<Self, ParseTableErrorKind> {
        if !Self::is_header(line) {
            return Err(ParseTableErrorKind::MissingHeader);
        }

        let columns = line.split_whitespace().collect::<Vec<_>>();

        if columns.len() < SITE_COLUMNS || (columns.len() - SITE_COLUMNS) % Metric::N != 0 {
            return Err(ParseTableErrorKind::InvalidHeader(columns.len()));
        }

        let samples = columns[SITE_COLUMNS..]
            .iter()
            .step_by(Metric::N)
            .map(|column| sample_name(column).to_string())
            .collect();

        Ok(Self::new(samples))
    }
}

/// Returns the sample name from the genotype column name of a sample.
///
/// Any path-like prefix is removed, and the name is the part before the first `.`, so that
/// `calls/sample1.variant.GT` gives `sample1`.
pub fn sample_name(column: &str) -> &str {
    let file_name = column.rsplit('/').next().unwrap_or(column);

    file_name.split('.').next().unwrap_or(file_name)
}
