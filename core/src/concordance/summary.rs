//! Per-sample concordance summaries.

use std::fmt;

use crate::Comparison;

/// A summary of the genotype comparisons for a single sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    sample: String,
    counts: [usize; Comparison::N],
    not_found: usize,
    missing_sample: bool,
}

impl Summary {
    /// Creates a new, empty summary for a sample.
    pub fn new<S>(sample: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            sample: sample.into(),
            counts: [0; Comparison::N],
            not_found: 0,
            missing_sample: false,
        }
    }

    /// Returns the sample name.
    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// Adds a comparison outcome to the summary.
    pub fn add(&mut self, comparison: Comparison) {
        self.counts[comparison as u8 as usize] += 1;
    }

    /// Adds a SNP that could not be found in the second dataset.
    pub fn add_not_found(&mut self) {
        self.not_found += 1;
    }

    /// Returns the number of comparisons with the given outcome.
    pub fn count(&self, comparison: Comparison) -> usize {
        self.counts[comparison as u8 as usize]
    }

    /// Returns the number of concordant genotypes.
    pub fn concordant(&self) -> usize {
        self.count(Comparison::Concordant)
    }

    /// Returns the number of discordant genotypes.
    pub fn discordant(&self) -> usize {
        self.count(Comparison::Discordant)
    }

    /// Returns the number of ignored comparisons.
    pub fn ignored(&self) -> usize {
        self.count(Comparison::Ignored)
    }

    /// Returns the number of SNPs not found in the second dataset.
    pub fn not_found(&self) -> usize {
        self.not_found
    }

    /// Returns the total number of compared positions.
    ///
    /// This includes ignored comparisons, but not SNPs that were not found.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns the concordance rate.
    pub fn rate(&self) -> Rate {
        Rate::new(self.concordant(), self.discordant())
    }

    /// Returns `true` if the sample was absent from the second dataset.
    pub fn is_missing_sample(&self) -> bool {
        self.missing_sample
    }

    pub(crate) fn set_missing_sample(&mut self) {
        self.missing_sample = true;
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sample: {}, total # positions: {}, concordance rate: ",
            self.sample,
            self.total()
        )?;

        match f.precision() {
            Some(precision) => write!(f, "{:.precision$}", self.rate())?,
            None => write!(f, "{}", self.rate())?,
        }

        write!(
            f,
            ", # positions ignored: {}, # SNPs not found in 2nd dataset: {}",
            self.ignored(),
            self.not_found
        )
    }
}

/// A concordance rate, defined as the fraction of concordant genotypes among all concordant and
/// discordant genotypes.
///
/// The rate is undefined if no genotypes were concordant or discordant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rate(Option<f64>);

impl Rate {
    /// Creates a new rate from concordant and discordant counts.
    pub fn new(concordant: usize, discordant: usize) -> Self {
        match concordant + discordant {
            0 => Self::undefined(),
            n => Self(Some(concordant as f64 / n as f64)),
        }
    }

    /// Creates an undefined rate.
    pub fn undefined() -> Self {
        Self(None)
    }

    /// Returns the rate, or `None` if undefined.
    pub fn value(&self) -> Option<f64> {
        self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0, f.precision()) {
            (None, _) => f.write_str("undefined"),
            (Some(rate), Some(precision)) => write!(f, "{rate:.precision$}"),
            (Some(rate), None) => {
                // Shortest round-trip form without exponent, with at least one fractional digit
                let s = rate.to_string();

                if s.contains('.') {
                    f.write_str(&s)
                } else {
                    write!(f, "{s}.0")
                }
            }
        }
    }
}
