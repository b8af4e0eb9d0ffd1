//! Quality-annotated genotype calls.

use std::fmt;

/// A per-sample genotype-quality metric.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Metric {
    /// Genotype call.
    Gt = 0,
    /// Genotype quality.
    Gq = 1,
    /// Reference genotype quality.
    Rgq = 2,
    /// Depth of coverage.
    Dp = 3,
}

impl Metric {
    /// The number of metrics per sample.
    pub const N: usize = 4;

    /// All metrics, in the order of their columns.
    pub const VARIANTS: [Metric; Self::N] = [Self::Gt, Self::Gq, Self::Rgq, Self::Dp];

    /// Returns the name of the metric, as used in column names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gt => "GT",
            Self::Gq => "GQ",
            Self::Rgq => "RGQ",
            Self::Dp => "DP",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokens denoting an absent value.
pub const MISSING: [&str; 2] = ["NA", "./."];

fn is_missing(s: &str) -> bool {
    MISSING.contains(&s)
}

/// A genotype call for a single sample at a single site, with its quality annotations.
///
/// Each value may be absent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Call {
    /// Genotype call, such as `A/G`.
    pub gt: Option<String>,
    /// Genotype quality.
    pub gq: Option<u32>,
    /// Reference genotype quality.
    pub rgq: Option<u32>,
    /// Depth of coverage.
    pub dp: Option<u32>,
}

impl Call {
    /// Creates a new call.
    pub fn new(gt: Option<&str>, gq: Option<u32>, rgq: Option<u32>, dp: Option<u32>) -> Self {
        Self {
            gt: gt.map(String::from),
            gq,
            rgq,
            dp,
        }
    }

    /// Parses a call from its column values.
    pub fn parse(gt: &str, gq: &str, rgq: &str, dp: &str) -> Result<Self, ParseCallError> {
        Ok(Self {
            gt: (!is_missing(gt)).then(|| gt.to_string()),
            gq: parse_value(Metric::Gq, gq)?,
            rgq: parse_value(Metric::Rgq, rgq)?,
            dp: parse_value(Metric::Dp, dp)?,
        })
    }
}

fn parse_value(metric: Metric, s: &str) -> Result<Option<u32>, ParseCallError> {
    if is_missing(s) {
        Ok(None)
    } else {
        s.parse().map(Some).map_err(|_| ParseCallError {
            metric,
            value: s.to_string(),
        })
    }
}

/// An error associated with parsing a call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseCallError {
    metric: Metric,
    value: String,
}

impl fmt::Display for ParseCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse '{}' as {} value",
            self.value, self.metric
        )
    }
}

impl std::error::Error for ParseCallError {}
