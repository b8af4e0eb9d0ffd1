//! Quality filtering of genotype calls.

use std::fmt;

use crate::table::Call;

/// Genotype-quality thresholds, which must be given together.
///
/// GQ is only reported for non-reference calls, and RGQ only for reference calls, so a call passes
/// if it meets either threshold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QualityThreshold {
    /// Minimum genotype quality.
    pub min_gq: u32,
    /// Minimum reference genotype quality.
    pub min_rgq: u32,
}

/// A filter deciding which genotype calls to keep.
///
/// | GQ/RGQ set | DP set | keep call if                                |
/// |------------|--------|---------------------------------------------|
/// | no         | yes    | `DP ≥ minDP`                                |
/// | yes        | no     | `GQ ≥ minGQ` or `RGQ ≥ minRGQ`              |
/// | yes        | yes    | (`GQ ≥ minGQ` or `RGQ ≥ minRGQ`) and `DP ≥ minDP` |
/// | no         | no     | never                                       |
///
/// An absent value never meets its threshold.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    quality: Option<QualityThreshold>,
    min_dp: Option<u32>,
}

impl Filter {
    /// Creates a new filter from optional thresholds.
    ///
    /// Returns an error if exactly one of `min_gq` and `min_rgq` is given.
    pub fn new(
        min_gq: Option<u32>,
        min_rgq: Option<u32>,
        min_dp: Option<u32>,
    ) -> Result<Self, ThresholdError> {
        let quality = match (min_gq, min_rgq) {
            (Some(min_gq), Some(min_rgq)) => Some(QualityThreshold { min_gq, min_rgq }),
            (None, None) => None,
            (Some(_), None) => return Err(ThresholdError::MissingRgq),
            (None, Some(_)) => return Err(ThresholdError::MissingGq),
        };

        Ok(Self { quality, min_dp })
    }

    /// Returns the quality thresholds, if set.
    pub fn quality(&self) -> Option<QualityThreshold> {
        self.quality
    }

    /// Returns the minimum depth, if set.
    pub fn min_dp(&self) -> Option<u32> {
        self.min_dp
    }

    /// Returns `true` if no thresholds are set, in which case no call is ever kept.
    pub fn drops_all(&self) -> bool {
        self.quality.is_none() && self.min_dp.is_none()
    }

    /// Returns `true` if the call passes the filter.
    pub fn keeps(&self, call: &Call) -> bool {
        let passes_quality = |threshold: QualityThreshold| {
            at_least(call.gq, threshold.min_gq) || at_least(call.rgq, threshold.min_rgq)
        };

        match (self.quality, self.min_dp) {
            (None, Some(min_dp)) => at_least(call.dp, min_dp),
            (Some(quality), None) => passes_quality(quality),
            (Some(quality), Some(min_dp)) => passes_quality(quality) && at_least(call.dp, min_dp),
            (None, None) => false,
        }
    }
}

fn at_least(value: Option<u32>, min: u32) -> bool {
    value.is_some_and(|value| value >= min)
}

/// Formats the filter as a parameter tag, such as `minGQ20-minRGQ10-minDPNone`.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_value = |value: Option<u32>| {
            value
                .map(|value| value.to_string())
                .unwrap_or_else(|| String::from("None"))
        };

        write!(
            f,
            "minGQ{}-minRGQ{}-minDP{}",
            fmt_value(self.quality.map(|q| q.min_gq)),
            fmt_value(self.quality.map(|q| q.min_rgq)),
            fmt_value(self.min_dp)
        )
    }
}

/// An error associated with inconsistent filter thresholds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThresholdError {
    /// Minimum GQ given without minimum RGQ.
    MissingRgq,
    /// Minimum RGQ given without minimum GQ.
    MissingGq,
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let given = match self {
            ThresholdError::MissingRgq => "GQ",
            ThresholdError::MissingGq => "RGQ",
        };

        write!(
            f,
            "minimum GQ and minimum RGQ must be given together (only minimum {given} given)"
        )
    }
}

impl std::error::Error for ThresholdError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(gq: Option<u32>, rgq: Option<u32>, dp: Option<u32>) -> Call {
        Call::new(Some("A/G"), gq, rgq, dp)
    }

    #[test]
    fn test_new_requires_gq_and_rgq_together() {
        assert_eq!(
            Filter::new(Some(20), None, None),
            Err(ThresholdError::MissingRgq)
        );
        assert_eq!(
            Filter::new(None, Some(10), Some(5)),
            Err(ThresholdError::MissingGq)
        );
        assert!(Filter::new(Some(20), Some(10), None).is_ok());
        assert!(Filter::new(None, None, Some(5)).is_ok());
    }

    #[test]
    fn test_depth_only() {
        let filter = Filter::new(None, None, Some(10)).unwrap();

        assert!(filter.keeps(&call(None, None, Some(10))));
        assert!(filter.keeps(&call(Some(0), None, Some(30))));
        assert!(!filter.keeps(&call(Some(99), Some(99), Some(9))));
        assert!(!filter.keeps(&call(Some(99), Some(99), None)));
    }

    #[test]
    fn test_quality_only() {
        let filter = Filter::new(Some(20), Some(10), None).unwrap();

        assert!(filter.keeps(&call(Some(25), Some(5), Some(3))));
        assert!(filter.keeps(&call(None, Some(10), None)));
        assert!(!filter.keeps(&call(Some(19), Some(9), Some(100))));
        assert!(!filter.keeps(&call(None, None, Some(100))));
    }

    #[test]
    fn test_quality_and_depth() {
        let filter = Filter::new(Some(20), Some(10), Some(8)).unwrap();

        assert!(filter.keeps(&call(Some(20), None, Some(8))));
        assert!(filter.keeps(&call(None, Some(15), Some(50))));
        assert!(!filter.keeps(&call(Some(25), Some(5), Some(3))));
        assert!(!filter.keeps(&call(Some(5), Some(5), Some(50))));
        assert!(!filter.keeps(&call(Some(25), None, None)));
    }

    #[test]
    fn test_no_thresholds_drops_all() {
        let filter = Filter::new(None, None, None).unwrap();

        assert!(filter.drops_all());
        assert!(!filter.keeps(&call(Some(99), Some(99), Some(99))));
    }

    #[test]
    fn test_zero_threshold_is_set() {
        let filter = Filter::new(None, None, Some(0)).unwrap();

        assert!(!filter.drops_all());
        assert!(filter.keeps(&call(None, None, Some(0))));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Filter::new(Some(20), Some(10), None).unwrap().to_string(),
            "minGQ20-minRGQ10-minDPNone"
        );
        assert_eq!(
            Filter::new(None, None, Some(5)).unwrap().to_string(),
            "minGQNone-minRGQNone-minDP5"
        );
        assert_eq!(
            Filter::default().to_string(),
            "minGQNone-minRGQNone-minDPNone"
        );
    }

    #[test]
    fn test_display_error() {
        assert_eq!(
            ThresholdError::MissingRgq.to_string(),
            "minimum GQ and minimum RGQ must be given together (only minimum GQ given)"
        );
    }
}
