//! Per-sample genotype concordance between two PLINK datasets.
//!
//! SNPs are matched between datasets by [`Coordinate`](crate::Coordinate), and genotypes at
//! matched SNPs are compared using [`compare`]. The outcome for each sample is collected in a
//! [`Summary`].

use std::fmt;

use crate::{plink::genotype::compare, Dataset, Genotype};

pub mod summary;
pub use summary::{Rate, Summary};

/// A calculator of per-sample concordance of a dataset against a second dataset.
#[derive(Clone, Copy, Debug)]
pub struct Calculator<'a> {
    first: &'a Dataset,
    second: &'a Dataset,
    strict: bool,
}

impl<'a> Calculator<'a> {
    /// Creates a new calculator comparing the samples of `first` against `second`.
    pub fn new(first: &'a Dataset, second: &'a Dataset) -> Self {
        Self {
            first,
            second,
            strict: false,
        }
    }

    /// Sets whether samples missing from the second dataset are an error.
    ///
    /// By default, a sample missing from the second dataset is summarized with every matched SNP
    /// counted as not found, and the summary is marked accordingly. In strict mode, an error is
    /// returned instead.
    pub fn set_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Summarizes the concordance of a sample with the given genotypes in the first dataset.
    ///
    /// The genotypes must be in the order of the coordinates of the first dataset.
    pub fn summarize(
        &self,
        sample: &str,
        genotypes: &[Genotype],
    ) -> Result<Summary, MissingSampleError> {
        let mut summary = Summary::new(sample);

        let others = self.second.genotypes().get(sample);
        if others.is_none() {
            if self.strict {
                return Err(MissingSampleError(sample.to_string()));
            }

            summary.set_missing_sample();
        }

        for (coordinate, genotype) in self.first.coordinates().iter().zip(genotypes) {
            if coordinate.is_sentinel() {
                continue;
            }

            let other = self
                .second
                .index_of(coordinate)
                .and_then(|index| others.and_then(|others| others.get(index)));

            match other {
                Some(other) => summary.add(compare(genotype, other)),
                None => summary.add_not_found(),
            }
        }

        Ok(summary)
    }

    /// Returns an iterator over summaries for each sample in the first dataset, in the order of
    /// its `.ped` file.
    pub fn summaries(&self) -> impl Iterator<Item = Result<Summary, MissingSampleError>> + '_ {
        self.first
            .genotypes()
            .iter()
            .map(|(sample, genotypes)| self.summarize(sample, genotypes))
    }
}

/// An error associated with a sample being absent from the second dataset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MissingSampleError(String);

impl MissingSampleError {
    /// Returns the name of the missing sample.
    pub fn sample(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MissingSampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample '{}' not found in second dataset", self.0)
    }
}

impl std::error::Error for MissingSampleError {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{plink::GenotypeMap, Coordinate};

    fn dataset(keys: &[&str], rows: &[(&str, &[(&str, &str)])]) -> Dataset {
        let coordinates = keys
            .iter()
            .map(|key| {
                let (chromosome, position) = key.split_once('.').unwrap();
                Coordinate::new(chromosome, position)
            })
            .collect();
        let genotypes = rows
            .iter()
            .map(|(sample, genotypes)| {
                (
                    sample.to_string(),
                    genotypes.iter().map(|&(a, b)| Genotype::new(a, b)).collect(),
                )
            })
            .collect::<GenotypeMap>();

        Dataset::new(coordinates, genotypes).unwrap()
    }

    #[test]
    fn test_summarize() {
        let first = dataset(
            &["1.100", "1.200", "1.300", "2.50"],
            &[("a", &[("A", "G"), ("C", "C"), ("T", "T"), ("0", "G")])],
        );
        let second = dataset(
            &["2.50", "1.300", "1.200", "1.100"],
            &[("a", &[("G", "G"), ("T", "C"), ("C", "C"), ("G", "A")])],
        );

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.concordant(), 2);
        assert_eq!(summary.discordant(), 1);
        assert_eq!(summary.ignored(), 1);
        assert_eq!(summary.not_found(), 0);
        assert_eq!(summary.total(), 4);
        assert_approx_eq!(summary.rate().value(), Some(2. / 3.));
    }

    #[test]
    fn test_sentinel_skipped() {
        let first = dataset(
            &["1.100", "1.200", "0.0", "2.50"],
            &[("a", &[("A", "A"), ("C", "C"), ("G", "G"), ("T", "T")])],
        );
        let second = dataset(
            &["1.100", "1.200", "0.0", "2.50"],
            &[("a", &[("A", "A"), ("C", "C"), ("T", "T"), ("T", "T")])],
        );

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.concordant(), 3);
        assert_eq!(summary.discordant(), 0);
        assert_eq!(summary.ignored(), 0);
        assert_eq!(summary.not_found(), 0);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_sentinel_skipped_when_absent_from_second() {
        let first = dataset(&["0.0", "1.100"], &[("a", &[("A", "A"), ("A", "A")])]);
        let second = dataset(&["1.100"], &[("a", &[("A", "A")])]);

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.not_found(), 0);
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_not_found() {
        let first = dataset(
            &["1.100", "3.999"],
            &[("a", &[("A", "G"), ("C", "T")])],
        );
        let second = dataset(&["1.100"], &[("a", &[("A", "G")])]);

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.not_found(), 1);
        assert_eq!(summary.concordant(), 1);
        assert_eq!(summary.discordant(), 0);
        assert_eq!(summary.ignored(), 0);
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_first_match_only() {
        let first = dataset(&["1.100"], &[("a", &[("A", "A")])]);
        let second = dataset(
            &["1.100", "1.100"],
            &[("a", &[("G", "G"), ("A", "A")])],
        );

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.discordant(), 1);
        assert_eq!(summary.concordant(), 0);
    }

    #[test]
    fn test_undefined_rate() {
        let first = dataset(
            &["1.100", "1.200"],
            &[("a", &[("0", "0"), ("A", "A")])],
        );
        let second = dataset(&["1.100"], &[("a", &[("A", "A")])]);

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.ignored(), 1);
        assert_eq!(summary.not_found(), 1);
        assert_eq!(summary.rate(), Rate::undefined());
    }

    #[test]
    fn test_missing_sample_lenient() {
        let first = dataset(
            &["1.100", "1.200", "0.0"],
            &[("a", &[("A", "A"), ("C", "C"), ("0", "0")])],
        );
        let second = dataset(&["1.100", "1.200"], &[("b", &[("A", "A"), ("C", "C")])]);

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert!(summary.is_missing_sample());
        assert_eq!(summary.not_found(), 2);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.rate(), Rate::undefined());
    }

    #[test]
    fn test_missing_sample_strict() {
        let first = dataset(&["1.100"], &[("a", &[("A", "A")])]);
        let second = dataset(&["1.100"], &[("b", &[("A", "A")])]);

        let result = Calculator::new(&first, &second)
            .set_strict(true)
            .summarize("a", first.genotypes().get("a").unwrap());

        assert_eq!(result, Err(MissingSampleError(String::from("a"))));
    }

    #[test]
    fn test_summaries_in_file_order() {
        let first = dataset(
            &["1.100"],
            &[("c", &[("A", "A")]), ("a", &[("A", "A")]), ("b", &[("A", "A")])],
        );
        let second = dataset(
            &["1.100"],
            &[("a", &[("A", "A")]), ("b", &[("A", "A")]), ("c", &[("A", "A")])],
        );

        let samples = Calculator::new(&first, &second)
            .summaries()
            .map(|summary| summary.unwrap().sample().to_string())
            .collect::<Vec<_>>();

        assert_eq!(samples, ["c", "a", "b"]);
    }

    #[test]
    fn test_self_concordance() {
        let first = dataset(
            &["1.100", "1.200", "0.0", "2.50"],
            &[
                ("a", &[("A", "G"), ("0", "0"), ("C", "C"), ("T", "T")]),
                ("b", &[("G", "G"), ("T", "C"), ("0", "0"), ("A", "C")]),
            ],
        );

        for summary in Calculator::new(&first, &first).summaries() {
            let summary = summary.unwrap();

            assert_eq!(summary.discordant(), 0);
            assert_eq!(summary.not_found(), 0);
            assert_eq!(summary.rate().value(), Some(1.0));
        }
    }

    #[test]
    fn test_chromosome_prefix_not_normalized() {
        let first = dataset(&["chr1.100"], &[("a", &[("A", "A")])]);
        let second = dataset(&["1.100"], &[("a", &[("A", "A")])]);

        let summary = Calculator::new(&first, &second)
            .summarize("a", first.genotypes().get("a").unwrap())
            .unwrap();

        assert_eq!(summary.not_found(), 1);
        assert_eq!(
            first.coordinates()[0],
            Coordinate::new("chr1", "100"),
        );
    }
}
