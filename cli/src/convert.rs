use std::path::PathBuf;

use anyhow::{Context, Error};

use clap::Parser;

use gtconcord_core::{convert::OutputNames, Filter};

mod runner;
use runner::Runner;

/// Convert GATK VariantsToTable output to a quality-filtered PLINK text dataset.
///
/// The input table must have been created with the GT, GQ, RGQ, and DP genotype fields, in that
/// order, for each sample. Calls failing the quality thresholds are written as missing.
#[derive(Debug, Parser)]
pub struct Convert {
    /// Input genotype-quality table.
    ///
    /// May be gzip-compressed.
    #[arg(value_name = "FILE")]
    genotypes: PathBuf,

    /// Minimum genotype quality.
    ///
    /// Calls with a GQ of at least this value pass the quality threshold. Must be given together
    /// with the minimum reference genotype quality, since a call passes if it meets either.
    #[arg(long, alias = "minGQ", requires = "min_rgq", value_name = "INT")]
    min_gq: Option<u32>,

    /// Minimum reference genotype quality.
    ///
    /// Calls with an RGQ of at least this value pass the quality threshold. Must be given
    /// together with the minimum genotype quality.
    #[arg(long, alias = "minRGQ", requires = "min_gq", value_name = "INT")]
    min_rgq: Option<u32>,

    /// Minimum read depth.
    ///
    /// Calls with a DP below this value are written as missing.
    #[arg(long, alias = "minDP", value_name = "INT")]
    min_dp: Option<u32>,

    /// Output prefix.
    ///
    /// By default, output is written next to the input, with any '.values' suffix replaced by the
    /// thresholds used, e.g. 'calls_minGQ20-minRGQ10-minDPNone'. The '.map' and '.ped' extensions
    /// are added to the prefix.
    #[arg(short = 'o', long, value_name = "PREFIX")]
    output: Option<PathBuf>,
}

impl Convert {
    pub fn run(self) -> Result<(), Error> {
        let filter = Filter::new(self.min_gq, self.min_rgq, self.min_dp)?;

        if filter.drops_all() {
            log::warn!(
                "No quality thresholds provided, all genotypes will be written as missing. \
                Use '--min-gq' and '--min-rgq', or '--min-dp' to set thresholds."
            );
        }

        let names = match &self.output {
            Some(prefix) => OutputNames::from_prefix(prefix),
            None => OutputNames::from_input(&self.genotypes, &filter),
        };

        let mut runner = Runner::new(&self.genotypes, filter)?;
        let converter = runner.run()?;

        converter.write_files(&names).with_context(|| {
            format!(
                "Failed to write PLINK dataset to '{}'",
                names.prefix().display()
            )
        })?;

        log::info!(
            "Wrote {} samples and {} SNPs to '{}' and '{}'.",
            converter.samples().len(),
            converter.n_sites(),
            names.map().display(),
            names.ped().display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind as ClapErrorKind;

    use crate::tests::{parse_subcmd, try_parse_subcmd};

    #[test]
    fn test_gq_requires_rgq() {
        let result = try_parse_subcmd::<Convert>("gtconcord convert --min-gq 20 calls.values");

        assert_eq!(
            result.unwrap_err().kind(),
            ClapErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_rgq_requires_gq() {
        let result =
            try_parse_subcmd::<Convert>("gtconcord convert --min-rgq 10 --min-dp 5 calls.values");

        assert_eq!(
            result.unwrap_err().kind(),
            ClapErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_parse_thresholds() {
        let args = parse_subcmd::<Convert>(
            "gtconcord convert --min-gq 20 --min-rgq 10 --min-dp 0 calls.values",
        );

        assert_eq!(args.genotypes, PathBuf::from("calls.values"));
        assert_eq!(args.min_gq, Some(20));
        assert_eq!(args.min_rgq, Some(10));
        assert_eq!(args.min_dp, Some(0));
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let args =
            parse_subcmd::<Convert>("gtconcord convert --minGQ 20 --minRGQ 10 --minDP 8 calls.values");

        assert_eq!(args.min_gq, Some(20));
        assert_eq!(args.min_rgq, Some(10));
        assert_eq!(args.min_dp, Some(8));
    }

    #[test]
    fn test_parse_output() {
        let args = parse_subcmd::<Convert>("gtconcord convert -o out/filtered calls.values");

        assert_eq!(args.output, Some(PathBuf::from("out/filtered")));
        assert_eq!(args.min_dp, None);
    }

    #[test]
    fn test_negative_threshold() {
        let result = try_parse_subcmd::<Convert>("gtconcord convert --min-dp -1 calls.values");

        assert!(result.is_err());
    }
}
