use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};

use clap::Parser;

use gtconcord_core::{concordance::Calculator, Dataset};

/// Calculate per-sample genotype concordance between two PLINK datasets.
///
/// SNPs are matched between datasets by their coordinate, given by the chromosome and position
/// columns of the .map file, rather than by the order of the files; SNP labels are ignored. One
/// line is printed for each sample in the first dataset.
#[derive(Debug, Parser)]
pub struct Concordance {
    /// First dataset.
    ///
    /// Basename of the PLINK text dataset, so that <BASENAME>.map and <BASENAME>.ped will be
    /// read. Either file may be gzip-compressed.
    #[arg(value_name = "BASENAME")]
    first: PathBuf,

    /// Second dataset.
    #[arg(value_name = "BASENAME")]
    second: PathBuf,

    /// Promote warnings to errors.
    ///
    /// By default, samples in the first dataset that are missing from the second dataset are
    /// reported with every SNP counted as not found, with a warning. Using this flag will cause
    /// an error instead.
    #[arg(long)]
    strict: bool,

    /// Output concordance rate precision.
    ///
    /// By default, rates are printed with as many digits as needed to represent them exactly.
    #[arg(short = 'p', long, value_name = "INT")]
    precision: Option<usize>,
}

impl Concordance {
    pub fn run(self) -> Result<(), Error> {
        let first = read_dataset(&self.first)?;
        let second = read_dataset(&self.second)?;

        let summaries = Calculator::new(&first, &second)
            .set_strict(self.strict)
            .summaries()
            .collect::<Result<Vec<_>, _>>()?;

        let mut writer = io::stdout().lock();

        for summary in summaries.iter() {
            if summary.is_missing_sample() {
                log::warn!(
                    "Sample '{}' not found in second dataset, counting all SNPs as not found.",
                    summary.sample()
                );
            }

            match self.precision {
                Some(precision) => writeln!(writer, "{summary:.precision$}")?,
                None => writeln!(writer, "{summary}")?,
            }
        }

        Ok(())
    }
}

fn read_dataset(basename: &Path) -> Result<Dataset, Error> {
    let dataset = Dataset::from_basename(basename).with_context(|| {
        format!(
            "Failed to read PLINK dataset from provided basename '{}'",
            basename.display()
        )
    })?;

    log::info!(
        "Read {} samples and {} SNPs from '{}'.",
        dataset.n_samples(),
        dataset.n_snps(),
        basename.display()
    );

    Ok(dataset)
}
