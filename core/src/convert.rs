//! Conversion of genotype-quality tables to PLINK text datasets.
//!
//! Each row of a [`table`](crate::table) becomes one `.map` record, and each call becomes one
//! genotype in the `.ped` record of its sample. Calls that are absent, fail the [`Filter`], or
//! cannot be represented as two alleles are written as the missing genotype `0 0`.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    plink::{map, ped},
    table::{Header, Row},
    Filter, Genotype,
};

pub mod genotype;
pub use genotype::Missing;

/// A converter collecting the rows of a genotype-quality table for output in PLINK format.
#[derive(Clone, Debug)]
pub struct Converter {
    filter: Filter,
    samples: Vec<String>,
    records: Vec<map::Record>,
    genotypes: Vec<Vec<Genotype>>,
    current_missing: Vec<(usize, Missing)>,
}

impl Converter {
    /// Creates a new converter for the samples in the header.
    pub fn new(filter: Filter, header: &Header) -> Self {
        let samples = header.samples().to_vec();
        let genotypes = vec![Vec::new(); samples.len()];

        Self {
            filter,
            samples,
            records: Vec::new(),
            genotypes,
            current_missing: Vec::new(),
        }
    }

    /// Adds a row.
    ///
    /// The row must have one call per sample, as guaranteed by [`table::Reader`](crate::table::Reader).
    pub fn add_row(&mut self, row: &Row) {
        self.current_missing.clear();

        self.records.push(row.map_record());

        for (i, (call, genotypes)) in row.calls.iter().zip(self.genotypes.iter_mut()).enumerate() {
            let genotype = genotype::to_genotype(call, &self.filter).unwrap_or_else(|missing| {
                self.current_missing.push((i, missing));
                Genotype::missing()
            });

            genotypes.push(genotype);
        }
    }

    /// Returns the `.map` record of the most recently added row.
    pub fn current_record(&self) -> Option<&map::Record> {
        self.records.last()
    }

    /// Returns an iterator over the samples written as missing in the most recently added row,
    /// with the reason.
    pub fn current_missing(&self) -> impl Iterator<Item = (&str, Missing)> {
        self.current_missing
            .iter()
            .map(|&(i, missing)| (self.samples[i].as_str(), missing))
    }

    /// Returns the samples, in the order of the table.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Returns the number of sites added.
    pub fn n_sites(&self) -> usize {
        self.records.len()
    }

    /// Writes all sites in `.map` format.
    pub fn write_map<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        self.records
            .iter()
            .try_for_each(|record| record.write(writer))
    }

    /// Writes all samples in `.ped` format.
    pub fn write_ped<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        self.samples
            .iter()
            .zip(self.genotypes.iter())
            .try_for_each(|(sample, genotypes)| ped::write_record(writer, sample, genotypes))
    }

    /// Writes the `.map` and `.ped` files to the paths given by the output names.
    pub fn write_files(&self, names: &OutputNames) -> io::Result<()> {
        let mut map_writer = create(&names.map())?;
        self.write_map(&mut map_writer)?;
        map_writer.flush()?;

        let mut ped_writer = create(&names.ped())?;
        self.write_ped(&mut ped_writer)?;
        ped_writer.flush()
    }
}

fn create(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))
}

/// Output paths of a converted dataset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputNames {
    prefix: PathBuf,
}

impl OutputNames {
    /// The input suffix removed when deriving output names from the input path.
    pub const INPUT_SUFFIX: &'static str = ".values";

    /// Creates output names from a prefix, to which the `.map` and `.ped` extensions are added.
    pub fn from_prefix<P>(prefix: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Creates output names from the input path and the filter.
    ///
    /// Any trailing [`INPUT_SUFFIX`](Self::INPUT_SUFFIX) is removed from the input, and the filter
    /// parameters are appended, so that `calls.gt.values` with a minimum depth of 10 gives the
    /// prefix `calls.gt_minGQNone-minRGQNone-minDP10`.
    pub fn from_input(input: &Path, filter: &Filter) -> Self {
        let input = input.to_string_lossy();
        let base = input.strip_suffix(Self::INPUT_SUFFIX).unwrap_or(&input);

        Self::from_prefix(format!("{base}_{filter}"))
    }

    /// Returns the prefix.
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Returns the `.map` path.
    pub fn map(&self) -> PathBuf {
        crate::plink::dataset::paths(&self.prefix).0
    }

    /// Returns the `.ped` path.
    pub fn ped(&self) -> PathBuf {
        crate::plink::dataset::paths(&self.prefix).1
    }
}
