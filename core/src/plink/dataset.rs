//! PLINK text datasets.

use std::{
    ffi::OsString,
    fmt, io,
    path::{Path, PathBuf},
};

use crate::input;

use super::{map, ped, Coordinate, CoordinateIndex, Genotype, GenotypeMap};

/// A PLINK text dataset, consisting of the coordinates from a `.map` file and the genotypes from
/// the matching `.ped` file.
#[derive(Clone, Debug)]
pub struct Dataset {
    coordinates: Vec<Coordinate>,
    index: CoordinateIndex,
    genotypes: GenotypeMap,
}

impl Dataset {
    /// Creates a new dataset.
    ///
    /// Returns an error if the genotypes of any sample do not match the number of coordinates.
    pub fn new(coordinates: Vec<Coordinate>, genotypes: GenotypeMap) -> Result<Self, DatasetError> {
        if let Some((sample, found)) = genotypes
            .iter()
            .map(|(sample, genotypes)| (sample, genotypes.len()))
            .find(|&(_, found)| found != coordinates.len())
        {
            return Err(DatasetError {
                sample: sample.to_string(),
                expected: coordinates.len(),
                found,
            });
        }

        let index = coordinates.iter().collect();

        Ok(Self {
            coordinates,
            index,
            genotypes,
        })
    }

    /// Reads a dataset from `<basename>.map` and `<basename>.ped`.
    ///
    /// Either file may be gzip-compressed.
    pub fn from_basename<P>(basename: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let (map_path, ped_path) = paths(basename.as_ref());

        let coordinates = input::open(&map_path)
            .and_then(|mut reader| map::read_coordinates(&mut reader))
            .map_err(|e| with_path(e, &map_path))?;
        let genotypes = input::open(&ped_path)
            .and_then(|mut reader| ped::read_genotypes(&mut reader))
            .map_err(|e| with_path(e, &ped_path))?;

        Self::new(coordinates, genotypes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Returns the coordinates of the dataset, in the order of the `.map` file.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Returns the index of the first occurrence of a coordinate in the dataset, if any.
    pub fn index_of(&self, coordinate: &Coordinate) -> Option<usize> {
        self.index.get(coordinate)
    }

    /// Returns the genotypes of the dataset.
    pub fn genotypes(&self) -> &GenotypeMap {
        &self.genotypes
    }

    /// Returns the genotype of a sample at the given coordinate index, if the sample is present.
    pub fn genotype(&self, sample: &str, index: usize) -> Option<&Genotype> {
        self.genotypes
            .get(sample)
            .and_then(|genotypes| genotypes.get(index))
    }

    /// Returns the number of samples.
    pub fn n_samples(&self) -> usize {
        self.genotypes.len()
    }

    /// Returns the number of SNPs.
    pub fn n_snps(&self) -> usize {
        self.coordinates.len()
    }
}

/// Returns the `.map` and `.ped` paths for a basename.
///
/// The extensions are appended to the basename, not substituted, so that basenames containing
/// dots are kept intact.
pub fn paths(basename: &Path) -> (PathBuf, PathBuf) {
    let with_suffix = |suffix: &str| {
        let mut path = OsString::from(basename.as_os_str());
        path.push(suffix);
        PathBuf::from(path)
    };

    (with_suffix(".map"), with_suffix(".ped"))
}

fn with_path(error: io::Error, path: &Path) -> io::Error {
    io::Error::new(error.kind(), format!("{}: {error}", path.display()))
}

/// An error associated with a mismatch between the number of coordinates and genotypes.
#[derive(Debug)]
pub struct DatasetError {
    sample: String,
    expected: usize,
    found: usize,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sample '{}' has {} genotypes, but map has {} SNPs",
            self.sample, self.found, self.expected
        )
    }
}

impl std::error::Error for DatasetError {}
