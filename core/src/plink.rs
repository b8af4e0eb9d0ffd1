//! PLINK text formats.
//!
//! A PLINK text dataset consists of a `.map` file with one SNP per line, and a `.ped` file with
//! one sample per line. The genotypes on each `.ped` line are in the same order as the SNPs in the
//! `.map` file.

pub mod coordinate;
pub use coordinate::{Coordinate, CoordinateIndex};

pub mod dataset;
pub use dataset::Dataset;

pub mod genotype;
pub use genotype::{Allele, Comparison, Genotype};

pub mod map;

pub mod ped;
pub use ped::GenotypeMap;
