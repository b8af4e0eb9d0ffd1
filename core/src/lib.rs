#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Genotype concordance and quality-filtered conversion for PLINK text datasets.
//!
//! This serves as the core library implementation for the `gtconcord` CLI, but can also be used
//! as a free-standing library for working with PLINK `.map`/`.ped` files.
//!
//! # Overview
//!
//! A PLINK [`Dataset`] is a list of [`Coordinate`]s read from a `.map` file, together with the
//! [`Genotype`]s of each sample read from the matching `.ped` file. Two datasets can be compared
//! sample by sample using a [`concordance::Calculator`], which aligns SNPs by coordinate rather
//! than by name.
//!
//! Genotype-quality tables (as output by GATK `VariantsToTable`) can be read with a
//! [`table::Reader`] and turned into PLINK files by a [`convert::Converter`], keeping only calls
//! that pass a quality [`Filter`].
//!
//! # Example
//!
//! ```
//! use gtconcord_core::{plink::genotype::compare, Comparison, Genotype};
//!
//! let a = Genotype::new("A", "G");
//! let b = Genotype::new("G", "A");
//!
//! assert_eq!(compare(&a, &b), Comparison::Concordant);
//! assert_eq!(compare(&a, &Genotype::missing()), Comparison::Ignored);
//! ```

#[cfg(test)]
#[macro_use]
pub(crate) mod approx;

pub mod concordance;

pub mod convert;

pub mod filter;
pub use filter::Filter;

pub mod input;

pub mod plink;
pub use plink::{Comparison, Coordinate, Dataset, Genotype};

pub mod table;
