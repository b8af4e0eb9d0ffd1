//! Genotype calls to PLINK genotypes.

use crate::{plink::Allele, table::Call, Filter, Genotype};

/// The maximum length of a genotype call with two single-character alleles, such as `A/G`.
pub const MAX_CALL_LEN: usize = 3;

/// A reason for writing a call as a missing genotype.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Missing {
    /// No genotype was called.
    NoCall = 0,
    /// The call did not pass the filter.
    Filtered = 1,
    /// The call was not a simple call of two single-character alleles.
    Malformed = 2,
}

impl Missing {
    /// The number of reasons.
    pub const N: usize = 3;

    /// All reasons.
    pub const VARIANTS: [Missing; Self::N] = [Self::NoCall, Self::Filtered, Self::Malformed];

    /// Returns a string representation of the reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoCall => "no call",
            Self::Filtered => "failing filter",
            Self::Malformed => "malformed genotype call",
        }
    }
}

/// Parses a genotype call such as `A/G` or `A|G`.
///
/// Returns `None` if the call is longer than [`MAX_CALL_LEN`] or does not consist of exactly two
/// alleles. A `.` allele is converted to the PLINK missing allele.
pub fn parse_call(gt: &str) -> Option<Genotype> {
    if gt.len() > MAX_CALL_LEN {
        return None;
    }

    let mut alleles = gt.split(|c: char| c == '/' || c == '|');

    match (alleles.next(), alleles.next(), alleles.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => {
            Some(Genotype::new(plink_allele(a), plink_allele(b)))
        }
        _ => None,
    }
}

fn plink_allele(allele: &str) -> &str {
    if allele == "." {
        Allele::MISSING
    } else {
        allele
    }
}

/// Returns the PLINK genotype for a call, or the reason it should be written as missing.
pub fn to_genotype(call: &Call, filter: &Filter) -> Result<Genotype, Missing> {
    let gt = call.gt.as_deref().ok_or(Missing::NoCall)?;

    if !filter.keeps(call) {
        return Err(Missing::Filtered);
    }

    parse_call(gt).ok_or(Missing::Malformed)
}
