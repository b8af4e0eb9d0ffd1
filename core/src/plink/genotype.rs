//! Unordered, diploid genotypes.

use std::fmt;

/// A single allele token, such as `A` or `1`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Allele(String);

impl Allele {
    /// The token used by PLINK for a missing allele.
    pub const MISSING: &'static str = "0";

    /// Creates a new allele.
    pub fn new<S>(token: S) -> Self
    where
        S: Into<String>,
    {
        Self(token.into())
    }

    /// Creates a missing allele.
    pub fn missing() -> Self {
        Self::new(Self::MISSING)
    }

    /// Returns `true` if the allele is missing.
    pub fn is_missing(&self) -> bool {
        self.0 == Self::MISSING
    }

    /// Returns the allele token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A diploid genotype.
///
/// The order of the alleles is kept as read, but is ignored when comparing genotypes with
/// [`compare`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Genotype([Allele; 2]);

impl Genotype {
    /// Creates a new genotype from its alleles.
    pub fn new<A, B>(first: A, second: B) -> Self
    where
        A: Into<String>,
        B: Into<String>,
    {
        Self([Allele::new(first), Allele::new(second)])
    }

    /// Creates a missing genotype, written as `0 0` by PLINK.
    pub fn missing() -> Self {
        Self([Allele::missing(), Allele::missing()])
    }

    /// Returns the alleles of the genotype.
    pub fn alleles(&self) -> &[Allele; 2] {
        &self.0
    }

    /// Returns `true` if either allele is missing.
    pub fn has_missing(&self) -> bool {
        self.0.iter().any(Allele::is_missing)
    }

    fn sorted(&self) -> [&Allele; 2] {
        let [a, b] = &self.0;

        if a <= b {
            [a, b]
        } else {
            [b, a]
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = &self.0;
        write!(f, "{a} {b}")
    }
}

impl From<[Allele; 2]> for Genotype {
    fn from(alleles: [Allele; 2]) -> Self {
        Self(alleles)
    }
}

/// The result of comparing two genotypes.
///
/// The discriminants match the codes historically used for each outcome.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Comparison {
    /// The genotypes differ.
    Discordant = 0,
    /// The genotypes are the same.
    Concordant = 1,
    /// At least one of the genotypes has missing data.
    Ignored = 2,
}

impl Comparison {
    /// The number of possible comparison outcomes.
    pub const N: usize = 3;

    /// All comparison outcomes, in order of their codes.
    pub const VARIANTS: [Comparison; Self::N] =
        [Self::Discordant, Self::Concordant, Self::Ignored];

    /// Returns a name for the comparison outcome.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discordant => "discordant",
            Self::Concordant => "concordant",
            Self::Ignored => "ignored",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compares two genotypes without regard to allele order.
///
/// Missing data is checked before equality, so a missing allele in either genotype always gives
/// [`Comparison::Ignored`].
pub fn compare(first: &Genotype, second: &Genotype) -> Comparison {
    if first.has_missing() || second.has_missing() {
        Comparison::Ignored
    } else if first.sorted() == second.sorted() {
        Comparison::Concordant
    } else {
        Comparison::Discordant
    }
}
