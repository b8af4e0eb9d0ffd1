//! SNP coordinates.

use std::{collections::HashMap, fmt};

/// The coordinate of a SNP, given by its chromosome and physical position.
///
/// SNP names are not consistent between datasets, so SNPs are matched by coordinate instead.
/// Both parts are kept as the raw tokens from the input, and two coordinates are equal only if
/// their tokens are equal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Coordinate {
    chromosome: String,
    position: String,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new<C, P>(chromosome: C, position: P) -> Self
    where
        C: Into<String>,
        P: Into<String>,
    {
        Self {
            chromosome: chromosome.into(),
            position: position.into(),
        }
    }

    /// Returns the chromosome of the coordinate.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Returns the position of the coordinate.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns `true` if this is the placeholder coordinate `0.0`, used in `.map` files for slots
    /// without a SNP.
    pub fn is_sentinel(&self) -> bool {
        self.chromosome == "0" && self.position == "0"
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chromosome, self.position)
    }
}

/// A lookup from coordinate to its index in a coordinate list.
///
/// When a coordinate occurs more than once in the list, only its first index is kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CoordinateIndex(HashMap<Coordinate, usize>);

impl CoordinateIndex {
    /// Returns the index of the first occurrence of the coordinate, if any.
    pub fn get(&self, coordinate: &Coordinate) -> Option<usize> {
        self.0.get(coordinate).copied()
    }

    /// Returns the number of distinct coordinates in the index.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the index contains no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a Coordinate> for CoordinateIndex {
    fn from_iter<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut map = HashMap::new();

        for (i, coordinate) in coordinates.into_iter().enumerate() {
            map.entry(coordinate.clone()).or_insert(i);
        }

        Self(map)
    }
}
