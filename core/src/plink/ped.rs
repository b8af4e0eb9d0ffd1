//! Reading and writing the PLINK `.ped` format.
//!
//! Each line of a `.ped` file describes a single sample. The first six columns are family ID,
//! sample ID, paternal ID, maternal ID, sex, and phenotype. The remaining columns are alleles, two
//! per SNP, in the same order as the SNPs in the corresponding `.map` file.

use std::{
    fmt,
    io::{self, BufRead},
};

use indexmap::{map::Entry, IndexMap};

use super::Genotype;

/// The number of leading metadata columns in a `.ped` record.
pub const METADATA_COLUMNS: usize = 6;

/// The genotypes of each sample in a `.ped` file, in the order of the file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenotypeMap(IndexMap<String, Vec<Genotype>>);

impl GenotypeMap {
    /// Returns the genotypes of a sample, if present.
    pub fn get(&self, sample: &str) -> Option<&[Genotype]> {
        self.0.get(sample).map(Vec::as_slice)
    }

    /// Returns an iterator over samples and their genotypes, in the order of the file.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Genotype])> {
        self.0
            .iter()
            .map(|(sample, genotypes)| (sample.as_str(), genotypes.as_slice()))
    }

    /// Returns an iterator over sample names, in the order of the file.
    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn try_insert(
        &mut self,
        sample: String,
        genotypes: Vec<Genotype>,
    ) -> Result<(), ParsePedErrorKind> {
        match self.0.entry(sample) {
            Entry::Occupied(entry) => Err(ParsePedErrorKind::DuplicateSample(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(genotypes);
                Ok(())
            }
        }
    }
}

fn parse_record(line: &str) -> Result<(String, Vec<Genotype>), ParsePedErrorKind> {
    let fields = line.split_whitespace().collect::<Vec<_>>();

    if fields.len() < METADATA_COLUMNS {
        return Err(ParsePedErrorKind::TooFewColumns(fields.len()));
    }

    let alleles = &fields[METADATA_COLUMNS..];
    if alleles.len() % 2 != 0 {
        return Err(ParsePedErrorKind::OddAlleles(alleles.len()));
    }

    let genotypes = alleles
        .chunks_exact(2)
        .map(|pair| Genotype::new(pair[0], pair[1]))
        .collect();

    Ok((fields[1].to_string(), genotypes))
}

/// Reads all genotypes in `.ped` format from a reader.
///
/// Blank lines are skipped. Sample IDs must be unique within the file.
pub fn read_genotypes<R>(reader: &mut R) -> io::Result<GenotypeMap>
where
    R: BufRead,
{
    let mut map = GenotypeMap::default();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        parse_record(&line)
            .and_then(|(sample, genotypes)| map.try_insert(sample, genotypes))
            .map_err(|kind| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    ParsePedError { line: i + 1, kind },
                )
            })?;
    }

    Ok(map)
}

/// Writes a single `.ped` record with placeholder metadata.
///
/// Only the sample ID is written to the metadata columns; all other metadata is set to `0`.
/// Columns are tab-separated.
pub fn write_record<W>(writer: &mut W, sample: &str, genotypes: &[Genotype]) -> io::Result<()>
where
    W: io::Write,
{
    write!(writer, "0\t{sample}\t0\t0\t0\t0")?;

    for genotype in genotypes {
        let [a, b] = genotype.alleles();
        write!(writer, "\t{a}\t{b}")?;
    }

    writeln!(writer)
}

impl FromIterator<(String, Vec<Genotype>)> for GenotypeMap {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Genotype>)>,
    {
        Self(iter.into_iter().collect())
    }
}

/// An error associated with parsing a `.ped` record.
#[derive(Debug)]
pub struct ParsePedError {
    line: usize,
    kind: ParsePedErrorKind,
}

#[derive(Debug)]
enum ParsePedErrorKind {
    TooFewColumns(usize),
    OddAlleles(usize),
    DuplicateSample(String),
}

impl fmt::Display for ParsePedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;

        match &self.kind {
            ParsePedErrorKind::TooFewColumns(found) => write!(
                f,
                "expected at least {METADATA_COLUMNS} columns in ped record on line {line}, \
                found {found}"
            ),
            ParsePedErrorKind::OddAlleles(found) => write!(
                f,
                "expected an even number of allele columns in ped record on line {line}, \
                found {found}"
            ),
            ParsePedErrorKind::DuplicateSample(sample) => {
                write!(f, "duplicate sample '{sample}' in ped record on line {line}")
            }
        }
    }
}

impl std::error::Error for ParsePedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_genotypes() -> io::Result<()> {
        let src = b"fam0 sample0 0 0 1 -9 A G C C 0 0\n\
                    fam1\tsample1\t0\t0\t2\t-9\tG\tG\tC\tT\tA\tA\n";

        let map = read_genotypes(&mut &src[..])?;

        assert_eq!(map.samples().collect::<Vec<_>>(), ["sample0", "sample1"]);
        assert_eq!(
            map.get("sample0"),
            Some(
                &[
                    Genotype::new("A", "G"),
                    Genotype::new("C", "C"),
                    Genotype::missing()
                ][..]
            )
        );
        assert_eq!(
            map.get("sample1"),
            Some(
                &[
                    Genotype::new("G", "G"),
                    Genotype::new("C", "T"),
                    Genotype::new("A", "A")
                ][..]
            )
        );
        assert_eq!(map.get("sample2"), None);

        Ok(())
    }

    #[test]
    fn test_read_no_loci() -> io::Result<()> {
        let src = b"0 sample0 0 0 0 0\n";

        let map = read_genotypes(&mut &src[..])?;

        assert_eq!(map.get("sample0"), Some(&[][..]));

        Ok(())
    }

    #[test]
    fn test_read_preserves_file_order() -> io::Result<()> {
        let src = b"0 z 0 0 0 0 A A\n0 a 0 0 0 0 A A\n0 m 0 0 0 0 A A\n";

        let map = read_genotypes(&mut &src[..])?;

        assert_eq!(map.samples().collect::<Vec<_>>(), ["z", "a", "m"]);

        Ok(())
    }

    #[test]
    fn test_read_too_few_columns() {
        let src = b"0 sample0 0 0 0\n";

        let error = read_genotypes(&mut &src[..]).unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        assert_eq!(
            error.to_string(),
            "expected at least 6 columns in ped record on line 1, found 5"
        );
    }

    #[test]
    fn test_read_odd_alleles() {
        let src = b"0 sample0 0 0 0 0 A G\n0 sample1 0 0 0 0 A G C\n";

        let error = read_genotypes(&mut &src[..]).unwrap_err();

        assert_eq!(
            error.to_string(),
            "expected an even number of allele columns in ped record on line 2, found 3"
        );
    }

    #[test]
    fn test_read_duplicate_sample() {
        let src = b"0 sample0 0 0 0 0 A G\n0 sample0 0 0 0 0 A A\n";

        let error = read_genotypes(&mut &src[..]).unwrap_err();

        assert_eq!(
            error.to_string(),
            "duplicate sample 'sample0' in ped record on line 2"
        );
    }

    #[test]
    fn test_write_record() -> io::Result<()> {
        let mut dest = Vec::new();
        write_record(
            &mut dest,
            "sample0",
            &[Genotype::new("A", "G"), Genotype::missing()],
        )?;

        assert_eq!(dest, b"0\tsample0\t0\t0\t0\t0\tA\tG\t0\t0\n");

        Ok(())
    }

    #[test]
    fn test_write_then_read() -> io::Result<()> {
        let genotypes = vec![Genotype::new("C", "T"), Genotype::new("0", "0")];

        let mut dest = Vec::new();
        write_record(&mut dest, "sample0", &genotypes)?;

        let map = read_genotypes(&mut &dest[..])?;

        assert_eq!(map.get("sample0"), Some(&genotypes[..]));

        Ok(())
    }
}
