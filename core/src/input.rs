//! Opening input files.
//!
//! All inputs are plain text, optionally gzip-compressed. Compression is detected from the magic
//! bytes at the start of the file, so file extensions do not matter.

use std::{
    fs::File,
    io::{self, BufRead, Read},
    path::Path,
};

use flate2::bufread::MultiGzDecoder;

/// A buffered reader from a file that may or may not be compressed.
#[derive(Debug)]
pub enum Reader {
    /// A reader from an uncompressed file.
    Plain(io::BufReader<File>),
    /// A reader from a gzip-compressed file.
    Gzip(io::BufReader<MultiGzDecoder<io::BufReader<File>>>),
}

impl Reader {
    /// Creates a new reader from an uncompressed or gzip-compressed reader.
    pub fn new(mut inner: io::BufReader<File>) -> io::Result<Self> {
        match CompressionMethod::detect(&mut inner)? {
            Some(CompressionMethod::Gzip) => Ok(Self::Gzip(io::BufReader::new(
                MultiGzDecoder::new(inner),
            ))),
            None => Ok(Self::Plain(inner)),
        }
    }
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Reader::Plain(reader) => reader.read(buf),
            Reader::Gzip(reader) => reader.read(buf),
        }
    }
}

impl BufRead for Reader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Reader::Plain(reader) => reader.fill_buf(),
            Reader::Gzip(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Reader::Plain(reader) => reader.consume(amt),
            Reader::Gzip(reader) => reader.consume(amt),
        }
    }
}

/// Opens the file at the provided path for reading, decompressing if required.
pub fn open<P>(path: P) -> io::Result<Reader>
where
    P: AsRef<Path>,
{
    File::open(path)
        .map(io::BufReader::new)
        .and_then(Reader::new)
}

/// A supported compression method.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip, including BGZF.
    Gzip,
}

impl CompressionMethod {
    /// Detects the compression method of a reader without consuming any input.
    pub fn detect<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: BufRead,
    {
        const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

        let src = reader.fill_buf()?;

        if let Some(buf) = src.get(..GZIP_MAGIC_NUMBER.len()) {
            if buf == GZIP_MAGIC_NUMBER {
                return Ok(Some(CompressionMethod::Gzip));
            }
        }

        Ok(None)
    }
}
