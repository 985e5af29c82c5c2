//! Survey file ingestion
use crate::{city::Geocoder, record::Record, Error, ParsingError};

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

#[cfg(feature = "log")]
use log::{debug, trace};

/// Ingestion statistics. Rejected lines are silently discarded,
/// this is the only place where they are accounted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Total number of lines read
    pub lines: usize,
    /// Number of accepted records
    pub accepted: usize,
    /// Lines with less than 12 fields
    pub too_short: usize,
    /// Lines whose latitude or longitude is not a finite number
    pub bad_coordinates: usize,
}

impl IngestStats {
    /// Total number of discarded lines
    pub fn rejected(&self) -> usize {
        self.too_short + self.bad_coordinates
    }
    fn account(&mut self, result: &Result<Record, ParsingError>) {
        self.lines += 1;
        match result {
            Ok(_) => self.accepted += 1,
            Err(ParsingError::TooFewFields(_)) => self.too_short += 1,
            Err(_) => self.bad_coordinates += 1,
        }
    }
}

impl std::fmt::Display for IngestStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} lines: {} accepted, {} rejected ({} too short, {} bad coordinates)",
            self.lines,
            self.accepted,
            self.rejected(),
            self.too_short,
            self.bad_coordinates
        )
    }
}

/// Result of a complete ingestion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested {
    /// Accepted records, in input order
    pub records: Vec<Record>,
    pub stats: IngestStats,
}

/// [Ingestor] turns a line oriented source into [Record]s,
/// annotated by its [Geocoder].
#[derive(Debug, Clone, Copy)]
pub struct Ingestor<'a> {
    geocoder: Geocoder<'a>,
}

impl Default for Ingestor<'static> {
    fn default() -> Self {
        Self::new(Geocoder::latvia())
    }
}

impl<'a> Ingestor<'a> {
    pub fn new(geocoder: Geocoder<'a>) -> Self {
        Self { geocoder }
    }
    pub fn geocoder(&self) -> &Geocoder<'a> {
        &self.geocoder
    }
    /// Consumes all lines of given source.
    /// Malformed lines are discarded, any I/O error aborts the whole
    /// ingestion and partial results are dropped.
    /// Invalid UTF-8 sequences are replaced, not treated as errors.
    pub fn ingest<R: BufRead>(&self, mut reader: R) -> Result<Ingested, Error> {
        let mut ingested = Ingested::default();
        let mut buf = Vec::<u8>::with_capacity(128);
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let result = Record::parse(&line, &self.geocoder);
            ingested.stats.account(&result);

            match result {
                Ok(record) => ingested.records.push(record),
                Err(_e) => {
                    #[cfg(feature = "log")]
                    trace!("line #{} discarded: {}", ingested.stats.lines, _e);
                },
            }
        }
        #[cfg(feature = "log")]
        debug!("{}", ingested.stats);
        Ok(ingested)
    }
    /// Ingests given local file. Files terminated by ".gz" are
    /// decompressed on the fly when the flate2 feature is enabled.
    pub fn ingest_path<P: AsRef<Path>>(&self, path: P) -> Result<Ingested, Error> {
        let path = path.as_ref();
        let reader = open(path)?;
        self.ingest(reader).map_err(|e| with_path(path, e))
    }
}

/// Opens given local file for ingestion.
/// Files terminated by ".gz" are gzip decoded when the flate2 feature is enabled.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>, Error> {
    let path = path.as_ref();
    let fd = File::open(path).map_err(|e| Error::io(path, e))?;

    #[cfg(feature = "flate2")]
    if is_gzip(path) {
        return Ok(Box::new(BufReader::new(GzDecoder::new(fd))));
    }

    Ok(Box::new(BufReader::new(fd)))
}

#[cfg(feature = "flate2")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Attaches the file path to a bare I/O error
pub(crate) fn with_path(path: &Path, error: Error) -> Error {
    match error {
        Error::Stdio(source) => Error::io(path, source),
        e => e,
    }
}

/// Ingests given source against the Latvian reference table
pub fn ingest<R: BufRead>(reader: R) -> Result<Ingested, Error> {
    Ingestor::default().ingest(reader)
}

/// Ingests given local file against the Latvian reference table
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Ingested, Error> {
    Ingestor::default().ingest_path(path)
}

/// Ingests given gzip compressed local file, whatever its name,
/// against the Latvian reference table
#[cfg(feature = "flate2")]
#[cfg_attr(docsrs, doc(cfg(feature = "flate2")))]
pub fn from_gzip_path<P: AsRef<Path>>(path: P) -> Result<Ingested, Error> {
    let path = path.as_ref();
    let fd = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(GzDecoder::new(fd));
    Ingestor::default()
        .ingest(reader)
        .map_err(|e| with_path(path, e))
}
