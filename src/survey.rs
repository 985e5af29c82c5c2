//! [Survey] is the control surface a viewer application drives.
use crate::{
    city::Geocoder,
    ingest::{self, IngestStats, Ingestor},
    record::Record,
    technology::Technology,
    view::{self, View},
    Error,
};

use std::{io::BufRead, path::Path};

#[cfg(feature = "log")]
use log::{debug, info};

/// [Survey] owns the authoritative record collection and the currently
/// displayed projection. Every operation returns the new [View]
/// that the tabular widget should render.
#[derive(Debug, Clone)]
pub struct Survey<'a> {
    ingestor: Ingestor<'a>,
    records: Vec<Record>,
    displayed: Vec<usize>,
    stats: IngestStats,
}

impl Default for Survey<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Survey<'static> {
    /// Builds an empty [Survey], annotating with Latvian cities
    pub fn new() -> Self {
        Self::with_geocoder(Geocoder::latvia())
    }
}

impl<'a> Survey<'a> {
    /// Builds an empty [Survey] annotating with given [Geocoder]
    pub fn with_geocoder(geocoder: Geocoder<'a>) -> Self {
        Self {
            ingestor: Ingestor::new(geocoder),
            records: Vec::new(),
            displayed: Vec::new(),
            stats: IngestStats::default(),
        }
    }
    /// Replaces the collection with the content of given local file.
    /// When the file cannot be opened, the previous collection is preserved.
    /// Once reading has started, any failure leaves an empty collection.
    /// On success, all records are displayed in file order.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<&IngestStats, Error> {
        let path = path.as_ref();
        let reader = ingest::open(path)?;
        #[cfg(feature = "log")]
        info!("loading \"{}\"", path.display());
        self.load_from_reader(reader)
            .map_err(|e| ingest::with_path(path, e))
    }
    /// Replaces the collection with the content of given source.
    /// The collection is emptied first: any failure leaves an empty collection.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<&IngestStats, Error> {
        self.clear();
        let ingested = self.ingestor.ingest(reader)?;
        self.records = ingested.records;
        self.stats = ingested.stats;
        self.reset_view();
        Ok(&self.stats)
    }
    /// Drops all records
    pub fn clear(&mut self) {
        self.records.clear();
        self.displayed.clear();
        self.stats = IngestStats::default();
    }
    /// Displays the records of given technology and LAC (empty: any LAC),
    /// among the whole collection, in collection order.
    pub fn apply_filters(&mut self, tech: Technology, lac: &str) -> View<'_> {
        self.displayed = view::filter(&self.records, tech, lac);
        #[cfg(feature = "log")]
        debug!(
            "filter tech={} lac=\"{}\": {}/{} rows",
            tech,
            lac,
            self.displayed.len(),
            self.records.len()
        );
        self.view()
    }
    /// Displays the records of given CID, among the whole collection:
    /// this replaces any previous filter. A blank query leaves the view untouched.
    pub fn search_by_cid(&mut self, cid: &str) -> View<'_> {
        if let Some(displayed) = view::search_by_cid(&self.records, cid) {
            #[cfg(feature = "log")]
            debug!("search cid=\"{}\": {} rows", cid.trim(), displayed.len());
            self.displayed = displayed;
        }
        self.view()
    }
    /// Sorts the displayed rows by increasing signal strength
    pub fn sort_by_signal(&mut self) -> View<'_> {
        view::sort_by_signal(&self.records, &mut self.displayed);
        self.view()
    }
    /// Displays the whole collection, in collection order
    pub fn reset_view(&mut self) -> View<'_> {
        self.displayed = (0..self.records.len()).collect();
        self.view()
    }
    /// Currently displayed rows
    pub fn view(&self) -> View<'_> {
        View::new(&self.records, &self.displayed)
    }
    /// Whole collection, in ingestion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    /// Statistics of the latest load
    pub fn last_stats(&self) -> &IngestStats {
        &self.stats
    }
}
