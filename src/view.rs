//! Survey views: projections of the authoritative record collection.
//!
//! Views are expressed as index vectors into the collection, which is
//! never modified by any of the following operations.
use crate::{record::Record, technology::Technology};

/// Returns the indices of the records passing both the technology
/// and the LAC predicates, in collection order.
/// An empty `lac` accepts any record; otherwise the LAC field
/// must be byte identical.
pub fn filter(records: &[Record], tech: Technology, lac: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| tech.matches(record.kind()))
        .filter(|(_, record)| lac.is_empty() || record.lac() == lac)
        .map(|(index, _)| index)
        .collect()
}

/// Returns the indices of the records whose CID exactly matches given
/// query (surrounding whitespace ignored), in collection order.
/// Returns None when the query is blank: caller should keep its view as is.
pub fn search_by_cid(records: &[Record], cid: &str) -> Option<Vec<usize>> {
    let cid = cid.trim();
    if cid.is_empty() {
        return None;
    }
    Some(
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.cid() == cid)
            .map(|(index, _)| index)
            .collect(),
    )
}

/// Sorts given view by increasing signal strength.
/// Rows whose signal is not an integer stay in their slot, the others are
/// stably sorted among the remaining slots.
pub fn sort_by_signal(records: &[Record], view: &mut [usize]) {
    let (slots, mut numeric): (Vec<usize>, Vec<(i32, usize)>) = view
        .iter()
        .enumerate()
        .filter_map(|(slot, &index)| {
            records[index]
                .signal_dbm()
                .map(|signal| (slot, (signal, index)))
        })
        .unzip();

    numeric.sort_by_key(|(signal, _)| *signal);

    for (slot, (_, index)) in slots.into_iter().zip(numeric) {
        view[slot] = index;
    }
}

/// [View] is a borrowed, ordered projection of a record collection
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    records: &'a [Record],
    indices: &'a [usize],
}

impl<'a> View<'a> {
    /// Builds a [View]. Indices must be valid for given collection.
    pub fn new(records: &'a [Record], indices: &'a [usize]) -> Self {
        Self { records, indices }
    }
    /// Number of rows
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    /// Returns nth row
    pub fn get(&self, nth: usize) -> Option<&'a Record> {
        self.indices.get(nth).map(|index| &self.records[*index])
    }
    /// Row positions in the collection
    pub fn indices(&self) -> &'a [usize] {
        self.indices
    }
    /// Iterates rows in display order
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + 'a {
        let records = self.records;
        self.indices.iter().map(move |index| &records[*index])
    }
    /// Collects all rows
    pub fn to_vec(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for View<'a> {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;
    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
