#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * Cell-Survey: cellular signal survey records, nearest city geolocation
 * and tabular views (filter, search, sort).
 *
 * Input files are newline delimited, comma separated, without header:
 * Latitude,Longitude,Altitude,MCC,MNC,LAC,CID,Signal,Type,Subtype,ARFCN,PSC
 */

pub mod city;
pub mod ingest;
pub mod record;
pub mod survey;
pub mod technology;
pub mod view;

mod error;

#[macro_use]
pub(crate) mod macros;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        city::{haversine_km, nearest_city, City, Geocoder, LATVIAN_CITIES, UNKNOWN_CITY},
        error::{Error, ParsingError},
        ingest::{IngestStats, Ingested, Ingestor},
        record::{Column, Record, COLUMN_HEADERS},
        survey::Survey,
        technology::Technology,
        view::View,
    };
}

pub use error::{Error, ParsingError};
