//! Survey record: one cellular signal observation
use crate::{city::Geocoder, ParsingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal number of comma separated tokens of a valid survey line
pub const MIN_FIELDS: usize = 12;

/// Survey table columns, in positional order.
/// The first 12 are read from the input line, the last one is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Column {
    Latitude,
    Longitude,
    Altitude,
    /// Mobile Country Code
    MCC,
    /// Mobile Network Code
    MNC,
    /// Location Area Code
    LAC,
    /// Cell Identifier
    CID,
    /// Received signal strength (dBm)
    Signal,
    /// Radio access technology
    Type,
    Subtype,
    /// Absolute Radio Frequency Channel Number
    ARFCN,
    /// Primary Scrambling Code
    PSC,
    /// Nearest reference city
    NearestCity,
}

/// Table headers, in [Column] order
pub const COLUMN_HEADERS: [&str; 13] = [
    "Latitude",
    "Longitude",
    "Altitude",
    "MCC",
    "MNC",
    "LAC",
    "CID",
    "Signal",
    "Type",
    "Subtype",
    "ARFCN",
    "PSC",
    "Nearest city",
];

impl Column {
    /// All columns, in positional order
    pub const ALL: [Column; 13] = [
        Self::Latitude,
        Self::Longitude,
        Self::Altitude,
        Self::MCC,
        Self::MNC,
        Self::LAC,
        Self::CID,
        Self::Signal,
        Self::Type,
        Self::Subtype,
        Self::ARFCN,
        Self::PSC,
        Self::NearestCity,
    ];
    /// Position of this column in a [Record]
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// Table header
    pub fn header(&self) -> &'static str {
        COLUMN_HEADERS[self.index()]
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// Parses a coordinate token as a finite real number.
/// Surrounding whitespace is tolerated, "inf" and "NaN" are not.
pub fn parse_coordinate(token: &str) -> Option<f64> {
    token
        .trim_matches(|c: char| c <= ' ')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// [Record] is one accepted survey line, annotated with its nearest city.
/// All fields are kept as text, exactly as found in the input line.
/// A [Record] only exists through [Record::parse]: coordinates always
/// parse and the nearest city is always resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Record {
    latitude: String,
    longitude: String,
    altitude: String,
    mcc: String,
    mnc: String,
    lac: String,
    cid: String,
    signal: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    subtype: String,
    arfcn: String,
    psc: String,
    nearest_city: String,
}

impl Record {
    /// Parses a survey line, resolving the nearest city with given [Geocoder].
    /// The line is split on ',' without any quoting, escaping or trimming.
    /// Tokens past the 12th one are dropped.
    pub fn parse(line: &str, geocoder: &Geocoder) -> Result<Self, ParsingError> {
        let tokens = line.split(',').collect::<Vec<_>>();
        if tokens.len() < MIN_FIELDS {
            return Err(ParsingError::TooFewFields(tokens.len()));
        }

        let lat = parse_coordinate(tokens[0])
            .ok_or_else(|| ParsingError::InvalidLatitude(tokens[0].to_string()))?;
        let lon = parse_coordinate(tokens[1])
            .ok_or_else(|| ParsingError::InvalidLongitude(tokens[1].to_string()))?;

        Ok(Self {
            latitude: tokens[0].to_string(),
            longitude: tokens[1].to_string(),
            altitude: tokens[2].to_string(),
            mcc: tokens[3].to_string(),
            mnc: tokens[4].to_string(),
            lac: tokens[5].to_string(),
            cid: tokens[6].to_string(),
            signal: tokens[7].to_string(),
            kind: tokens[8].to_string(),
            subtype: tokens[9].to_string(),
            arfcn: tokens[10].to_string(),
            psc: tokens[11].to_string(),
            nearest_city: geocoder.nearest_city(lat, lon).to_string(),
        })
    }
    /// Returns given column value
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Latitude => &self.latitude,
            Column::Longitude => &self.longitude,
            Column::Altitude => &self.altitude,
            Column::MCC => &self.mcc,
            Column::MNC => &self.mnc,
            Column::LAC => &self.lac,
            Column::CID => &self.cid,
            Column::Signal => &self.signal,
            Column::Type => &self.kind,
            Column::Subtype => &self.subtype,
            Column::ARFCN => &self.arfcn,
            Column::PSC => &self.psc,
            Column::NearestCity => &self.nearest_city,
        }
    }
    /// Returns all 13 values, in [Column] order
    pub fn fields(&self) -> [&str; 13] {
        Column::ALL.map(|column| self.get(column))
    }
    pub fn latitude(&self) -> &str {
        &self.latitude
    }
    pub fn longitude(&self) -> &str {
        &self.longitude
    }
    pub fn altitude(&self) -> &str {
        &self.altitude
    }
    pub fn mcc(&self) -> &str {
        &self.mcc
    }
    pub fn mnc(&self) -> &str {
        &self.mnc
    }
    /// Location Area Code
    pub fn lac(&self) -> &str {
        &self.lac
    }
    /// Cell identifier
    pub fn cid(&self) -> &str {
        &self.cid
    }
    /// Signal strength, as found in the input
    pub fn signal(&self) -> &str {
        &self.signal
    }
    /// Radio technology ("Type" column)
    pub fn kind(&self) -> &str {
        &self.kind
    }
    pub fn subtype(&self) -> &str {
        &self.subtype
    }
    pub fn arfcn(&self) -> &str {
        &self.arfcn
    }
    pub fn psc(&self) -> &str {
        &self.psc
    }
    pub fn nearest_city(&self) -> &str {
        &self.nearest_city
    }
    /// (latitude, longitude) in decimal degrees
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((
            parse_coordinate(&self.latitude)?,
            parse_coordinate(&self.longitude)?,
        ))
    }
    /// Signal strength interpreted as a decimal integer (dBm),
    /// None when it does not parse.
    pub fn signal_dbm(&self) -> Option<i32> {
        self.signal.parse::<i32>().ok()
    }
}

impl std::str::FromStr for Record {
    type Err = ParsingError;
    /// Parses a survey line against the Latvian reference table
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line, &Geocoder::latvia())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::{City, UNKNOWN_CITY};
    use std::str::FromStr;

    #[test]
    fn basic_line() {
        let line = "56.9496,24.1052,10,247,01,100,200,-85,LTE,,6200,,";
        let record = Record::from_str(line).unwrap();
        assert_eq!(
            record.fields(),
            [
                "56.9496", "24.1052", "10", "247", "01", "100", "200", "-85", "LTE", "", "6200",
                "", "Riga"
            ]
        );
        assert_eq!(record.lac(), "100");
        assert_eq!(record.cid(), "200");
        assert_eq!(record.kind(), "LTE");
        assert_eq!(record.nearest_city(), "Riga");
        assert_eq!(record.signal_dbm(), Some(-85));
        assert_eq!(record.coordinates(), Some((56.9496, 24.1052)));
    }
    #[test]
    fn extra_tokens_dropped() {
        let line = "57.39,21.56,5,247,02,7,8,-90,GSM,EDGE,12,34,extra,more";
        let record = Record::from_str(line).unwrap();
        assert_eq!(record.psc(), "34");
        assert_eq!(record.nearest_city(), "Ventspils");
        assert_eq!(record.fields().len(), 13);
    }
    #[test]
    fn too_few_fields() {
        for (line, count) in [
            ("", 1),
            ("56.9,24.1,10,247,01,100,200,-85", 8),
            ("56.9,24.1,10,247,01,100,200,-85,LTE,,6200", 11),
        ] {
            assert_eq!(
                Record::from_str(line),
                Err(ParsingError::TooFewFields(count)),
                "\"{}\"",
                line
            );
        }
    }
    #[test]
    fn invalid_coordinates() {
        assert_eq!(
            Record::from_str("N/A,24.1,10,247,01,100,200,-85,LTE,,6200,,"),
            Err(ParsingError::InvalidLatitude("N/A".to_string()))
        );
        assert_eq!(
            Record::from_str("56.9,,10,247,01,100,200,-85,LTE,,6200,,"),
            Err(ParsingError::InvalidLongitude("".to_string()))
        );
        assert_eq!(
            Record::from_str("NaN,24.1,10,247,01,100,200,-85,LTE,,6200,,"),
            Err(ParsingError::InvalidLatitude("NaN".to_string()))
        );
        assert_eq!(
            Record::from_str("56.9,inf,10,247,01,100,200,-85,LTE,,6200,,"),
            Err(ParsingError::InvalidLongitude("inf".to_string()))
        );
        // comma decimal separators shift every field: still parsable, not what you want
        let shifted = Record::from_str("56,9,24,1,10,247,01,100,200,-85,LTE,,").unwrap();
        assert_eq!(shifted.latitude(), "56");
        assert_eq!(shifted.longitude(), "9");
        assert!(Record::from_str("56;9,24.1,10,247,01,100,200,-85,LTE,,6200,,").is_err());
    }
    #[test]
    fn coordinate_tokens() {
        assert_eq!(parse_coordinate("56.9496"), Some(56.9496));
        assert_eq!(parse_coordinate("-1.5"), Some(-1.5));
        assert_eq!(parse_coordinate("+1.5"), Some(1.5));
        assert_eq!(parse_coordinate("5.69496E1"), Some(56.9496));
        assert_eq!(parse_coordinate(" 24.1 "), Some(24.1));
        assert_eq!(parse_coordinate("1e400"), None);
        assert_eq!(parse_coordinate("-infinity"), None);
        assert_eq!(parse_coordinate("56,9"), None);
        assert_eq!(parse_coordinate(""), None);
    }
    #[test]
    fn verbatim_fields() {
        // coordinates keep their textual form
        let record = Record::from_str(" 56.95 ,+24.11,a,b,c,d,e,f,g,h,i,j").unwrap();
        assert_eq!(record.latitude(), " 56.95 ");
        assert_eq!(record.longitude(), "+24.11");
        assert_eq!(record.signal_dbm(), None);
        assert_eq!(record.nearest_city(), "Riga");
    }
    #[test]
    fn signal_dbm() {
        for (signal, expected) in [
            ("-85", Some(-85)),
            ("+3", Some(3)),
            ("0", Some(0)),
            ("-85.5", None),
            (" -85", None),
            ("abc", None),
            ("", None),
            ("99999999999", None),
        ] {
            let line = format!("56.9,24.1,10,247,01,100,200,{},LTE,,6200,", signal);
            let record = Record::from_str(&line).unwrap();
            assert_eq!(record.signal_dbm(), expected, "signal \"{}\"", signal);
        }
    }
    #[test]
    fn custom_geocoder() {
        let line = "56.9496,24.1052,10,247,01,100,200,-85,LTE,,6200,,";
        let record = Record::parse(line, &Geocoder::new(&[])).unwrap();
        assert_eq!(record.nearest_city(), UNKNOWN_CITY);

        let cities = [City::new("Tallinn", 59.437, 24.7536)];
        let record = Record::parse(line, &Geocoder::new(&cities)).unwrap();
        assert_eq!(record.nearest_city(), "Tallinn");
    }
    #[test]
    fn columns() {
        for (index, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), index);
        }
        assert_eq!(Column::NearestCity.header(), "Nearest city");
        assert_eq!(Column::Type.to_string(), "Type");
        assert_eq!(Column::LAC.index(), 5);
        assert_eq!(Column::CID.index(), 6);
        assert_eq!(Column::Signal.index(), 7);
        assert_eq!(Column::Type.index(), 8);
    }
}
