//! Reference cities and nearest city geolocation
#[cfg(feature = "serde")]
use serde::Serialize;

/// Mean Earth radius (spherical model), in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returned when the reference table is empty
pub const UNKNOWN_CITY: &str = "Unknown";

/// A reference population center, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct City {
    /// City name
    pub name: &'static str,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl City {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
    /// Great circle distance from given coordinates to Self, in kilometers
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        haversine_km(latitude, longitude, self.latitude, self.longitude)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:.4}, {:.4})", self.name, self.latitude, self.longitude)
    }
}

/// Latvian population centers, in the order ties are resolved
pub const LATVIAN_CITIES: [City; 10] = [
    City::new("Riga", 56.9496, 24.1052),
    City::new("Daugavpils", 55.8758, 26.5358),
    City::new("Liepaja", 56.5047, 21.0108),
    City::new("Jelgava", 56.6511, 23.7214),
    City::new("Jurmala", 56.9680, 23.7705),
    City::new("Ventspils", 57.3894, 21.5646),
    City::new("Rezekne", 56.5065, 27.3308),
    City::new("Valmiera", 57.5385, 25.4264),
    City::new("Ogre", 56.8162, 24.6146),
    City::new("Jekabpils", 56.4990, 25.8572),
];

/// Haversine great circle distance between two points
/// expressed in decimal degrees, on a spherical Earth.
/// Returns the distance in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    // rounding may push near antipodal points past 1.0
    let a = a.clamp(0.0, 1.0);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Returns the name of the closest [LATVIAN_CITIES] entry
pub fn nearest_city(latitude: f64, longitude: f64) -> &'static str {
    Geocoder::latvia().nearest_city(latitude, longitude)
}

/// [Geocoder] resolves coordinates to the nearest city
/// of an ordered reference table.
#[derive(Debug, Clone, Copy)]
pub struct Geocoder<'a> {
    cities: &'a [City],
}

impl Default for Geocoder<'static> {
    fn default() -> Self {
        Self::latvia()
    }
}

impl<'a> Geocoder<'a> {
    /// Builds a [Geocoder] over given reference table.
    /// Table order matters: on equal distances the first entry wins.
    pub fn new(cities: &'a [City]) -> Self {
        Self { cities }
    }
    /// Returns the reference table
    pub fn cities(&self) -> &'a [City] {
        self.cities
    }
    /// Returns the closest [City], None if the table is empty.
    /// Inputs are expected to be finite.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Option<&'a City> {
        let mut closest: Option<(&'a City, f64)> = None;
        for city in self.cities {
            let d = city.distance_km(latitude, longitude);
            match closest {
                Some((_, min)) if d < min => closest = Some((city, d)),
                None => closest = Some((city, d)),
                _ => {},
            }
        }
        closest.map(|(city, _)| city)
    }
    /// Returns the closest city name, or [UNKNOWN_CITY]
    pub fn nearest_city(&self, latitude: f64, longitude: f64) -> &'static str {
        self.nearest(latitude, longitude)
            .map(|city| city.name)
            .unwrap_or(UNKNOWN_CITY)
    }
}

impl Geocoder<'static> {
    /// [Geocoder] over [LATVIAN_CITIES]
    pub fn latvia() -> Self {
        Self::new(&LATVIAN_CITIES)
    }
}
