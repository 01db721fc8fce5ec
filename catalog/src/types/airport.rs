use std::fmt;

use serde::Deserialize;

use super::{catalog_error::CatalogError, geo_point::GeoPoint};

/// Raw attribute set for an airport, as supplied by a caller or a CSV row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirportRecord {
    pub gps_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_feet: i32,
    pub city: String,
    #[serde(rename = "country")]
    pub country_abbrv: String,
}

/// Represents an airport with its GPS id, category, name, position,
/// elevation, city and country code.
///
/// Fields are only reachable through accessors; the value never changes
/// after construction except by a full re-initialisation.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    gps_id: String,
    kind: String,
    name: String,
    position: GeoPoint,
    elevation_feet: i32,
    city: String,
    country_abbrv: String,
}

impl Airport {
    /// Creates a new airport from a full attribute set.
    ///
    /// # Errors
    /// `CatalogError::InvalidInput` when the GPS id, type or name is blank,
    /// or when latitude/longitude are not valid degrees.
    pub fn new(record: AirportRecord) -> Result<Self, CatalogError> {
        let AirportRecord {
            gps_id,
            kind,
            name,
            latitude,
            longitude,
            elevation_feet,
            city,
            country_abbrv,
        } = record;

        require("gps_id", &gps_id)?;
        require("type", &kind)?;
        require("name", &name)?;

        let position = GeoPoint::new(latitude, longitude)
            .map_err(|e| CatalogError::invalid(format!("airport {}: {}", gps_id, e)))?;

        Ok(Airport {
            gps_id,
            kind,
            name,
            position,
            elevation_feet,
            city,
            country_abbrv,
        })
    }

    /// Re-initialises an existing airport. Behaves exactly like `new`: every
    /// field is replaced, and on error `self` is left untouched.
    pub fn init(&mut self, record: AirportRecord) -> Result<(), CatalogError> {
        *self = Airport::new(record)?;
        Ok(())
    }

    pub fn gps_id(&self) -> &str {
        &self.gps_id
    }

    /// Category label, e.g. `large_airport`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn elevation_feet(&self) -> i32 {
        self.elevation_feet
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country_abbrv(&self) -> &str {
        &self.country_abbrv
    }
}

fn require(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Fixed-layout block used by every report listing.
impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPSID:      {}\n\
             Size:       {}\n\
             Name:       {}\n\
             Latitude-   {:.6}\n\
             Longitude-  {:.6}\n\
             Elevation-  {}ft\n\
             City:       {}\n\
             Country:    {}\n",
            self.gps_id,
            self.kind,
            self.name,
            self.position.latitude,
            self.position.longitude,
            self.elevation_feet,
            self.city,
            self.country_abbrv
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(gps_id: &str, latitude: f64, longitude: f64) -> AirportRecord {
        AirportRecord {
            gps_id: gps_id.to_string(),
            kind: "small_airport".to_string(),
            name: format!("{} Field", gps_id),
            latitude,
            longitude,
            elevation_feet: 1000,
            city: "Somewhere".to_string(),
            country_abbrv: "US".to_string(),
        }
    }

    #[test]
    fn test_new_copies_every_field() {
        let airport = Airport::new(AirportRecord {
            gps_id: "KJFK".to_string(),
            kind: "large_airport".to_string(),
            name: "John F Kennedy International Airport".to_string(),
            latitude: 40.6413,
            longitude: -73.7781,
            elevation_feet: 13,
            city: "New York".to_string(),
            country_abbrv: "US".to_string(),
        })
        .unwrap();

        assert_eq!(airport.gps_id(), "KJFK");
        assert_eq!(airport.kind(), "large_airport");
        assert_eq!(airport.name(), "John F Kennedy International Airport");
        assert_eq!(airport.latitude(), 40.6413);
        assert_eq!(airport.longitude(), -73.7781);
        assert_eq!(airport.elevation_feet(), 13);
        assert_eq!(airport.city(), "New York");
        assert_eq!(airport.country_abbrv(), "US");
    }

    #[test]
    fn test_blank_gps_id_is_invalid() {
        let result = Airport::new(record("  ", 0.0, 0.0));
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_latitude_is_invalid() {
        let result = Airport::new(record("X1", 91.0, 0.0));
        assert!(matches!(result, Err(CatalogError::InvalidInput(msg)) if msg.contains("X1")));
    }

    #[test]
    fn test_init_matches_new() {
        let mut airport = Airport::new(record("OLD", 1.0, 1.0)).unwrap();
        airport.init(record("NEW", 2.0, 3.0)).unwrap();
        assert_eq!(airport, Airport::new(record("NEW", 2.0, 3.0)).unwrap());
    }

    #[test]
    fn test_failed_init_keeps_previous_value() {
        let mut airport = Airport::new(record("OLD", 1.0, 1.0)).unwrap();
        assert!(airport.init(record("NEW", 200.0, 3.0)).is_err());
        assert_eq!(airport.gps_id(), "OLD");
    }

    #[test]
    fn test_display_layout() {
        let airport = Airport::new(AirportRecord {
            gps_id: "0R2".to_string(),
            kind: "small_airport".to_string(),
            name: "Lincoln Municipal Airport".to_string(),
            latitude: 40.846176,
            longitude: -96.75471,
            elevation_feet: 1219,
            city: "Lincoln".to_string(),
            country_abbrv: "US".to_string(),
        })
        .unwrap();

        let expected = "GPSID:      0R2\n\
                        Size:       small_airport\n\
                        Name:       Lincoln Municipal Airport\n\
                        Latitude-   40.846176\n\
                        Longitude-  -96.754710\n\
                        Elevation-  1219ft\n\
                        City:       Lincoln\n\
                        Country:    US\n";
        assert_eq!(airport.to_string(), expected);
    }
}
