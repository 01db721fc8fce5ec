use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::types::{
    airport::{Airport, AirportRecord},
    catalog_error::CatalogError,
};

/// Reads a whole catalog from CSV.
///
/// Expected header:
/// `gps_id,type,name,latitude,longitude,elevation_feet,city,country`.
/// Every row goes through `Airport::new`, so one bad row fails the load.
pub fn load_airports<R: Read>(reader: R) -> Result<Vec<Airport>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut airports = Vec::new();
    for (row, result) in csv_reader.deserialize::<AirportRecord>().enumerate() {
        let record = result?;
        let airport = Airport::new(record).map_err(|e| match e {
            CatalogError::InvalidInput(msg) => {
                CatalogError::InvalidInput(format!("row {}: {}", row + 1, msg))
            }
            other => other,
        })?;
        airports.push(airport);
    }

    Ok(airports)
}

pub fn load_airports_from_path(path: &Path) -> Result<Vec<Airport>, CatalogError> {
    let file = File::open(path)?;
    load_airports(file)
}
