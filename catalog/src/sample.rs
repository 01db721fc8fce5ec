use crate::types::{
    airport::{Airport, AirportRecord},
    catalog_error::CatalogError,
};

/// Demo catalog used when no CSV file is given.
pub fn sample_airports() -> Result<Vec<Airport>, CatalogError> {
    let airports = vec![
        (
            "0R2",
            "small_airport",
            "Lincoln Municipal Airport",
            40.846176,
            -96.75471,
            1219,
            "Lincoln",
            "US",
        ),
        (
            "KLNK",
            "medium_airport",
            "Lincoln Airport",
            40.851002,
            -96.759201,
            1219,
            "Lincoln",
            "US",
        ),
        (
            "KJFK",
            "large_airport",
            "John F Kennedy International Airport",
            40.6413,
            -73.7781,
            13,
            "New York",
            "US",
        ),
        (
            "KLAX",
            "large_airport",
            "Los Angeles International Airport",
            33.9416,
            -118.4085,
            125,
            "Los Angeles",
            "US",
        ),
        (
            "KORD",
            "large_airport",
            "Chicago O'Hare International Airport",
            41.9786,
            -87.9048,
            672,
            "Chicago",
            "US",
        ),
        (
            "KOMA",
            "medium_airport",
            "Eppley Airfield",
            41.3032,
            -95.8941,
            984,
            "Omaha",
            "US",
        ),
        (
            "CYYZ",
            "large_airport",
            "Toronto Pearson International Airport",
            43.6777,
            -79.6248,
            569,
            "Toronto",
            "CA",
        ),
        (
            "CYVR",
            "large_airport",
            "Vancouver International Airport",
            49.1967,
            -123.1815,
            14,
            "Vancouver",
            "CA",
        ),
        (
            "SAEZ",
            "large_airport",
            "Ministro Pistarini International Airport",
            -34.8222,
            -58.5358,
            67,
            "Buenos Aires",
            "AR",
        ),
        (
            "SABE",
            "medium_airport",
            "Aeroparque Jorge Newbery",
            -34.5592,
            -58.4156,
            18,
            "Buenos Aires",
            "AR",
        ),
        (
            "EGLL",
            "large_airport",
            "London Heathrow Airport",
            51.4700,
            -0.4543,
            83,
            "London",
            "GB",
        ),
        (
            "YSSY",
            "large_airport",
            "Sydney Kingsford Smith International Airport",
            -33.9399,
            151.1753,
            21,
            "Sydney",
            "AU",
        ),
    ];

    airports
        .into_iter()
        .map(
            |(gps_id, kind, name, latitude, longitude, elevation_feet, city, country)| {
                Airport::new(AirportRecord {
                    gps_id: gps_id.to_string(),
                    kind: kind.to_string(),
                    name: name.to_string(),
                    latitude,
                    longitude,
                    elevation_feet,
                    city: city.to_string(),
                    country_abbrv: country.to_string(),
                })
            },
        )
        .collect()
}
