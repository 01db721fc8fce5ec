use crate::types::{airport::Airport, catalog_error::CatalogError, geo_point::GeoPoint};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres using the spherical law of cosines.
///
/// The cosine is clamped to [-1, 1] before `acos`, so identical or
/// antipodal points never produce NaN from rounding error.
pub fn distance_km(origin: GeoPoint, destination: GeoPoint) -> f64 {
    // sin²+cos² rounds just below 1 for many latitudes
    if origin == destination {
        return 0.0;
    }

    let lat_a = origin.latitude.to_radians();
    let lat_b = destination.latitude.to_radians();
    let delta_lon = (destination.longitude - origin.longitude).to_radians();

    let cosine = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * delta_lon.cos();

    cosine.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Air distance between two airports, in kilometres.
pub fn air_distance(origin: &Airport, destination: &Airport) -> f64 {
    distance_km(origin.position(), destination.position())
}

/// Estimated travel time, in hours, for a trip visiting `stops` in order.
///
/// Flight time is the summed leg distances over `avg_km_per_hour`; each
/// intermediate stop adds one `avg_layover_hours`.
///
/// # Errors
/// `CatalogError::InvalidInput` when fewer than two stops are given, when
/// the speed is not strictly positive, or when the layover is negative.
pub fn estimated_travel_time_hours(
    stops: &[Airport],
    avg_km_per_hour: f64,
    avg_layover_hours: f64,
) -> Result<f64, CatalogError> {
    if stops.len() < 2 {
        return Err(CatalogError::invalid(format!(
            "a trip needs at least 2 stops, got {}",
            stops.len()
        )));
    }
    if !avg_km_per_hour.is_finite() || avg_km_per_hour <= 0.0 {
        return Err(CatalogError::invalid(format!(
            "average speed must be positive, got {}",
            avg_km_per_hour
        )));
    }
    if !avg_layover_hours.is_finite() || avg_layover_hours < 0.0 {
        return Err(CatalogError::invalid(format!(
            "average layover must not be negative, got {}",
            avg_layover_hours
        )));
    }

    let total_km: f64 = stops
        .windows(2)
        .map(|leg| air_distance(&leg[0], &leg[1]))
        .sum();
    let layovers = (stops.len() - 2) as f64;

    Ok(total_km / avg_km_per_hour + avg_layover_hours * layovers)
}
