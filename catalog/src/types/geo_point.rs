use super::catalog_error::CatalogError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CatalogError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CatalogError::invalid(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CatalogError::invalid(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }
}

/// Fixed point that distance orderings and "closest to" reports measure from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePoint {
    pub label: String,
    pub point: GeoPoint,
}

/// Lincoln Municipal Airport, Nebraska.
pub const LINCOLN: GeoPoint = GeoPoint {
    latitude: 40.846176,
    longitude: -96.75471,
};

impl ReferencePoint {
    pub fn new(label: impl Into<String>, point: GeoPoint) -> Self {
        ReferencePoint {
            label: label.into(),
            point,
        }
    }

    pub fn lincoln() -> Self {
        ReferencePoint::new("Lincoln", LINCOLN)
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        ReferencePoint::lincoln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let p = GeoPoint::new(40.6413, -73.7781).unwrap();
        assert_eq!(p.latitude, 40.6413);
        assert_eq!(p.longitude, -73.7781);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0),
            Err(CatalogError::InvalidInput(_))
        ));
        assert!(GeoPoint::new(0.0, -180.1).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_reference_is_lincoln() {
        let reference = ReferencePoint::default();
        assert_eq!(reference.label, "Lincoln");
        assert_eq!(reference.point, LINCOLN);
    }
}
