use std::cmp::Ordering;

use crate::geo::distance_km;
use crate::types::{airport::Airport, geo_point::ReferencePoint};

/// The orderings a catalog can be listed in.
///
/// Strings compare byte-wise. Coordinates compare numerically with equal
/// values reported as `Ordering::Equal`.
#[derive(Debug, Clone, PartialEq)]
pub enum SortPolicy {
    ByGpsId,
    ByType,
    ByName,
    ByNameDesc,
    /// Country first, city breaks ties.
    ByCountryThenCity,
    /// South to north.
    ByLatitude,
    /// West to east.
    ByLongitude,
    /// Nearest to the reference point first. Distances are computed on every
    /// comparison, not cached.
    ByDistanceFrom(ReferencePoint),
}

impl SortPolicy {
    /// Compares two airports under this policy.
    pub fn compare(&self, a: &Airport, b: &Airport) -> Ordering {
        match self {
            SortPolicy::ByGpsId => a.gps_id().cmp(b.gps_id()),
            SortPolicy::ByType => a.kind().cmp(b.kind()),
            SortPolicy::ByName => a.name().cmp(b.name()),
            SortPolicy::ByNameDesc => b.name().cmp(a.name()),
            SortPolicy::ByCountryThenCity => a
                .country_abbrv()
                .cmp(b.country_abbrv())
                .then_with(|| a.city().cmp(b.city())),
            SortPolicy::ByLatitude => compare_f64(a.latitude(), b.latitude()),
            SortPolicy::ByLongitude => compare_f64(a.longitude(), b.longitude()),
            SortPolicy::ByDistanceFrom(reference) => compare_f64(
                distance_km(reference.point, a.position()),
                distance_km(reference.point, b.position()),
            ),
        }
    }

    /// Sorts `airports` in place. The sort is stable.
    pub fn sort(&self, airports: &mut [Airport]) {
        airports.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns a sorted copy, leaving `airports` as it was.
    pub fn sorted(&self, airports: &[Airport]) -> Vec<Airport> {
        let mut copy = airports.to_vec();
        self.sort(&mut copy);
        copy
    }

    /// Heading printed above a listing in this order.
    pub fn heading(&self) -> String {
        match self {
            SortPolicy::ByGpsId => "Sort by GPS ID:".to_string(),
            SortPolicy::ByType => "Sort by Type:".to_string(),
            SortPolicy::ByName => "Sort by Name:".to_string(),
            SortPolicy::ByNameDesc => "Sort by Name descending:".to_string(),
            SortPolicy::ByCountryThenCity => "Sort by Country & City:".to_string(),
            SortPolicy::ByLatitude => "Sort by Latitude:".to_string(),
            SortPolicy::ByLongitude => "Sort by Longitude:".to_string(),
            SortPolicy::ByDistanceFrom(reference) => {
                format!("Sort by distance from {}:", reference.label)
            }
        }
    }

    /// Every policy, in the order the report lists them.
    pub fn report_sequence(reference: &ReferencePoint) -> Vec<SortPolicy> {
        vec![
            SortPolicy::ByGpsId,
            SortPolicy::ByType,
            SortPolicy::ByName,
            SortPolicy::ByNameDesc,
            SortPolicy::ByCountryThenCity,
            SortPolicy::ByLatitude,
            SortPolicy::ByLongitude,
            SortPolicy::ByDistanceFrom(reference.clone()),
        ]
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    // coordinates are validated finite on construction
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
