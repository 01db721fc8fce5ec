use crate::geo::{air_distance, estimated_travel_time_hours};
use crate::types::{airport::Airport, catalog_error::CatalogError};

/// An ordered list of stops picked out of a catalog.
#[derive(Debug, Clone)]
pub struct Trip {
    stops: Vec<Airport>,
}

impl Trip {
    /// Resolves each GPS id against `airports`, keeping the given order.
    ///
    /// # Errors
    /// `CatalogError::InvalidInput` for an unknown id or fewer than two stops.
    pub fn from_ids<S: AsRef<str>>(
        airports: &[Airport],
        ids: &[S],
    ) -> Result<Self, CatalogError> {
        let stops = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                airports
                    .iter()
                    .find(|airport| airport.gps_id() == id)
                    .cloned()
                    .ok_or_else(|| CatalogError::invalid(format!("unknown airport {}", id)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if stops.len() < 2 {
            return Err(CatalogError::invalid("a trip needs at least 2 stops"));
        }

        Ok(Trip { stops })
    }

    pub fn stops(&self) -> &[Airport] {
        &self.stops
    }

    pub fn total_distance_km(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|leg| air_distance(&leg[0], &leg[1]))
            .sum()
    }

    pub fn estimated_hours(
        &self,
        avg_km_per_hour: f64,
        avg_layover_hours: f64,
    ) -> Result<f64, CatalogError> {
        estimated_travel_time_hours(&self.stops, avg_km_per_hour, avg_layover_hours)
    }

    /// Stops joined by arrows, e.g. `KJFK -> KORD -> KLAX`.
    pub fn route(&self) -> String {
        self.stops
            .iter()
            .map(Airport::gps_id)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
