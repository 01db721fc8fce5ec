use std::io::Write;

use logger::Logger;

use crate::ordering::SortPolicy;
use crate::types::{airport::Airport, catalog_error::CatalogError, geo_point::ReferencePoint};

/// A field/value pair that an airport can be searched by. Matching is by
/// string content.
#[derive(Debug, Clone, PartialEq)]
pub enum Category {
    City(String),
    Country(String),
    Kind(String),
}

impl Category {
    pub fn matches(&self, airport: &Airport) -> bool {
        match self {
            Category::City(city) => airport.city() == city,
            Category::Country(country) => airport.country_abbrv() == country,
            Category::Kind(kind) => airport.kind() == kind,
        }
    }
}

/// A category search plus the wording used when reporting its outcome.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub category: Category,
    /// Noun phrase such as "Canadian airport".
    pub description: String,
}

impl Lookup {
    pub fn new(category: Category, description: impl Into<String>) -> Self {
        Lookup {
            category,
            description: description.into(),
        }
    }

    /// New York by city, Canada by country, then large airports by type.
    pub fn defaults() -> Vec<Lookup> {
        vec![
            Lookup::new(Category::City("New York".to_string()), "New York airport"),
            Lookup::new(Category::Country("CA".to_string()), "Canadian airport"),
            Lookup::new(Category::Kind("large_airport".to_string()), "large airport"),
        ]
    }
}

/// Scans the whole slice and returns the first airport in `category`
/// together with its index.
pub fn find_first<'a>(
    airports: &'a [Airport],
    category: &Category,
) -> Option<(usize, &'a Airport)> {
    airports
        .iter()
        .enumerate()
        .find(|(_, airport)| category.matches(airport))
}

/// The airport nearest to `reference`: index 0 once sorted by distance.
pub fn closest_to(airports: &[Airport], reference: &ReferencePoint) -> Option<Airport> {
    SortPolicy::ByDistanceFrom(reference.clone())
        .sorted(airports)
        .into_iter()
        .next()
}

/// The airport at index `len / 2` once sorted west to east. For an even
/// number of airports this is the upper median.
pub fn median_by_longitude(airports: &[Airport]) -> Option<Airport> {
    let mut sorted = SortPolicy::ByLongitude.sorted(airports);
    if sorted.is_empty() {
        return None;
    }
    let middle = sorted.len() / 2;
    Some(sorted.swap_remove(middle))
}

/// Writes the full set of catalog reports.
///
/// Every listing sorts its own copy of the catalog, so the caller's slice
/// keeps its order and lookup indices refer to that order.
pub struct ReportGenerator<'a> {
    reference: ReferencePoint,
    lookups: Vec<Lookup>,
    logger: &'a Logger,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(reference: ReferencePoint, logger: &'a Logger) -> Self {
        ReportGenerator {
            reference,
            lookups: Lookup::defaults(),
            logger,
        }
    }

    pub fn with_lookups(mut self, lookups: Vec<Lookup>) -> Self {
        self.lookups = lookups;
        self
    }

    pub fn generate<W: Write>(
        &self,
        airports: &[Airport],
        out: &mut W,
    ) -> Result<(), CatalogError> {
        self.logger
            .info(&format!("Generating reports for {} airports", airports.len()))?;

        writeln!(out, "Airports:")?;
        write_listing(out, airports)?;

        writeln!(out, "\nSorted lists:")?;
        for policy in SortPolicy::report_sequence(&self.reference) {
            self.logger.debug(&format!("Listing: {}", policy.heading()))?;
            writeln!(out, "{}", policy.heading())?;
            write_listing(out, &policy.sorted(airports))?;
            writeln!(out)?;
        }

        match closest_to(airports, &self.reference) {
            Some(airport) => writeln!(
                out,
                "The closest airport to {} is: {}",
                self.reference.label, airport
            )?,
            None => writeln!(
                out,
                "There is no airport close to {}: the catalog is empty",
                self.reference.label
            )?,
        }

        match median_by_longitude(airports) {
            Some(airport) => writeln!(
                out,
                "The median airport in terms of Longitude is: {}",
                airport
            )?,
            None => writeln!(out, "There is no median airport: the catalog is empty")?,
        }

        for lookup in &self.lookups {
            self.write_lookup(out, airports, lookup)?;
        }

        self.logger.info("Reports complete")?;
        Ok(())
    }

    fn write_lookup<W: Write>(
        &self,
        out: &mut W,
        airports: &[Airport],
        lookup: &Lookup,
    ) -> Result<(), CatalogError> {
        match find_first(airports, &lookup.category) {
            Some((index, airport)) => {
                self.logger.info(&format!(
                    "{:?} matched {} at index {}",
                    lookup.category,
                    airport.gps_id(),
                    index
                ))?;
                writeln!(out, "A {} exists at index: {}", lookup.description, index)?;
                writeln!(out, "{}", airport)?;
            }
            None => {
                self.logger
                    .warn(&format!("{:?} matched nothing", lookup.category))?;
                writeln!(out, "There is no {} in this list", lookup.description)?;
            }
        }
        Ok(())
    }
}

fn write_listing<W: Write>(out: &mut W, airports: &[Airport]) -> Result<(), CatalogError> {
    for airport in airports {
        writeln!(out, "{}", airport)?;
    }
    Ok(())
}
