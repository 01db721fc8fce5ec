//! Airport catalog: great-circle distances, sort orderings and the text
//! reports built on top of them.

pub mod geo;
pub mod loader;
pub mod ordering;
pub mod report;
pub mod sample;
pub mod trip;
pub mod types;

pub use ordering::SortPolicy;
pub use types::{
    airport::{Airport, AirportRecord},
    catalog_error::CatalogError,
    geo_point::{GeoPoint, ReferencePoint},
};
