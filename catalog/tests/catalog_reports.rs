use std::path::PathBuf;

use airport_catalog::{
    geo::air_distance,
    loader::load_airports_from_path,
    report::{find_first, median_by_longitude, Category, ReportGenerator},
    trip::Trip,
    ReferencePoint, SortPolicy,
};
use logger::Logger;

fn demo_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join("airports.csv")
}

#[test]
fn test_demo_catalog_loads() {
    let airports = load_airports_from_path(&demo_catalog()).expect("Failed to load demo catalog");
    assert_eq!(airports.len(), 12);
}

#[test]
fn test_demo_catalog_report() {
    let airports = load_airports_from_path(&demo_catalog()).unwrap();
    let logger = Logger::silent();
    let mut out = Vec::new();
    ReportGenerator::new(ReferencePoint::lincoln(), &logger)
        .generate(&airports, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("The closest airport to Lincoln is: GPSID:      0R2"));
    assert!(text.contains("A New York airport exists at index: 1"));
    assert!(text.contains("A Canadian airport exists at index: 5"));
    assert!(text.contains("A large airport exists at index: 1"));
    // one block per airport in the unsorted listing and in each of the 8 sorted ones
    assert_eq!(text.matches("GPSID:").count(), 12 * 9 + 2 + 3);
}

#[test]
fn test_demo_catalog_median_and_lookups() {
    let airports = load_airports_from_path(&demo_catalog()).unwrap();
    // west to east: KSEA, CYYC, KDEN, KBFF, MMMX, 0R2, KLGA, KJFK, CYUL, SBGR, LFPG, RJTT
    assert_eq!(median_by_longitude(&airports).unwrap().gps_id(), "KLGA");
    assert!(find_first(&airports, &Category::Country("DE".to_string())).is_none());
}

#[test]
fn test_demo_trip() {
    let airports = load_airports_from_path(&demo_catalog()).unwrap();
    let trip = Trip::from_ids(&airports, &["KSEA", "KDEN", "KJFK"]).unwrap();
    let legs = air_distance(&trip.stops()[0], &trip.stops()[1])
        + air_distance(&trip.stops()[1], &trip.stops()[2]);
    let hours = trip.estimated_hours(850.0, 1.25).unwrap();
    assert!((hours - (legs / 850.0 + 1.25)).abs() < 1e-9);
}

#[test]
fn test_distance_order_starts_near_lincoln() {
    let airports = load_airports_from_path(&demo_catalog()).unwrap();
    let sorted = SortPolicy::ByDistanceFrom(ReferencePoint::lincoln()).sorted(&airports);
    assert_eq!(sorted[0].gps_id(), "0R2");
    assert_eq!(sorted[1].gps_id(), "KBFF");
}
