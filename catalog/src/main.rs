mod cli;

use std::io::{self, Write};

use airport_catalog::{
    loader::load_airports_from_path, report::ReportGenerator, sample::sample_airports,
    trip::Trip, CatalogError, GeoPoint, ReferencePoint,
};
use chrono::Utc;
use clap::Parser;
use logger::{LogLevel, Logger};

use crate::cli::Opts;

fn build_logger(opts: &Opts) -> Result<Logger, CatalogError> {
    let level = if opts.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    match &opts.log_dir {
        Some(dir) => {
            let run_name = format!("reports_{}", Utc::now().format("%Y%m%d_%H%M%S"));
            Ok(Logger::new(dir, &run_name)?
                .with_level(level)
                .with_console(opts.verbose))
        }
        // stderr only: keep it to warnings unless asked
        None if opts.verbose => Ok(Logger::console().with_level(level)),
        None => Ok(Logger::console().with_level(LogLevel::Warn)),
    }
}

fn main() -> Result<(), CatalogError> {
    let opts = Opts::parse();
    let logger = build_logger(&opts)?;

    let airports = match &opts.airports {
        Some(path) => {
            let airports = load_airports_from_path(path)?;
            logger.info(&format!(
                "Loaded {} airports from {}",
                airports.len(),
                path.display()
            ))?;
            airports
        }
        None => {
            logger.debug("Using the built-in sample catalog")?;
            sample_airports()?
        }
    };

    let reference = ReferencePoint::new(
        opts.reference_label.clone(),
        GeoPoint::new(opts.reference_lat, opts.reference_lon)?,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ReportGenerator::new(reference, &logger).generate(&airports, &mut out)?;

    if !opts.trip.is_empty() {
        let trip = Trip::from_ids(&airports, &opts.trip)?;
        let hours = trip.estimated_hours(opts.speed, opts.layover)?;
        writeln!(
            out,
            "\nEstimated travel time for {}: {:.2} hours ({:.0} km)",
            trip.route(),
            hours,
            trip.total_distance_km()
        )?;
    }

    out.flush()?;
    Ok(())
}
