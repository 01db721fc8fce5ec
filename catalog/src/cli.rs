use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, Parser};

#[derive(Debug, Parser)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!())]
pub struct Opts {
    /// CSV catalog to load (built-in sample when absent).
    #[clap(short = 'a', long)]
    pub airports: Option<PathBuf>,
    /// Directory where a log file is written.
    #[clap(short = 'l', long)]
    pub log_dir: Option<PathBuf>,
    /// Log debug lines and echo them to stderr.
    #[clap(short = 'v', long)]
    pub verbose: bool,
    /// Name of the reference point used in distance reports.
    #[clap(long, default_value = "Lincoln")]
    pub reference_label: String,
    /// Reference latitude in degrees.
    #[clap(long, default_value_t = 40.846176, allow_hyphen_values = true)]
    pub reference_lat: f64,
    /// Reference longitude in degrees.
    #[clap(long, default_value_t = -96.75471, allow_hyphen_values = true)]
    pub reference_lon: f64,
    /// Comma-separated GPS ids of a trip to estimate, e.g. KLAX,KORD,KJFK.
    #[clap(short = 't', long, value_delimiter = ',')]
    pub trip: Vec<String>,
    /// Average flight speed for the trip estimate, in km/h.
    #[clap(long, default_value_t = 800.0)]
    pub speed: f64,
    /// Average layover per intermediate stop, in hours.
    #[clap(long, default_value_t = 1.0)]
    pub layover: f64,
}
