use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwatch",
    version,
    about = "Weather-based crop disease risk and spraying advisories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the weather and print a disease advisory
    Advise {
        /// City or place name (defaults to advisory.default_location)
        #[arg(short, long)]
        location: Option<String>,

        /// Crop name as listed by `cropwatch crops` (defaults to advisory.default_crop)
        #[arg(long)]
        crop: Option<String>,

        /// Print the advisory as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a single weather sample without fetching anything
    Predict {
        #[arg(long)]
        crop: String,

        /// Temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,

        /// Relative humidity in %
        #[arg(long)]
        humidity: f64,

        /// Rainfall in mm
        #[arg(long, default_value_t = 0.0)]
        rain: f64,
    },
    /// List crops and their disease triggers
    Crops,
    /// Run interactive setup
    Init,
    /// Validate config and test the weather connection
    Check,
}
