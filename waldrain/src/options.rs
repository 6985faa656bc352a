use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Check a parcel survey against geodetic estimates and sum up terrain
/// height offsets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub enum Cli {
    /// Compare measured edge lengths and area with computed
    /// estimates.
    Survey(Survey),

    /// Convert rows of relative height offsets into absolute
    /// elevations.
    Terrain(Terrain),
}

#[derive(Debug, Clone, Args)]
pub struct Survey {
    /// JSON parcel description. Defaults to the built-in Waldrain
    /// parcel.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Halve the mean latitude before computing degree lengths for the
    /// area, as older reports did.
    #[arg(long, default_value_t = false)]
    pub halved_latitude: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Args)]
pub struct Terrain {
    /// JSON height offset grid. Defaults to the built-in Waldrain
    /// offsets.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plot every row's elevation profile to the terminal.
    #[arg(short, long, default_value_t = false)]
    pub plot: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable report.
    Text,

    /// Structured results as JSON.
    Json,
}
