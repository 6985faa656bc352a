mod data;
mod heights;
mod options;
mod survey;

use anyhow::Result;
use clap::Parser;
use options::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli {
        Cli::Survey(survey) => survey.run(),
        Cli::Terrain(terrain) => terrain.run(),
    }
}
