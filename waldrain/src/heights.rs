use crate::{
    data,
    options::{Format, Terrain},
};
use anyhow::{Context, Result};
use log::debug;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::Path,
};
use terrain::{RowProfile, TerrainGrid};
use textplots::{Chart, Plot, Shape};

/// JSON height offset grid; every row is `[base, delta, delta, ...]` in
/// centimeters.
///
/// ```json
/// { "row_spacing_m": 3, "sample_spacing_m": 3, "rows": [[0, 33, 54], [2, 57, 42]] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridConfig {
    #[serde(default = "default_spacing")]
    row_spacing_m: f64,

    #[serde(default = "default_spacing")]
    sample_spacing_m: f64,

    rows: Vec<Vec<i32>>,
}

fn default_spacing() -> f64 {
    TerrainGrid::DEFAULT_SPACING_M
}

impl GridConfig {
    fn into_grid(self) -> Result<TerrainGrid> {
        Ok(TerrainGrid::from_raw(&self.rows)?
            .with_row_spacing(self.row_spacing_m)?
            .with_sample_spacing(self.sample_spacing_m)?)
    }
}

impl Terrain {
    pub fn run(&self) -> Result<()> {
        let grid = load_grid(self.config.as_deref())?;
        let profiles = grid.integrate();

        let mut stdout = io::stdout().lock();
        match self.format {
            Format::Text => print_text(&mut stdout, &grid, &profiles)?,
            Format::Json => print_json(&mut stdout, &grid, &profiles)?,
        }
        if self.plot {
            plot_ascii(&grid, &profiles);
        }
        Ok(())
    }
}

fn load_grid(path: Option<&Path>) -> Result<TerrainGrid> {
    let Some(path) = path else {
        debug!("using built-in terrain offsets");
        return Ok(data::terrain()?);
    };
    debug!("loading terrain offsets from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: GridConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    config.into_grid()
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format!("{value:5.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_text<W: Write>(out: &mut W, grid: &TerrainGrid, profiles: &[RowProfile]) -> io::Result<()> {
    writeln!(
        out,
        "Offsets from E to W at {} metre distances:",
        grid.sample_spacing_m()
    )?;
    for profile in profiles {
        writeln!(out, "{:5.0} {}", profile.south_m, join(&profile.samples_m))?;
        writeln!(out, "  kum {}", join(&profile.elevations_m))?;
    }
    Ok(())
}

fn print_json<W: Write>(out: &mut W, grid: &TerrainGrid, profiles: &[RowProfile]) -> Result<()> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        row_spacing_m: f64,
        sample_spacing_m: f64,
        rows: &'a [RowProfile],
    }

    serde_json::to_writer_pretty(
        &mut *out,
        &JsonReport {
            row_spacing_m: grid.row_spacing_m(),
            sample_spacing_m: grid.sample_spacing_m(),
            rows: profiles,
        },
    )?;
    writeln!(out)?;
    Ok(())
}

fn plot_ascii(grid: &TerrainGrid, profiles: &[RowProfile]) {
    let spacing: f32 = grid.sample_spacing_m().as_();
    for profile in profiles {
        let plot_data: Vec<(f32, f32)> = profile
            .elevations_m
            .iter()
            .enumerate()
            .map(|(idx, elev)| {
                let x: f32 = idx.as_();
                let y: f32 = elev.as_();
                (x * spacing, y)
            })
            .collect();
        let x_max = plot_data.last().map_or(spacing, |&(x, _)| x.max(spacing));
        println!("{:.0} m south", profile.south_m);
        Chart::new(180, 60, 0.0, x_max)
            .lineplot(&Shape::Lines(&plot_data))
            .display();
    }
}
