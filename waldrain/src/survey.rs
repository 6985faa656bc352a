use crate::{
    data,
    options::{Format, Survey},
};
use anyhow::{Context, Result};
use log::debug;
use parcel::{Parcel, ParcelError, RepresentativeLatitude, SurveyComparison};
use serde::Deserialize;
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::Path,
};

/// JSON parcel description.
///
/// ```json
/// {
///   "corners": [{ "tag": "NW", "lat": 47.6124, "lon": 7.6684 }, ...],
///   "edges_m": [31.10, ...],
///   "area_m2": 1043
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParcelConfig {
    corners: Vec<CornerConfig>,
    edges_m: Vec<f64>,
    area_m2: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CornerConfig {
    tag: String,
    lat: f64,
    lon: f64,
}

impl ParcelConfig {
    fn into_parcel(self) -> Result<Parcel, ParcelError> {
        self.corners
            .into_iter()
            .fold(Parcel::builder(), |builder, CornerConfig { tag, lat, lon }| {
                builder.vertex(tag, lat, lon)
            })
            .edge_lengths(self.edges_m)
            .area(self.area_m2)
            .build()
    }
}

impl Survey {
    pub fn run(&self) -> Result<()> {
        let parcel = load_parcel(self.config.as_deref())?;
        let latitude = if self.halved_latitude {
            RepresentativeLatitude::HalvedMean
        } else {
            RepresentativeLatitude::Mean
        };
        let survey = SurveyComparison::new(&parcel, latitude)?;

        let mut stdout = io::stdout().lock();
        match self.format {
            Format::Text => print_text(&mut stdout, &survey)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut stdout, &survey)?;
                writeln!(stdout)?;
            }
        }
        Ok(())
    }
}

fn load_parcel(path: Option<&Path>) -> Result<Parcel> {
    let Some(path) = path else {
        debug!("using built-in parcel");
        return Ok(data::parcel()?);
    };
    debug!("loading parcel from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: ParcelConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config.into_parcel()?)
}

/// Formats a computed value and its signed deviation from the
/// measured one, e.g. `31.01 (-0.09)`.
fn estimate(computed: f64, deviation: f64) -> String {
    format!("{computed:.2} ({deviation:+.2})")
}

fn print_text<W: Write>(out: &mut W, survey: &SurveyComparison) -> io::Result<()> {
    writeln!(out, "{} points:", survey.vertices.len())?;
    for vertex in &survey.vertices {
        writeln!(out, "  {} [{}, {}]", vertex.tag, vertex.coord.y, vertex.coord.x)?;
    }

    writeln!(out, "centre point:")?;
    writeln!(out, "  [{}, {}]", survey.centre.y, survey.centre.x)?;

    writeln!(out, "edge lengths:")?;
    for edge in &survey.edges {
        write!(out, "{} - {}: {:.2}", edge.from, edge.to, edge.measured_m)?;
        for e in &edge.estimates {
            write!(out, " {}", estimate(e.computed_m, e.deviation_m))?;
        }
        writeln!(out)?;
    }

    let area = &survey.area;
    writeln!(
        out,
        "area: {:.2} {}",
        area.reference_m2,
        estimate(area.computed_m2, area.deviation_m2)
    )
}
