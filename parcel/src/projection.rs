use crate::{constants::DEG_TO_RAD, DegreeLength};
use geo::Coord;
use log::debug;

/// How a single latitude is chosen to linearize a set of coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RepresentativeLatitude {
    /// Arithmetic mean of all latitudes.
    #[default]
    Mean,

    /// Half of the arithmetic mean of all latitudes. Reproduces older
    /// area reports; overstates the longitude scale considerably at
    /// mid latitudes.
    HalvedMean,
}

impl RepresentativeLatitude {
    /// Returns the representative latitude of `coords` in radians.
    #[allow(clippy::cast_precision_loss)]
    pub fn of(self, coords: &[Coord<f64>]) -> f64 {
        let mean = coords.iter().map(|coord| coord.y).sum::<f64>() / coords.len() as f64;
        match self {
            Self::Mean => mean * DEG_TO_RAD,
            Self::HalvedMean => mean / 2.0 * DEG_TO_RAD,
        }
    }
}

/// Local flat-earth projection of geodetic coordinates to meters.
///
/// A single [`DegreeLength`] pair is used for every coordinate, which is
/// only reasonable for sets spanning a few hundred meters at most.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Latitude (radians) the factors were evaluated at.
    lat_rad: f64,
    factors: DegreeLength,
}

impl Projection {
    pub fn new(coords: &[Coord<f64>], latitude: RepresentativeLatitude) -> Self {
        let lat_rad = latitude.of(coords);
        let factors = DegreeLength::at(lat_rad);
        debug!("projection; {latitude:?} lat_rad: {lat_rad}, factors: {factors:?}");
        Self { lat_rad, factors }
    }

    pub fn latitude(&self) -> f64 {
        self.lat_rad
    }

    pub fn factors(&self) -> DegreeLength {
        self.factors
    }

    /// Returns `coords` scaled to meters east (`x`) and north (`y`) of
    /// the equator/prime meridian intersection.
    pub fn project(&self, coords: &[Coord<f64>]) -> Vec<Coord<f64>> {
        coords
            .iter()
            .map(|coord| self.factors.scale(*coord))
            .collect()
    }
}
