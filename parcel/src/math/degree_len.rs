use geo::Coord;

// Latitude series.
const M1: f64 = 111_132.92;
const M2: f64 = -559.82;
const M3: f64 = 1.175;
const M4: f64 = -0.0023;

// Longitude series.
const P1: f64 = 111_412.84;
const P2: f64 = -93.5;
const P3: f64 = 0.118;

/// Length, in meters, of one degree of latitude and of longitude at a
/// particular latitude.
///
/// The pair is only meaningful near the latitude it was computed for;
/// meridians converge toward the poles so `lon_m` shrinks roughly with
/// `cos(lat)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DegreeLength {
    /// Meters per degree of latitude.
    pub lat_m: f64,

    /// Meters per degree of longitude.
    pub lon_m: f64,
}

impl DegreeLength {
    /// Returns the degree lengths at `lat_rad` (radians) from a
    /// four-term latitude and three-term longitude cosine series.
    pub fn at(lat_rad: f64) -> Self {
        let lat_m = M1
            + (M2 * (2.0 * lat_rad).cos())
            + (M3 * (4.0 * lat_rad).cos())
            + (M4 * (6.0 * lat_rad).cos());
        let lon_m =
            (P1 * lat_rad.cos()) + (P2 * (3.0 * lat_rad).cos()) + (P3 * (5.0 * lat_rad).cos());
        Self { lat_m, lon_m }
    }

    /// Scales a coordinate (or coordinate difference) in degrees to
    /// meters east (`x`) and north (`y`).
    pub fn scale(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: coord.x * self.lon_m,
            y: coord.y * self.lat_m,
        }
    }
}
