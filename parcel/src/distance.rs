use crate::{constants::DEG_TO_RAD, error::ParcelError, math::haversine, DegreeLength};
use geo::Coord;
use std::fmt;

/// Closed-form estimators of the distance between two nearby
/// latitude/longitude points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Estimator {
    /// Great-circle distance on a sphere.
    Haversine,

    /// Planar distance scaled by a two-term cosine series for the
    /// length of a degree of latitude and a spherical longitude term.
    PolynomialV1,

    /// Planar distance scaled by [`DegreeLength`], the same factors used
    /// to project a parcel for its area.
    PolynomialV2,
}

impl Estimator {
    /// Every estimator, in report order.
    pub const ALL: [Self; 3] = [Self::Haversine, Self::PolynomialV1, Self::PolynomialV2];

    pub fn name(self) -> &'static str {
        match self {
            Self::Haversine => "haversine",
            Self::PolynomialV1 => "polynomial-v1",
            Self::PolynomialV2 => "polynomial-v2",
        }
    }

    /// Returns the distance in meters between `a` and `b`.
    pub fn distance(self, a: Coord<f64>, b: Coord<f64>) -> Result<f64, ParcelError> {
        match self {
            Self::Haversine => haversine(a, b),
            Self::PolynomialV1 => Ok(polynomial_v1(a, b)),
            Self::PolynomialV2 => Ok(polynomial_v2(a, b)),
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn midpoint_latitude(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.y + b.y) * DEG_TO_RAD / 2.0
}

fn planar_norm(a: Coord<f64>, b: Coord<f64>, factors: DegreeLength) -> f64 {
    let dlat = (b.y - a.y).abs();
    let dlon = (b.x - a.x).abs();
    ((dlat * factors.lat_m).powi(2) + (dlon * factors.lon_m).powi(2)).sqrt()
}

fn polynomial_v1(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let phi = midpoint_latitude(a, b);
    let factors = DegreeLength {
        lat_m: 111_132.954 - 559.822 * (2.0 * phi).cos() + 1.175 * (4.0 * phi).cos(),
        lon_m: DEG_TO_RAD * 6_367_449.0 * phi.cos(),
    };
    planar_norm(a, b, factors)
}

fn polynomial_v2(a: Coord<f64>, b: Coord<f64>) -> f64 {
    planar_norm(a, b, DegreeLength::at(midpoint_latitude(a, b)))
}
