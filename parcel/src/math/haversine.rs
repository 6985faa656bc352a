//! Great-circle distance on a sphere with the equatorial earth radius.
//!
//! [Haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)

use crate::{
    constants::{DEG_TO_RAD, EARTH_RADIUS_KM},
    error::ParcelError,
};
use geo::Coord;

/// Returns the haversine distance in meters between `a` and `b`.
///
/// Fails with [`ParcelError::DomainRange`] instead of clamping when the
/// haversine term leaves `[0, 1]`, as that only happens for malformed
/// input.
pub(crate) fn haversine(a: Coord<f64>, b: Coord<f64>) -> Result<f64, ParcelError> {
    let phi1 = a.y * DEG_TO_RAD;
    let phi2 = b.y * DEG_TO_RAD;
    let dphi = (b.y - a.y) * DEG_TO_RAD;
    let dlam = (b.x - a.x) * DEG_TO_RAD;

    let h = (dphi / 2.0).sin() * (dphi / 2.0).sin()
        + phi1.cos() * phi2.cos() * (dlam / 2.0).sin() * (dlam / 2.0).sin();
    if !(0.0..=1.0).contains(&h) {
        return Err(ParcelError::DomainRange(h));
    }

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    Ok(EARTH_RADIUS_KM * c * 1000.0)
}
