//! # Parcel
//!
//! `parcel` checks a ground survey of a small land parcel against
//! closed-form estimates of earth-surface distance and planar area.
//!
//! Coordinates are [`geo::Coord`]s in decimal degrees with `x` holding
//! the longitude and `y` the latitude.

mod area;
mod constants;
mod distance;
mod error;
mod math;
mod parcel;
mod projection;
mod survey;

#[cfg(test)]
mod fixtures;

pub use crate::{
    area::{signed_area, unsigned_area},
    constants::{DEG_TO_RAD, EARTH_RADIUS_KM},
    distance::Estimator,
    error::ParcelError,
    math::DegreeLength,
    parcel::{Edge, Parcel, ParcelBuilder, Vertex},
    projection::{Projection, RepresentativeLatitude},
    survey::{AreaComparison, EdgeComparison, Estimate, SurveyComparison},
};
pub use geo;
