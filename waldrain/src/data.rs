//! The Waldrain parcel, surveyed in 2020.

#![allow(clippy::excessive_precision)]

use parcel::{Parcel, ParcelError};
use terrain::{TerrainError, TerrainGrid};

/// Corner tags and (lat, lon) in decimal degrees, clockwise from the
/// north-west corner.
const CORNERS: [(&str, f64, f64); 6] = [
    ("NW", 47.61240287934088, 7.668455564143808),
    ("NO", 47.61238603493116, 7.66886803694362),
    ("OM", 47.61227235282722, 7.668805013356426),
    ("SO", 47.612081232450755, 7.668710772100395),
    ("SW", 47.61209766306042, 7.668317607008359),
    ("WM", 47.612263038360155, 7.668392271613928),
];

/// Taped edge lengths in meters: north, east (two), south, west (two).
const EDGES_M: [f64; 6] = [31.10, 13.34, 22.51, 29.63, 19.26, 16.24];

const AREA_M2: f64 = 1043.0;

/// Height offsets in centimeters along the north boundary, east to
/// west, every 3 m. Each following row lies 3 m further south.
const OFFSETS_CM: [&[i32]; 7] = [
    &[0, 33, 54, 61, 54, 65, 51, 61, 67, 83, 68],
    &[2, 57, 42, 70, 57, 47, 62, 61, 72, 96, 80],
    &[0, 78, 45, 61, 54, 64, 50, 73, 90, 130, 40],
    &[0, 88, 68, 52, 37, 66, 61, 69, 96, 111, 28],
    &[-5, 108, 56, 38, 52, 80, 51, 83, 144, 53, 29],
    &[-3, 122, 51, 20, 99, 65, 73, 77, 123, 34, 37],
    &[-5, 130, 64, 44, 74, 62, 59],
];

pub fn parcel() -> Result<Parcel, ParcelError> {
    CORNERS
        .iter()
        .fold(Parcel::builder(), |builder, (tag, lat, lon)| {
            builder.vertex(*tag, *lat, *lon)
        })
        .edge_lengths(EDGES_M)
        .area(AREA_M2)
        .build()
}

pub fn terrain() -> Result<TerrainGrid, TerrainError> {
    TerrainGrid::from_raw(&OFFSETS_CM)
}
