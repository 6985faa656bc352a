//! Terrain height-offset integration.
//!
//! Field crews record terrain as rows of relative height offsets in
//! centimeters: each row starts with a vertical offset of its first
//! sample against the first sample of the previous row, followed by
//! the drop from each sample to the next along the row. [`TerrainGrid`]
//! turns those rows into absolute elevations.

mod error;
mod grid;
mod profile;

pub use crate::{
    error::TerrainError,
    grid::{cm_to_m, m_to_cm, TerrainGrid, TerrainRow},
    profile::{Profiles, RowProfile},
};
