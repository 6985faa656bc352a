use crate::{profile::Profiles, RowProfile, TerrainError};

/// Meters per centimeter.
const CM: f64 = 0.01;

/// Converts a raw centimeter sample to meters.
pub fn cm_to_m(cm: i32) -> f64 {
    f64::from(cm) * CM
}

/// Converts meters back to the nearest whole centimeter.
#[allow(clippy::cast_possible_truncation)]
pub fn m_to_cm(m: f64) -> i32 {
    (m * 100.0).round() as i32
}

/// One row of height offsets, in centimeters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerrainRow {
    /// Vertical offset of this row's first sample relative to the
    /// previous row's first sample.
    base_cm: i32,

    /// Drop from each sample to the next along the row.
    deltas_cm: Vec<i32>,
}

impl TerrainRow {
    pub fn new(base_cm: i32, deltas_cm: Vec<i32>) -> Self {
        Self { base_cm, deltas_cm }
    }

    /// Returns a row from `[base, delta, delta, ...]`, or `None` if
    /// `raw` is empty.
    pub fn from_raw(raw: &[i32]) -> Option<Self> {
        let (base_cm, deltas_cm) = raw.split_first()?;
        Some(Self::new(*base_cm, deltas_cm.to_vec()))
    }

    pub fn base_cm(&self) -> i32 {
        self.base_cm
    }

    pub fn deltas_cm(&self) -> &[i32] {
        &self.deltas_cm
    }

    /// Number of horizontal sample positions covered by this row.
    pub fn sample_count(&self) -> usize {
        self.deltas_cm.len() + 1
    }

    /// Returns the base offset followed by every delta, in meters.
    pub fn samples_m(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.base_cm)
            .chain(self.deltas_cm.iter().copied())
            .map(cm_to_m)
    }
}

/// Rows of height offsets sampled on a fixed rectangular grid.
///
/// Rows may differ in length (rows along the parcel edge are often
/// truncated) but share the same horizontal sample spacing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerrainGrid {
    rows: Vec<TerrainRow>,

    /// Distance between consecutive rows, in meters.
    row_spacing_m: f64,

    /// Distance between consecutive samples within a row, in meters.
    sample_spacing_m: f64,
}

impl TerrainGrid {
    pub const DEFAULT_SPACING_M: f64 = 3.0;

    pub fn new(rows: Vec<TerrainRow>) -> Self {
        Self {
            rows,
            row_spacing_m: Self::DEFAULT_SPACING_M,
            sample_spacing_m: Self::DEFAULT_SPACING_M,
        }
    }

    /// Returns a grid from raw rows of `[base, delta, delta, ...]`
    /// centimeter values.
    pub fn from_raw<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, TerrainError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(idx, raw)| TerrainRow::from_raw(raw.as_ref()).ok_or(TerrainError::EmptyRow(idx)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rows))
    }

    /// Distance between rows (meters, defaults to 3).
    pub fn with_row_spacing(mut self, meters: f64) -> Result<Self, TerrainError> {
        self.row_spacing_m = check_spacing(meters)?;
        Ok(self)
    }

    /// Distance between samples within a row (meters, defaults to 3).
    pub fn with_sample_spacing(mut self, meters: f64) -> Result<Self, TerrainError> {
        self.sample_spacing_m = check_spacing(meters)?;
        Ok(self)
    }

    pub fn rows(&self) -> &[TerrainRow] {
        &self.rows
    }

    pub fn row_spacing_m(&self) -> f64 {
        self.row_spacing_m
    }

    pub fn sample_spacing_m(&self) -> f64 {
        self.sample_spacing_m
    }

    /// Returns an iterator of absolute elevation profiles, one per row.
    pub fn profiles(&self) -> Profiles<'_> {
        Profiles::new(&self.rows, self.row_spacing_m)
    }

    /// Integrates every row into absolute elevations.
    pub fn integrate(&self) -> Vec<RowProfile> {
        self.profiles().collect()
    }
}

fn check_spacing(meters: f64) -> Result<f64, TerrainError> {
    if meters.is_finite() && meters > 0.0 {
        Ok(meters)
    } else {
        Err(TerrainError::Spacing(meters.to_string()))
    }
}
