use crate::TerrainRow;
use log::debug;
use std::slice;

/// Absolute elevations along one terrain row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowProfile {
    /// Distance of this row from the first row, in meters.
    pub south_m: f64,

    /// The row's raw samples (base offset, then deltas) in meters.
    pub samples_m: Vec<f64>,

    /// Absolute elevation at each sample position, in meters relative
    /// to the first sample of the first row.
    pub elevations_m: Vec<f64>,
}

/// Iterator over the [`RowProfile`]s of a grid, in row order.
///
/// Each row's first elevation is the running sum of all base offsets
/// so far, so rows can only be produced in order.
#[derive(Debug, Clone)]
pub struct Profiles<'a> {
    rows: slice::Iter<'a, TerrainRow>,
    row_spacing_m: f64,

    /// Absolute elevation of the previous row's first sample.
    line_begin_m: f64,
    south_m: f64,
}

impl<'a> Profiles<'a> {
    pub(crate) fn new(rows: &'a [TerrainRow], row_spacing_m: f64) -> Self {
        Self {
            rows: rows.iter(),
            row_spacing_m,
            line_begin_m: 0.0,
            south_m: 0.0,
        }
    }
}

impl<'a> Iterator for Profiles<'a> {
    type Item = RowProfile;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        let samples_m: Vec<f64> = row.samples_m().collect();
        let (base_m, deltas_m) = samples_m.split_first()?;

        self.line_begin_m += base_m;
        let mut elevations_m = Vec::with_capacity(samples_m.len());
        let mut h = self.line_begin_m;
        elevations_m.push(h);
        for dh in deltas_m {
            h -= dh;
            elevations_m.push(h);
        }

        debug!(
            "row; south: {}, begin: {}, end: {}",
            self.south_m, self.line_begin_m, h
        );

        let profile = RowProfile {
            south_m: self.south_m,
            samples_m,
            elevations_m,
        };
        self.south_m += self.row_spacing_m;
        Some(profile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<'a> ExactSizeIterator for Profiles<'a> {
    fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::{cm_to_m, TerrainGrid};
    use approx::assert_relative_eq;

    const WALDRAIN: [&[i32]; 7] = [
        &[0, 33, 54, 61, 54, 65, 51, 61, 67, 83, 68],
        &[2, 57, 42, 70, 57, 47, 62, 61, 72, 96, 80],
        &[0, 78, 45, 61, 54, 64, 50, 73, 90, 130, 40],
        &[0, 88, 68, 52, 37, 66, 61, 69, 96, 111, 28],
        &[-5, 108, 56, 38, 52, 80, 51, 83, 144, 53, 29],
        &[-3, 122, 51, 20, 99, 65, 73, 77, 123, 34, 37],
        &[-5, 130, 64, 44, 74, 62, 59],
    ];

    fn assert_profile(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_first_row() {
        let grid = TerrainGrid::from_raw(&WALDRAIN[..1]).unwrap();
        let profiles = grid.integrate();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].south_m, 0.0);
        assert_eq!(profiles[0].elevations_m[0], 0.0);
        assert_profile(
            &profiles[0].elevations_m,
            &[
                0.0, -0.33, -0.87, -1.48, -2.02, -2.67, -3.18, -3.79, -4.46, -5.29, -5.97,
            ],
        );
    }

    #[test]
    fn test_waldrain() {
        let grid = TerrainGrid::from_raw(&WALDRAIN).unwrap();
        let profiles = grid.integrate();
        assert_eq!(profiles.len(), 7);

        let south: Vec<f64> = profiles.iter().map(|p| p.south_m).collect();
        assert_eq!(south, [0.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0]);

        assert_profile(
            &profiles[1].elevations_m,
            &[
                0.02, -0.55, -0.97, -1.67, -2.24, -2.71, -3.33, -3.94, -4.66, -5.62, -6.42,
            ],
        );
        assert_profile(
            &profiles[6].elevations_m,
            &[-0.11, -1.41, -2.05, -2.49, -3.23, -3.85, -4.44],
        );
    }

    #[test]
    fn test_line_begin_threads_through_rows() {
        let grid = TerrainGrid::from_raw(&WALDRAIN).unwrap();
        let mut running = 0.0;
        for (row, profile) in grid.rows().iter().zip(grid.profiles()) {
            running += cm_to_m(row.base_cm());
            assert_eq!(profile.elevations_m[0], running);
            assert_eq!(profile.elevations_m.len(), row.sample_count());
            assert_eq!(profile.samples_m[0], cm_to_m(row.base_cm()));
        }
    }

    #[test]
    fn test_row_spacing_only_labels() {
        let grid = TerrainGrid::from_raw(&WALDRAIN).unwrap();
        let wide = grid.clone().with_row_spacing(10.0).unwrap();
        for (a, b) in grid.profiles().zip(wide.profiles()) {
            assert_eq!(a.elevations_m, b.elevations_m);
        }
        assert_eq!(wide.integrate()[2].south_m, 20.0);
    }

    #[test]
    fn test_exact_size() {
        let grid = TerrainGrid::from_raw(&WALDRAIN).unwrap();
        let mut profiles = grid.profiles();
        assert_eq!(profiles.len(), 7);
        profiles.next();
        assert_eq!(profiles.len(), 6);
        assert_eq!(TerrainGrid::new(vec![]).integrate(), vec![]);
    }
}
