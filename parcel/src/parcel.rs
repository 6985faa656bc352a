use crate::error::ParcelError;
use geo::{coord, Coord};
use itertools::Itertools;

/// A tagged parcel corner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vertex {
    /// Short label, e.g. `NW`.
    pub tag: String,

    /// Location in decimal degrees (`x` = longitude, `y` = latitude).
    pub coord: Coord<f64>,
}

/// One boundary edge and its field-taped length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    pub from: &'a Vertex,
    pub to: &'a Vertex,
    pub measured_m: f64,
}

/// A surveyed land parcel: an implicitly closed polygon of corners, the
/// measured length of each boundary edge, and the measured area.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    vertices: Vec<Vertex>,
    edges_m: Vec<f64>,
    area_m2: f64,
}

impl Parcel {
    pub fn builder() -> ParcelBuilder {
        ParcelBuilder {
            vertices: Vec::new(),
            edges_m: None,
            area_m2: None,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn coords(&self) -> Vec<Coord<f64>> {
        self.vertices.iter().map(|vertex| vertex.coord).collect()
    }

    /// Surveyed area in square meters.
    pub fn reference_area(&self) -> f64 {
        self.area_m2
    }

    /// Returns the mean latitude and mean longitude of all corners.
    #[allow(clippy::cast_precision_loss)]
    pub fn centre(&self) -> Coord<f64> {
        let n = self.vertices.len() as f64;
        let (x, y) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(x, y), vertex| (x + vertex.coord.x, y + vertex.coord.y));
        coord!(x: x / n, y: y / n)
    }

    /// Returns the boundary edges in vertex order, closing back to the
    /// first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.vertices
            .iter()
            .circular_tuple_windows::<(_, _)>()
            .zip(&self.edges_m)
            .map(|((from, to), measured_m)| Edge {
                from,
                to,
                measured_m: *measured_m,
            })
    }
}

pub struct ParcelBuilder {
    /// Corners in boundary order (at least 3).
    vertices: Vec<Vertex>,

    /// Measured edge lengths in meters, one per corner (required).
    edges_m: Option<Vec<f64>>,

    /// Measured area in square meters (required).
    area_m2: Option<f64>,
}

impl ParcelBuilder {
    /// Appends a corner given in decimal degrees.
    #[must_use]
    pub fn vertex(mut self, tag: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.vertices.push(Vertex {
            tag: tag.into(),
            coord: coord!(x: lon, y: lat),
        });
        self
    }

    /// Measured edge lengths in meters (required).
    #[must_use]
    pub fn edge_lengths<I: IntoIterator<Item = f64>>(mut self, meters: I) -> Self {
        self.edges_m = Some(meters.into_iter().collect());
        self
    }

    /// Measured area in square meters (required).
    #[must_use]
    pub fn area(mut self, square_meters: f64) -> Self {
        self.area_m2 = Some(square_meters);
        self
    }

    pub fn build(self) -> Result<Parcel, ParcelError> {
        let Self {
            vertices,
            edges_m,
            area_m2,
        } = self;
        let edges_m = edges_m.ok_or(ParcelError::Builder("edge_lengths"))?;
        let area_m2 = area_m2.ok_or(ParcelError::Builder("area"))?;

        if vertices.len() < 3 {
            return Err(ParcelError::TooFewVertices(vertices.len()));
        }
        if edges_m.len() != vertices.len() {
            return Err(ParcelError::EdgeCount {
                vertices: vertices.len(),
                edges: edges_m.len(),
            });
        }

        Ok(Parcel {
            vertices,
            edges_m,
            area_m2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Parcel;
    use crate::{error::ParcelError, fixtures::waldrain};
    use approx::assert_relative_eq;

    #[test]
    fn test_edges_wrap_around() {
        let parcel = waldrain();
        let tags: Vec<(&str, &str, f64)> = parcel
            .edges()
            .map(|edge| (edge.from.tag.as_str(), edge.to.tag.as_str(), edge.measured_m))
            .collect();
        assert_eq!(
            tags,
            [
                ("NW", "NO", 31.10),
                ("NO", "OM", 13.34),
                ("OM", "SO", 22.51),
                ("SO", "SW", 29.63),
                ("SW", "WM", 19.26),
                ("WM", "NW", 16.24),
            ]
        );
    }

    #[test]
    fn test_centre() {
        let centre = waldrain().centre();
        assert_relative_eq!(centre.y, 47.612_250_533_495_09, epsilon = 1e-12);
        assert_relative_eq!(centre.x, 7.668_591_544_194_423, epsilon = 1e-12);
    }

    #[test]
    fn test_edge_count_mismatch() {
        let err = Parcel::builder()
            .vertex("A", 0.0, 0.0)
            .vertex("B", 0.0, 0.001)
            .vertex("C", 0.001, 0.0)
            .edge_lengths([1.0, 2.0])
            .area(1.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ParcelError::EdgeCount {
                vertices: 3,
                edges: 2
            }
        );
        assert!(err.is_configuration_mismatch());
    }

    #[test]
    fn test_too_few_vertices() {
        let err = Parcel::builder()
            .vertex("A", 0.0, 0.0)
            .vertex("B", 0.0, 0.001)
            .edge_lengths([1.0, 1.0])
            .area(0.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ParcelError::TooFewVertices(2));
    }

    #[test]
    fn test_missing_parameters() {
        let builder = || {
            Parcel::builder()
                .vertex("A", 0.0, 0.0)
                .vertex("B", 0.0, 0.001)
                .vertex("C", 0.001, 0.0)
        };
        assert_eq!(
            builder().area(1.0).build(),
            Err(ParcelError::Builder("edge_lengths"))
        );
        assert_eq!(
            builder().edge_lengths([1.0, 1.0, 1.0]).build(),
            Err(ParcelError::Builder("area"))
        );
    }
}
