use crate::{
    area::unsigned_area, error::ParcelError, DegreeLength, Estimator, Parcel, Projection,
    RepresentativeLatitude, Vertex,
};
use geo::Coord;
use log::debug;

/// One estimator's result for one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Estimate {
    pub estimator: Estimator,

    /// Computed length in meters.
    pub computed_m: f64,

    /// `computed_m - measured_m`.
    pub deviation_m: f64,
}

/// Measured versus computed length of one boundary edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EdgeComparison {
    pub from: String,
    pub to: String,
    pub measured_m: f64,

    /// One entry per [`Estimator::ALL`], in the same order.
    pub estimates: Vec<Estimate>,
}

/// Measured versus computed parcel area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AreaComparison {
    pub latitude: RepresentativeLatitude,

    /// Degree lengths the corners were projected with.
    pub factors: DegreeLength,

    pub reference_m2: f64,
    pub computed_m2: f64,

    /// `computed_m2 - reference_m2`.
    pub deviation_m2: f64,
}

/// Every edge and the area of a [`Parcel`] compared against the
/// closed-form estimates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurveyComparison {
    pub vertices: Vec<Vertex>,

    /// Mean latitude and longitude of the corners.
    pub centre: Coord<f64>,

    pub edges: Vec<EdgeComparison>,
    pub area: AreaComparison,
}

impl SurveyComparison {
    pub fn new(parcel: &Parcel, latitude: RepresentativeLatitude) -> Result<Self, ParcelError> {
        let edges = parcel
            .edges()
            .map(|edge| -> Result<EdgeComparison, ParcelError> {
                let estimates = Estimator::ALL
                    .into_iter()
                    .map(|estimator| -> Result<Estimate, ParcelError> {
                        let computed_m = estimator.distance(edge.from.coord, edge.to.coord)?;
                        Ok(Estimate {
                            estimator,
                            computed_m,
                            deviation_m: computed_m - edge.measured_m,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                debug!(
                    "edge {}-{}; measured: {}, estimates: {:?}",
                    edge.from.tag, edge.to.tag, edge.measured_m, estimates
                );
                Ok(EdgeComparison {
                    from: edge.from.tag.clone(),
                    to: edge.to.tag.clone(),
                    measured_m: edge.measured_m,
                    estimates,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let coords = parcel.coords();
        let projection = Projection::new(&coords, latitude);
        let computed_m2 = unsigned_area(&projection.project(&coords));
        let reference_m2 = parcel.reference_area();
        debug!("area; reference: {reference_m2}, computed: {computed_m2}");

        Ok(Self {
            vertices: parcel.vertices().to_vec(),
            centre: parcel.centre(),
            edges,
            area: AreaComparison {
                latitude,
                factors: projection.factors(),
                reference_m2,
                computed_m2,
                deviation_m2: computed_m2 - reference_m2,
            },
        })
    }
}
