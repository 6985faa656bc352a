use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParcelError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("a parcel needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("{vertices} vertices but {edges} edge measurements")]
    EdgeCount { vertices: usize, edges: usize },

    /// The haversine term fell outside `[0, 1]`, which only happens
    /// for malformed (NaN, infinite) coordinates.
    #[error("haversine term {0} outside [0, 1]")]
    DomainRange(f64),
}

impl ParcelError {
    /// Returns `true` if this error stems from inconsistent input
    /// tables rather than from a computation.
    pub fn is_configuration_mismatch(&self) -> bool {
        !matches!(self, Self::DomainRange(_))
    }
}
