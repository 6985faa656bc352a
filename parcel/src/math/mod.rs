mod degree_len;
mod haversine;

pub use degree_len::DegreeLength;
pub(crate) use haversine::haversine;
