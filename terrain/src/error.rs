use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("row {0} has no base offset")]
    EmptyRow(usize),

    #[error("invalid spacing {0} m")]
    Spacing(String),
}
