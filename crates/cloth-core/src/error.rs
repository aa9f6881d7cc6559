use thiserror::Error;

/// Construction-boundary errors.
///
/// The per-frame solve path is infallible; degenerate constraints and
/// near-zero separations are policy (skipped/guarded), not errors.
#[derive(Debug, Error, PartialEq)]
pub enum ClothError {
    /// The particle grid needs at least 2 particles along each axis.
    #[error("invalid grid dimensions: {cols}x{rows} (minimum 2x2)")]
    InvalidGridDimensions { cols: usize, rows: usize },

    /// Physical cloth size must be positive along both axes.
    #[error("invalid cloth size: {width}x{height}")]
    InvalidClothSize { width: f32, height: f32 },
}

/// Convenience alias for `Result<T, ClothError>`.
pub type ClothResult<T> = Result<T, ClothError>;
