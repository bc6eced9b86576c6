use thiserror::Error;

/// Top-level error type for the ringsmooth kernel.
#[derive(Debug, Error)]
pub enum RingsmoothError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to smoothing operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unreachable closure state: {0}")]
    ClosureState(String),
}

/// Convenience type alias for results using [`RingsmoothError`].
pub type Result<T> = std::result::Result<T, RingsmoothError>;
