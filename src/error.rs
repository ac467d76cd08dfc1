use thiserror::Error;

/// Top-level error type for polycsg.
#[derive(Debug, Error)]
pub enum PolycsgError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to mesh and operand structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("vertex not found in operand")]
    VertexNotFound,

    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    #[error("classifier returned {statuses} statuses for {faces} faces")]
    StatusCountMismatch { faces: usize, statuses: usize },
}

/// Errors related to boolean operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Failure reported by the face splitting or classification collaborator.
    #[error("split/classify collaborator failed: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("modeller clone failed: {0}")]
    CloneFailed(String),
}

/// Convenience type alias for results using [`PolycsgError`].
pub type Result<T> = std::result::Result<T, PolycsgError>;
