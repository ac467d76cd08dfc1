use super::vertex::VertexId;

/// Classification of a face relative to the other operand's volume.
///
/// `Same` and `Opposite` apply only to faces coincident with a face of the
/// other operand, with equal or opposite orientation respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceStatus {
    Inside,
    Outside,
    Same,
    Opposite,
}

impl FaceStatus {
    /// Swaps `Inside` and `Outside`; coincident statuses are unchanged.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
            Self::Same => Self::Same,
            Self::Opposite => Self::Opposite,
        }
    }
}

/// A triangular face of an operand mesh.
///
/// The vertex order `(v1, v2, v3)` is the face's winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceData {
    pub vertices: [VertexId; 3],
}

impl FaceData {
    /// Creates a face from three vertex IDs in winding order.
    #[must_use]
    pub fn new(v1: VertexId, v2: VertexId, v3: VertexId) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }
}
