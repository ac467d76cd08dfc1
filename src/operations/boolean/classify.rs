use std::collections::TryReserveError;

use crate::error::{Result, TopologyError};
use crate::topology::{FaceData, FaceStatus, OperandMesh, VertexData};

/// Face splitting and classification for one pair of operands.
///
/// Implementations make the two meshes' faces non-overlapping and then
/// label each face relative to the other operand's volume, typically by
/// ray casting.
pub trait SplitClassifier {
    /// Subdivides faces of `mesh` wherever they cross a face of `other`.
    ///
    /// After calling this on both operands, each against the other, no two
    /// faces partially overlap.
    ///
    /// # Errors
    ///
    /// Returns an error if splitting fails.
    fn split(&self, mesh: &mut OperandMesh, other: &OperandMesh) -> Result<()>;

    /// Returns one status per face of `mesh`, in face order.
    ///
    /// # Errors
    ///
    /// Returns an error if classification fails.
    fn classify(&self, mesh: &OperandMesh, other: &OperandMesh) -> Result<Vec<FaceStatus>>;
}

/// An operand mesh whose faces all carry a status.
#[derive(Debug, Clone)]
pub struct ClassifiedOperand {
    mesh: OperandMesh,
    statuses: Vec<FaceStatus>,
}

impl ClassifiedOperand {
    /// Pairs a mesh with its face statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of statuses differs from the number of
    /// faces, or if a face references a vertex missing from the mesh.
    pub fn new(mesh: OperandMesh, statuses: Vec<FaceStatus>) -> Result<Self> {
        if statuses.len() != mesh.face_count() {
            return Err(TopologyError::StatusCountMismatch {
                faces: mesh.face_count(),
                statuses: statuses.len(),
            }
            .into());
        }
        for face in mesh.faces() {
            mesh.face_vertices(face)?;
        }
        Ok(Self { mesh, statuses })
    }

    #[must_use]
    pub fn mesh(&self) -> &OperandMesh {
        &self.mesh
    }

    /// Face statuses, aligned with [`OperandMesh::faces`].
    #[must_use]
    pub fn statuses(&self) -> &[FaceStatus] {
        &self.statuses
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.statuses.len()
    }

    /// Counts faces with the given status.
    #[must_use]
    pub fn count_status(&self, status: FaceStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Deep copy that reports allocation failure of the face buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the status or face buffer cannot be allocated.
    pub fn try_clone(&self) -> std::result::Result<Self, TryReserveError> {
        let mut statuses = Vec::new();
        statuses.try_reserve_exact(self.statuses.len())?;
        statuses.extend_from_slice(&self.statuses);
        Ok(Self {
            mesh: self.mesh.try_clone()?,
            statuses,
        })
    }

    /// Toggles `Inside` and `Outside` on every face.
    pub fn invert_inside_outside(&mut self) {
        for status in &mut self.statuses {
            *status = status.inverted();
        }
    }

    /// Iterates over faces in stored order with their status and vertices.
    pub(crate) fn classified_faces(
        &self,
    ) -> impl Iterator<Item = (FaceStatus, [&VertexData; 3])> + '_ {
        self.mesh
            .faces()
            .iter()
            .zip(&self.statuses)
            .filter_map(|(face, &status)| Some((status, self.resolve(face)?)))
    }

    // Vertices were validated in `new` and the mesh is never mutated afterwards.
    fn resolve(&self, face: &FaceData) -> Option<[&VertexData; 3]> {
        self.mesh.face_vertices(face).ok()
    }
}
