pub mod face;
pub mod solid;
pub mod vertex;

pub use face::{FaceData, FaceStatus};
pub use solid::Solid;
pub use vertex::{VertexData, VertexId, WeldKey};

use std::collections::TryReserveError;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Arena-backed triangle mesh of one boolean operand.
///
/// Vertices live in a slotmap and faces reference them via typed IDs, so a
/// splitter can add vertices and replace faces without invalidating other
/// references. Face order is stable and defines composition order.
#[derive(Debug, Clone, Default)]
pub struct OperandMesh {
    vertices: SlotMap<VertexId, VertexData>,
    faces: Vec<FaceData>,
}

impl OperandMesh {
    /// Creates a new, empty operand mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a solid into an operand mesh, one face per index triple.
    #[must_use]
    pub fn from_solid(solid: &Solid) -> Self {
        let mut mesh = Self::new();
        let ids: Vec<VertexId> = solid
            .vertices()
            .iter()
            .zip(solid.colors())
            .map(|(point, color)| mesh.add_vertex(VertexData::new(*point, *color)))
            .collect();
        for [a, b, c] in solid.triangles() {
            mesh.add_face(FaceData::new(
                ids[a as usize],
                ids[b as usize],
                ids[c as usize],
            ));
        }
        mesh
    }

    /// Deep copy that reports allocation failure of the face buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the face buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, TryReserveError> {
        let mut faces = Vec::new();
        faces.try_reserve_exact(self.faces.len())?;
        faces.extend_from_slice(&self.faces);
        Ok(Self {
            vertices: self.vertices.clone(),
            faces,
        })
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in this mesh.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices.get(id).ok_or(TopologyError::VertexNotFound)
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in this mesh.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices.get_mut(id).ok_or(TopologyError::VertexNotFound)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Face operations ---

    /// Appends a face and returns its position in face order.
    pub fn add_face(&mut self, face: FaceData) -> usize {
        self.faces.push(face);
        self.faces.len() - 1
    }

    /// Faces in stored order.
    #[must_use]
    pub fn faces(&self) -> &[FaceData] {
        &self.faces
    }

    #[must_use]
    pub fn face(&self, index: usize) -> Option<&FaceData> {
        self.faces.get(index)
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Replaces the face at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn replace_face(&mut self, index: usize, face: FaceData) -> Result<FaceData, TopologyError> {
        let slot = self.faces.get_mut(index).ok_or_else(|| face_out_of_range(index))?;
        Ok(std::mem::replace(slot, face))
    }

    /// Removes the face at `index`, shifting later faces down.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_face(&mut self, index: usize) -> Result<FaceData, TopologyError> {
        if index >= self.faces.len() {
            return Err(face_out_of_range(index));
        }
        Ok(self.faces.remove(index))
    }

    /// Resolves the three vertices of a face in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex of the face is not in this mesh.
    pub fn face_vertices(&self, face: &FaceData) -> Result<[&VertexData; 3], TopologyError> {
        let [a, b, c] = face.vertices;
        Ok([self.vertex(a)?, self.vertex(b)?, self.vertex(c)?])
    }
}

fn face_out_of_range(index: usize) -> TopologyError {
    TopologyError::InvalidMesh(format!("face index {index} out of range"))
}
