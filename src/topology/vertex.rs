use crate::math::{f32_key, f64_key, Color, Point3};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in an operand mesh.
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
///
/// Two vertices are equal when their positions and colors match exactly.
/// This is the equality used for welding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// The vertex color.
    pub color: Color,
}

impl VertexData {
    /// Creates a new vertex at the given point with the given color.
    #[must_use]
    pub fn new(point: Point3, color: Color) -> Self {
        Self { point, color }
    }

    /// Returns the hashable key for exact welding.
    ///
    /// Keys are equal whenever the vertices compare equal. NaN components
    /// are compared by bit pattern, so identical NaN vertices share a key.
    #[must_use]
    pub fn weld_key(&self) -> WeldKey {
        WeldKey {
            position: [
                f64_key(self.point.x),
                f64_key(self.point.y),
                f64_key(self.point.z),
            ],
            color: [
                f32_key(self.color.r),
                f32_key(self.color.g),
                f32_key(self.color.b),
            ],
        }
    }
}

/// Bit-level key of a vertex's position and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeldKey {
    position: [u64; 3],
    color: [u32; 3],
}
