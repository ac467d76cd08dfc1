use crate::error::TopologyError;
use crate::math::{Color, Point3, Vector3};

/// An immutable indexed triangle mesh with per-vertex colors.
///
/// Serves as both the input to and the output of boolean operations.
/// Every three consecutive entries of `indices` form one triangle, every
/// index is in range, and `colors` is aligned one-to-one with `vertices`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
    colors: Vec<Color>,
}

impl Solid {
    /// Creates a solid from raw buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the index count is not a multiple of three, if an
    /// index is out of range, or if the color count differs from the vertex
    /// count.
    pub fn new(
        vertices: Vec<Point3>,
        indices: Vec<u32>,
        colors: Vec<Color>,
    ) -> Result<Self, TopologyError> {
        if indices.len() % 3 != 0 {
            return Err(TopologyError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if colors.len() != vertices.len() {
            return Err(TopologyError::InvalidMesh(format!(
                "{} colors for {} vertices",
                colors.len(),
                vertices.len()
            )));
        }
        if let Some(&bad) = indices
            .iter()
            .find(|&&i| usize::try_from(i).map_or(true, |i| i >= vertices.len()))
        {
            return Err(TopologyError::InvalidMesh(format!(
                "index {bad} out of range for {} vertices",
                vertices.len()
            )));
        }
        Ok(Self::from_parts(vertices, indices, colors))
    }

    /// Creates a single-color solid.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solid::new`].
    pub fn with_color(
        vertices: Vec<Point3>,
        indices: Vec<u32>,
        color: Color,
    ) -> Result<Self, TopologyError> {
        let colors = vec![color; vertices.len()];
        Self::new(vertices, indices, colors)
    }

    /// Builds a solid whose invariants the caller already guarantees.
    pub(crate) fn from_parts(vertices: Vec<Point3>, indices: Vec<u32>, colors: Vec<Color>) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert_eq!(colors.len(), vertices.len());
        Self {
            vertices,
            indices,
            colors,
        }
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Flat triangle index buffer.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-vertex colors.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the solid has no triangles.
    ///
    /// An empty solid cannot be handed to a renderer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Average of the vertex positions, or `None` for a solid without vertices.
    #[must_use]
    pub fn mean(&self) -> Option<Point3> {
        if self.vertices.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let inv_n = 1.0 / self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum * inv_n))
    }

    /// Returns a copy of this solid translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        self.map_vertices(|p| p + offset)
    }

    /// Returns a copy of this solid scaled per axis about the origin.
    #[must_use]
    pub fn scaled(&self, factors: &Vector3) -> Self {
        self.map_vertices(|p| Point3::from(p.coords.component_mul(factors)))
    }

    fn map_vertices(&self, f: impl Fn(&Point3) -> Point3) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
            indices: self.indices.clone(),
            colors: self.colors.clone(),
        }
    }
}
