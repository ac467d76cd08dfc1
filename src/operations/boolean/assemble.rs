use std::collections::HashMap;

use crate::config::WeldIndex;
use crate::math::{Color, Point3};
use crate::topology::{Solid, VertexData, WeldKey};

/// Accumulates welded vertices, colors and triangle indices.
///
/// A vertex equal to one already pushed reuses its index; any other vertex
/// is appended together with its color. Welding is exact, so vertices that
/// differ only in color stay separate.
#[derive(Debug)]
pub struct MeshBuilder {
    vertices: Vec<Point3>,
    colors: Vec<Color>,
    indices: Vec<u32>,
    lookup: VertexLookup,
}

#[derive(Debug)]
enum VertexLookup {
    Hashed(HashMap<WeldKey, u32>),
    LinearScan,
}

impl MeshBuilder {
    /// Creates an empty builder using the given lookup strategy.
    #[must_use]
    pub fn new(weld_index: WeldIndex) -> Self {
        let lookup = match weld_index {
            WeldIndex::Hashed => VertexLookup::Hashed(HashMap::new()),
            WeldIndex::LinearScan => VertexLookup::LinearScan,
        };
        Self {
            vertices: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            lookup,
        }
    }

    /// Pushes one vertex and returns the index recorded for it.
    pub fn push_vertex(&mut self, vertex: &VertexData) -> u32 {
        let index = match &mut self.lookup {
            VertexLookup::Hashed(map) => {
                let next = to_index(self.vertices.len());
                let index = *map.entry(vertex.weld_key()).or_insert(next);
                if index == next {
                    self.vertices.push(vertex.point);
                    self.colors.push(vertex.color);
                }
                index
            }
            VertexLookup::LinearScan => {
                let key = vertex.weld_key();
                let found = self
                    .vertices
                    .iter()
                    .zip(&self.colors)
                    .position(|(point, color)| VertexData::new(*point, *color).weld_key() == key);
                if let Some(i) = found {
                    to_index(i)
                } else {
                    self.vertices.push(vertex.point);
                    self.colors.push(vertex.color);
                    to_index(self.vertices.len() - 1)
                }
            }
        };
        self.indices.push(index);
        index
    }

    /// Pushes a triangle's vertices in the given order.
    pub fn push_triangle(&mut self, vertices: [&VertexData; 3]) {
        for vertex in vertices {
            self.push_vertex(vertex);
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Finishes the mesh.
    #[must_use]
    pub fn build(self) -> Solid {
        Solid::from_parts(self.vertices, self.indices, self.colors)
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new(WeldIndex::default())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_index(i: usize) -> u32 {
    i as u32
}
