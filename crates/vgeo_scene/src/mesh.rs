//! Mesh geometry representation for the VGEO scene graph.
//!
//! Videoscape files address vertices per face-use, so the mesh stores
//! *expanded* buffers: every index a face declares gets its own slot in
//! the position and color arrays, and vertices shared by several faces
//! are duplicated, never deduplicated.

use glam::{Vec3, Vec4};

/// A single polygon of a [`Mesh`].
///
/// Indices point into the mesh's expanded vertex/color buffers, not the
/// vertex block of the source file. A face always has at least one
/// index; faces declared with zero indices are dropped during import.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
    /// Indices into `Mesh::positions` / `Mesh::colors`
    pub indices: Vec<u32>,
}

impl Face {
    /// Number of vertices this face references.
    pub fn vertex_count(&self) -> usize {
        self.indices.len()
    }
}

/// A mesh of variable-length faces with per-face-use positions and colors.
///
/// Invariant: `positions.len() == colors.len()` and both equal the sum
/// of `vertex_count()` over all faces.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Expanded vertex positions (one slot per face-use)
    pub positions: Vec<Vec3>,

    /// Expanded RGBA vertex colors, parallel to `positions`
    pub colors: Vec<Vec4>,

    /// Faces, each holding a sub-range of the expanded buffers
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create a mesh from expanded buffers and faces.
    pub fn new(positions: Vec<Vec3>, colors: Vec<Vec4>, faces: Vec<Face>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(
            positions.len(),
            faces.iter().map(Face::vertex_count).sum::<usize>()
        );
        Self {
            positions,
            colors,
            faces,
        }
    }

    /// Number of entries in the expanded vertex buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Axis-aligned bounds of all positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for pos in &self.positions {
            min = min.min(*pos);
            max = max.max(*pos);
        }

        if self.positions.is_empty() {
            None
        } else {
            Some((min, max))
        }
    }

    /// Triangulate all faces and return flat triangle indices.
    ///
    /// Faces can be n-gons; they are converted with fan triangulation.
    /// Faces with fewer than three vertices contribute nothing.
    pub fn triangulate(&self) -> Vec<u32> {
        let mut indices = Vec::new();

        for face in &self.faces {
            let n = face.indices.len();
            if n < 3 {
                continue;
            }

            // Fan: (0,1,2), (0,2,3), ... (0,n-2,n-1)
            for i in 1..(n - 1) {
                indices.push(face.indices[0]);
                indices.push(face.indices[i]);
                indices.push(face.indices[i + 1]);
            }
        }

        indices
    }
}
