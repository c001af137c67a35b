//! Scene graph types for VGEO.
//!
//! A [`Scene`] owns the meshes and lights produced by an import plus a
//! root [`Node`] that references meshes by index. Lights stay attached
//! at the scene level, matching the Videoscape lamp-list format where a
//! file carries either geometry or lamps.

use glam::Vec3;

use crate::mesh::Mesh;

/// The kind of a light source.
///
/// Videoscape lamp records tag each lamp with a small integer:
/// 0 = point, 1 = spot, 2 = sun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightKind {
    /// Omnidirectional point lamp
    #[default]
    Point,

    /// Spot lamp with a cone
    Spot,

    /// Directional sun lamp
    Sun,
}

impl LightKind {
    /// Map a raw lamp-type field to a kind, if it is one of the known tags.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(LightKind::Point),
            1 => Some(LightKind::Spot),
            2 => Some(LightKind::Sun),
            _ => None,
        }
    }
}

/// A light source.
#[derive(Clone, Debug)]
pub struct Light {
    /// Light name (synthesized by the importer)
    pub name: String,

    /// Kind of light source
    pub kind: LightKind,

    /// Inner cone angle in degrees (meaningful for spot lamps)
    pub angle_inner_cone: f32,

    /// Outer cone angle in degrees (meaningful for spot lamps)
    pub angle_outer_cone: f32,

    /// Diffuse color (RGB, 0-1)
    pub color_diffuse: Vec3,

    /// World-space position
    pub position: Vec3,

    /// Direction vector
    pub direction: Vec3,
}

/// A named node referencing meshes by index into `Scene::meshes`.
#[derive(Clone, Debug, Default)]
pub struct Node {
    /// Node name
    pub name: String,

    /// Indices of the meshes attached to this node
    pub meshes: Vec<usize>,
}

impl Node {
    /// Create a node with a name and no meshes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
        }
    }
}

/// A complete imported scene.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Meshes owned by the scene
    pub meshes: Vec<Mesh>,

    /// Lights owned by the scene
    pub lights: Vec<Light>,

    /// Root node, set once the scene is finalized
    pub root: Option<Node>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a mesh to the scene and return its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        let id = self.meshes.len();
        self.meshes.push(mesh);
        id
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get mesh count.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Attach a root node that references every mesh in the scene.
    pub fn set_root(&mut self, name: impl Into<String>) {
        let mut root = Node::new(name);
        root.meshes = (0..self.meshes.len()).collect();
        self.root = Some(root);
    }

    /// Total face count across all meshes.
    pub fn total_face_count(&self) -> usize {
        self.meshes.iter().map(Mesh::face_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Face;
    use glam::Vec4;

    #[test]
    fn test_light_kind_from_raw() {
        assert_eq!(LightKind::from_raw(0), Some(LightKind::Point));
        assert_eq!(LightKind::from_raw(1), Some(LightKind::Spot));
        assert_eq!(LightKind::from_raw(2), Some(LightKind::Sun));
        assert_eq!(LightKind::from_raw(3), None);
    }

    #[test]
    fn test_scene_root_references_meshes() {
        let mut scene = Scene::new("test");

        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec4::ONE; 3],
            vec![Face {
                indices: vec![0, 1, 2],
            }],
        );
        let id = scene.add_mesh(mesh);
        assert_eq!(id, 0);

        scene.set_root("<GEORoot>");

        let root = scene.root.as_ref().unwrap();
        assert_eq!(root.name, "<GEORoot>");
        assert_eq!(root.meshes, vec![0]);
        assert_eq!(scene.total_face_count(), 1);
    }
}
