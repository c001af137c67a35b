//! VGEO Scene - scene graph data model for Videoscape import.
//!
//! This crate provides:
//!
//! - **Geometry types**: `Mesh`, `Face` (variable-length polygons over
//!   expanded per-face-use vertex/color buffers)
//! - **Scene graph types**: `Scene`, `Node`, `Light`
//!
//! The importer in `vgeo_core` only writes into this model; consumers
//! (viewers, converters) read from it.
//!
//! # Example
//!
//! ```ignore
//! use vgeo_scene::Scene;
//!
//! let scene: Scene = /* produced by vgeo_core::load_geo */;
//! println!("{} meshes, {} lights", scene.mesh_count(), scene.light_count());
//! ```

pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use mesh::{Face, Mesh};
pub use scene::{Light, LightKind, Node, Scene};
