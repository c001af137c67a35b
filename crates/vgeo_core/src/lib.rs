//! VGEO Core - importer for the Videoscape "GEO" text format.
//!
//! This crate provides:
//!
//! - **GEO parsing**: signature classification, the two-pass geometry
//!   builder, and the lamp-list builder
//! - **Scene loading**: file and string entry points producing a
//!   [`vgeo_scene::Scene`]
//!
//! # Example
//!
//! ```ignore
//! use vgeo_core::geo::load_geo;
//!
//! let scene = load_geo("model.geo")?;
//! println!("Loaded {} meshes, {} lights",
//!     scene.mesh_count(),
//!     scene.light_count());
//! ```

pub mod geo;

// Re-export commonly used entry points
pub use geo::{can_load, load_geo, load_geo_from_string, LoadError, ParseError};
