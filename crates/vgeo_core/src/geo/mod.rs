//! Videoscape GEO support.
//!
//! This module parses the Videoscape text format and converts it to the
//! VGEO scene graph representation. The format comes in four flavors,
//! selected by the fourth character of the file signature:
//!
//! - `3DG1`: mesh with one color per face
//! - `3DGR` / `GOUR`: mesh with one color per vertex
//! - `3DG2`: lamp list (no geometry)
//! - `3DG3`: curves / NURBS surfaces (not supported, always fails)
//!
//! ## Not supported
//!
//! - Curves and surfaces (`3DG3`)
//! - Material graphs beyond the 16-entry base color table
//! - Streaming / incremental output
//!
//! # Example
//!
//! ```ignore
//! use vgeo_core::geo::load_geo;
//!
//! let scene = load_geo("path/to/model.geo")?;
//! println!("Loaded {} meshes, {} lights",
//!     scene.mesh_count(),
//!     scene.light_count());
//! ```

mod cursor;
mod loader;
mod palette;
mod parser;
mod types;

pub use cursor::LineCursor;
pub use loader::*;
pub use palette::{resolve_color, COLOR_TABLE};
pub use parser::{GeoParser, ParseError, ParseOutput};
pub use types::{Flavor, Header};
