//! High-level GEO scene loading.
//!
//! This module provides the main entry points for loading GEO files
//! and assembling the parsed output into a [`vgeo_scene::Scene`]: a
//! root node referencing the mesh by index, with lights attached at
//! the scene level.

use std::path::Path;

use thiserror::Error;

use vgeo_scene::Scene;

use super::parser::{GeoParser, ParseError, ParseOutput};

/// Name of the synthesized root node.
pub const ROOT_NODE_NAME: &str = "<GEORoot>";

/// Errors that can occur during GEO loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Best-effort progress sink, invoked at coarse parse milestones.
///
/// Implementations must tolerate never being called again after a
/// failed import; fractions are monotonic but not evenly spaced.
pub trait Progress {
    fn update(&mut self, fraction: f32);
}

/// A progress sink that discards every update.
#[derive(Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _fraction: f32) {}
}

/// Check whether a path looks like a GEO file by extension.
///
/// For files without a telling extension, sniff the content with
/// [`sniff_header`] instead.
pub fn can_load<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("geo"))
        .unwrap_or(false)
}

/// Search the leading bytes of a buffer for a GEO signature token
/// (`3dg` or `gour`, case-insensitive).
pub fn sniff_header(content: &[u8]) -> bool {
    const TOKENS: [&[u8]; 2] = [b"gour", b"3dg"];

    let window: Vec<u8> = content
        .iter()
        .take(200)
        .map(u8::to_ascii_lowercase)
        .collect();
    TOKENS
        .iter()
        .any(|token| window.windows(token.len()).any(|w| w == *token))
}

/// Load a GEO file and return a scene.
///
/// # Example
///
/// ```ignore
/// use vgeo_core::geo::load_geo;
///
/// let scene = load_geo("model.geo")?;
/// println!("Loaded {} mesh(es)", scene.mesh_count());
/// ```
pub fn load_geo<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let content = std::fs::read_to_string(path)?;
    load_geo_from_string(&content, name)
}

/// Load GEO content from a string (useful for testing).
pub fn load_geo_from_string(content: &str, name: &str) -> LoadResult<Scene> {
    load_geo_from_string_with_progress(content, name, &mut NoProgress)
}

/// Load GEO content, reporting coarse milestones to `progress`.
///
/// Either a fully assembled scene is returned, or an error; a failed
/// import never produces a partial scene.
pub fn load_geo_from_string_with_progress(
    content: &str,
    name: &str,
    progress: &mut dyn Progress,
) -> LoadResult<Scene> {
    let output = GeoParser::new(content).parse(progress)?;

    let mut scene = Scene::new(name);
    match output {
        ParseOutput::Mesh(mesh) => {
            scene.add_mesh(mesh);
        }
        ParseOutput::Lights(lights) => {
            for light in lights {
                scene.add_light(light);
            }
        }
    }
    scene.set_root(ROOT_NODE_NAME);

    log::debug!(
        "GEO: assembled scene {:?} with {} mesh(es), {} light(s)",
        scene.name,
        scene.mesh_count(),
        scene.light_count()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgeo_scene::LightKind;

    #[test]
    fn test_load_colored_faces_scene() {
        let content = "3DG1\n\
                       3\n\
                       0.0 0.0 0.0\n\
                       1.0 0.0 0.0\n\
                       0.0 1.0 0.0\n\
                       3 0 1 2 7\n";

        let scene = load_geo_from_string(content, "triangle").unwrap();

        assert_eq!(scene.name, "triangle");
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.light_count(), 0);

        let root = scene.root.as_ref().unwrap();
        assert_eq!(root.name, ROOT_NODE_NAME);
        assert_eq!(root.meshes, vec![0]);
    }

    #[test]
    fn test_load_lamp_scene_has_no_mesh() {
        let content = "3DG2\n\
                       1\n\
                       0\n\
                       0.0 0.0\n\
                       1.0 1.0 1.0 1.0\n\
                       0.0 5.0 0.0\n\
                       0.0 -1.0 0.0\n";

        let scene = load_geo_from_string(content, "lamps").unwrap();

        assert_eq!(scene.mesh_count(), 0);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.lights[0].kind, LightKind::Point);

        // the root node exists but references no meshes
        let root = scene.root.as_ref().unwrap();
        assert!(root.meshes.is_empty());
    }

    #[test]
    fn test_loaded_mesh_triangulates() {
        let content = "3DG1\n\
                       4\n\
                       0.0 0.0 0.0\n\
                       1.0 0.0 0.0\n\
                       1.0 1.0 0.0\n\
                       0.0 1.0 0.0\n\
                       4 0 1 2 3 7\n";

        let scene = load_geo_from_string(content, "quad").unwrap();
        // one quad fans into two triangles
        assert_eq!(scene.meshes[0].triangulate(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_load_curves_fails_without_scene() {
        let result = load_geo_from_string("3DG3\n1\n", "curves");
        assert!(matches!(
            result,
            Err(LoadError::Parse(ParseError::CurvesUnsupported(1)))
        ));
    }

    #[test]
    fn test_progress_milestones() {
        struct Recorder(Vec<f32>);
        impl Progress for Recorder {
            fn update(&mut self, fraction: f32) {
                self.0.push(fraction);
            }
        }

        let content = "3DG1\n\
                       3\n\
                       0.0 0.0 0.0\n\
                       1.0 0.0 0.0\n\
                       0.0 1.0 0.0\n\
                       3 0 1 2 7\n";

        let mut recorder = Recorder(Vec::new());
        load_geo_from_string_with_progress(content, "t", &mut recorder).unwrap();

        assert!(!recorder.0.is_empty());
        assert!(recorder.0.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_can_load() {
        assert!(can_load("model.geo"));
        assert!(can_load("MODEL.GEO"));
        assert!(!can_load("model.obj"));
        assert!(!can_load("model"));
    }

    #[test]
    fn test_sniff_header() {
        assert!(sniff_header(b"3DG1\n3\n"));
        assert!(sniff_header(b"# comment\nGOUR\n12\n"));
        assert!(!sniff_header(b"ply\nformat ascii 1.0\n"));
        assert!(!sniff_header(b""));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_geo("/nonexistent/path/model.geo");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
