//! Example: Load and inspect a Videoscape GEO file.
//!
//! Run with: cargo run --example load_geo -- path/to/model.geo

use std::env;

use vgeo_core::geo::load_geo;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_geo <path-to-geo-file>");
        return;
    }

    let path = &args[1];
    println!("Loading GEO file: {}", path);

    match load_geo(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Meshes: {}", scene.mesh_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Meshes ---");
            for (i, mesh) in scene.meshes.iter().enumerate() {
                println!(
                    "  [{}] {} faces ({} triangles), {} expanded vertices",
                    i,
                    mesh.face_count(),
                    mesh.triangulate().len() / 3,
                    mesh.vertex_count()
                );
                if let Some((min, max)) = mesh.bounds() {
                    println!(
                        "       Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                        min.x, min.y, min.z, max.x, max.y, max.z
                    );
                }
            }

            println!("\n--- Lights ---");
            for light in &scene.lights {
                println!(
                    "  {} ({:?}) at ({:.2}, {:.2}, {:.2})",
                    light.name, light.kind, light.position.x, light.position.y, light.position.z
                );
            }

            if let Some(root) = &scene.root {
                println!("\nRoot node {:?} references meshes {:?}", root.name, root.meshes);
            }
        }
        Err(e) => {
            eprintln!("Error loading GEO file: {}", e);
        }
    }
}
