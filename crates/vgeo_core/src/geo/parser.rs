//! The GEO parser: signature classification, two-pass geometry
//! assembly, and the lamp-list builder.
//!
//! Geometry import runs in three passes over the same immutable buffer:
//! a vertex pass sized by the declared count, a face-sizing pass that
//! scans to end of buffer counting faces and vertex uses, and a
//! face-fill pass that rewinds to the sizing checkpoint and writes the
//! expanded output buffers. Sizing first means the output vectors are
//! allocated exactly once, with no over-allocation guess.

use glam::{Vec3, Vec4};
use thiserror::Error;

use vgeo_scene::{Face, Light, LightKind, Mesh};

use super::cursor::{parse_f32, parse_u32, parse_vec3, skip_spaces, LineCursor};
use super::loader::Progress;
use super::palette::resolve_color;
use super::types::{FaceTotals, Flavor, Header};

/// Fatal conditions that abort the whole import.
///
/// Recoverable conditions (zero-index faces, out-of-range indices,
/// unresolvable color tokens, short vertex/lamp blocks) are logged
/// through the `log` facade instead and never surface here.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unknown file version, signature {0:?}")]
    UnknownSignature(String),

    #[error("no signature line before the element count")]
    MissingSignature,

    #[error("unexpected end of file inside the header")]
    MissingCount,

    #[error("curves and surfaces are not supported (surface type {0})")]
    CurvesUnsupported(u32),

    #[error("there are no valid faces")]
    NoValidFaces,

    #[error(
        "face passes disagree: sized {sized_faces} face(s) / {sized_uses} \
         vertex use(s), filled {filled_faces} / {filled_uses}"
    )]
    PassMismatch {
        sized_faces: usize,
        filled_faces: usize,
        sized_uses: usize,
        filled_uses: usize,
    },
}

/// What a successful parse produced: geometry or a lamp list.
#[derive(Debug)]
pub enum ParseOutput {
    Mesh(Mesh),
    Lights(Vec<Light>),
}

/// Parser state threaded through the passes.
pub struct GeoParser<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> GeoParser<'a> {
    /// Create a parser over an in-memory GEO text buffer.
    pub fn new(buf: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(buf),
        }
    }

    /// Run the parse to completion.
    ///
    /// `progress` is invoked at coarse milestones and may be a no-op
    /// sink. On any [`ParseError`] nothing is returned; there is no
    /// partial output.
    pub fn parse(mut self, progress: &mut dyn Progress) -> Result<ParseOutput, ParseError> {
        let header = self.read_header()?;
        progress.update(0.125);

        match header.flavor {
            Flavor::CurveOrSurface => {
                log::debug!("GEO: has to import type {} form(s)", header.declared);
                self.drain();
                Err(ParseError::CurvesUnsupported(header.declared))
            }
            Flavor::Lamp => {
                let lights = self.read_lamps(header.declared);
                progress.update(0.24);
                Ok(ParseOutput::Lights(lights))
            }
            flavor => self
                .read_mesh(header.declared, flavor, progress)
                .map(ParseOutput::Mesh),
        }
    }

    /// Consume signature and comment lines, classify the flavor, and
    /// parse the element-count line.
    fn read_header(&mut self) -> Result<Header, ParseError> {
        let mut flavor = None;
        let mut line = self.cursor.next_line().ok_or(ParseError::MissingCount)?;

        while is_header_line(line) {
            if is_signature_line(line) {
                match line.as_bytes().get(3).copied().and_then(Flavor::from_signature) {
                    Some(f) => {
                        log::debug!("GEO: signature {:?} selects flavor {:?}", line, f);
                        flavor = Some(f);
                    }
                    None => {
                        log::warn!("GEO: unknown signature: {}", line);
                        return Err(ParseError::UnknownSignature(line.to_string()));
                    }
                }
            }
            // comment lines (#...) are skipped without affecting the flavor
            line = self.cursor.next_line().ok_or(ParseError::MissingCount)?;
        }

        let flavor = flavor.ok_or(ParseError::MissingSignature)?;
        let (declared, _) = parse_u32(skip_spaces(line));

        Ok(Header { flavor, declared })
    }

    /// Run the three mesh passes and assemble the output mesh.
    fn read_mesh(
        &mut self,
        declared: u32,
        flavor: Flavor,
        progress: &mut dyn Progress,
    ) -> Result<Mesh, ParseError> {
        debug_assert!(flavor.is_mesh());

        let (raw_positions, raw_colors) =
            self.read_vertices(declared, flavor == Flavor::ColoredVertices);
        progress.update(0.24);

        let checkpoint = self.cursor.checkpoint();
        let totals = self.size_faces();
        if totals.vertex_uses == 0 {
            return Err(ParseError::NoValidFaces);
        }
        if raw_positions.is_empty() {
            log::error!("GEO: faces reference an empty vertex block");
            return Err(ParseError::NoValidFaces);
        }
        log::debug!(
            "GEO: face storage needs {} face(s), {} vertex use(s)",
            totals.faces,
            totals.vertex_uses
        );
        progress.update(0.25);

        self.cursor.rewind(checkpoint);
        let mesh = self.fill_faces(&raw_positions, &raw_colors, totals, flavor)?;
        progress.update(0.45);

        Ok(mesh)
    }

    /// Vertex pass: one position (and optionally one color token) per
    /// line, for `declared` lines.
    ///
    /// A short vertex block is non-fatal: parsing stops at end of
    /// buffer and the remaining slots keep their defaults.
    fn read_vertices(&mut self, declared: u32, colored: bool) -> (Vec<Vec3>, Vec<Vec4>) {
        let count = declared as usize;
        log::debug!(
            "GEO: has to import {} {}colored vertex/vertices",
            count,
            if colored { "" } else { "not " }
        );

        let mut positions = vec![Vec3::ZERO; count];
        let mut colors = vec![Vec4::ZERO; count];

        for i in 0..count {
            let Some(line) = self.cursor.next_line() else {
                log::error!("GEO: the number of vertices in the header is incorrect");
                break;
            };

            let (pos, rest) = parse_vec3(line);
            positions[i] = pos;

            if colored {
                if let Some(color) = resolve_color(rest) {
                    colors[i] = color;
                }
            }
        }

        (positions, colors)
    }

    /// Face-sizing pass: scan every remaining line and total up faces
    /// and vertex uses without allocating per-face storage.
    fn size_faces(&mut self) -> FaceTotals {
        let mut totals = FaceTotals::default();

        while let Some(line) = self.cursor.next_line() {
            let (index_count, _) = parse_u32(skip_spaces(line));
            if index_count == 0 {
                log::error!("GEO: faces with zero indices aren't allowed");
                continue;
            }
            totals.faces += 1;
            totals.vertex_uses += index_count as usize;
        }

        totals
    }

    /// Face-fill pass: re-scan the face block and write the expanded
    /// vertex/color buffers sized by [`size_faces`](Self::size_faces).
    fn fill_faces(
        &mut self,
        raw_positions: &[Vec3],
        raw_colors: &[Vec4],
        totals: FaceTotals,
        flavor: Flavor,
    ) -> Result<Mesh, ParseError> {
        let mut positions = Vec::with_capacity(totals.vertex_uses);
        let mut colors = Vec::with_capacity(totals.vertex_uses);
        let mut faces: Vec<Face> = Vec::with_capacity(totals.faces);
        let last_raw = raw_positions.len() - 1;

        while faces.len() < totals.faces {
            let Some(line) = self.cursor.next_line() else {
                break;
            };

            let mut rest = skip_spaces(line);
            let (index_count, r) = parse_u32(rest);
            rest = r;
            if index_count == 0 {
                // already reported by the sizing pass
                continue;
            }

            let mut raw_indices = Vec::with_capacity(index_count as usize);
            for _ in 0..index_count {
                rest = skip_spaces(rest);
                let (raw, r) = parse_u32(rest);
                rest = r;

                let mut raw = raw as usize;
                if raw >= raw_positions.len() {
                    log::warn!(
                        "GEO: vertex index {} out of range, clamping to {}",
                        raw,
                        last_raw
                    );
                    raw = last_raw;
                }
                raw_indices.push(raw);
            }

            // colored-face flavor carries one trailing color token that
            // is broadcast to every index the face writes
            let face_color = match flavor {
                Flavor::ColoredFaces => resolve_color(rest).unwrap_or(Vec4::ZERO),
                _ => Vec4::ZERO,
            };

            let mut face = Face {
                indices: Vec::with_capacity(raw_indices.len()),
            };
            for raw in raw_indices {
                face.indices.push(positions.len() as u32);
                positions.push(raw_positions[raw]);
                colors.push(match flavor {
                    Flavor::ColoredVertices => raw_colors[raw],
                    _ => face_color,
                });
            }
            faces.push(face);
        }

        if faces.len() != totals.faces || positions.len() != totals.vertex_uses {
            return Err(ParseError::PassMismatch {
                sized_faces: totals.faces,
                filled_faces: faces.len(),
                sized_uses: totals.vertex_uses,
                filled_uses: positions.len(),
            });
        }

        Ok(Mesh::new(positions, colors, faces))
    }

    /// Lamp pass: a fixed five-line record per lamp.
    ///
    /// A truncated record stops the loop, keeping the lamps completed
    /// so far.
    fn read_lamps(&mut self, declared: u32) -> Vec<Light> {
        let count = declared as usize;
        log::debug!("GEO: has to import {} light(s)", count);

        let mut lights = Vec::with_capacity(count);

        'lamps: for ordinal in 1..=count {
            let mut record = [""; 5];
            for slot in &mut record {
                match self.cursor.next_line() {
                    Some(line) => *slot = line,
                    None => {
                        log::warn!(
                            "GEO: lamp list truncated, keeping {} lamp(s)",
                            lights.len()
                        );
                        break 'lamps;
                    }
                }
            }

            // type - lamp type (0 point, 1 spot, 2 sun)
            let (raw_type, _) = parse_u32(skip_spaces(record[0]));
            let kind = LightKind::from_raw(raw_type).unwrap_or_else(|| {
                log::warn!("GEO: unknown lamp type {}, treating as point", raw_type);
                LightKind::Point
            });
            let name = format!("Lamp{:04}{:04X}", ordinal, raw_type);
            log::debug!("GEO: create light: {}", name);

            // spotsize spotblend - cone size and intensity of beam, degrees
            let (inner, rest) = parse_f32(skip_spaces(record[1]));
            let (outer, _) = parse_f32(skip_spaces(rest));

            // R G B E - color and energy; only the color is retained
            let (color_diffuse, _) = parse_vec3(record[2]);

            // x y z - lamp coordinates
            let (position, _) = parse_vec3(record[3]);

            // vecx vecy vecz - lamp direction vector
            let (direction, _) = parse_vec3(record[4]);

            lights.push(Light {
                name,
                kind,
                angle_inner_cone: inner,
                angle_outer_cone: outer,
                color_diffuse,
                position,
                direction,
            });
        }

        lights
    }

    /// Consume the rest of the buffer.
    fn drain(&mut self) {
        while self.cursor.next_line().is_some() {}
    }
}

/// Header lines start with `G`, with `3D`, or are comments (`#`).
fn is_header_line(line: &str) -> bool {
    let b = line.as_bytes();
    b.first() == Some(&b'G')
        || (b.first() == Some(&b'3') && b.get(1) == Some(&b'D'))
        || b.first() == Some(&b'#')
}

/// Signature lines are header lines that are not comments.
fn is_signature_line(line: &str) -> bool {
    is_header_line(line) && !line.starts_with('#')
}
