//! Format-variant types for GEO parsing.

/// The structural variant of a GEO file.
///
/// Selected once from the fourth character of the signature line and
/// never changed afterward; it decides which builder runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flavor {
    /// `3DG1` / `GOUR...1`: one color token per face line
    ColoredFaces,

    /// `3DGR` / `GOUR`: one color token per vertex line
    ColoredVertices,

    /// `3DG2`: lamp list instead of geometry
    Lamp,

    /// `3DG3`: curves or NURBS surfaces, not supported
    CurveOrSurface,
}

impl Flavor {
    /// Map a signature's fourth character to a flavor.
    pub fn from_signature(c: u8) -> Option<Self> {
        match c {
            b'1' => Some(Flavor::ColoredFaces),
            b'2' => Some(Flavor::Lamp),
            b'3' => Some(Flavor::CurveOrSurface),
            b'R' => Some(Flavor::ColoredVertices),
            _ => None,
        }
    }

    /// Whether this flavor carries mesh geometry.
    pub fn is_mesh(self) -> bool {
        matches!(self, Flavor::ColoredFaces | Flavor::ColoredVertices)
    }
}

/// The classified header of a GEO file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Format variant from the signature line
    pub flavor: Flavor,

    /// Count of primary elements on the line after the signature:
    /// vertices for mesh flavors, lamps for the lamp flavor, a
    /// surface-type tag for the curve flavor.
    pub declared: u32,
}

/// Totals computed by the face-sizing pass.
///
/// These size the expanded output buffers exactly; the fill pass must
/// reproduce them or the import fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FaceTotals {
    /// Number of faces with a nonzero index count
    pub faces: usize,

    /// Sum of index counts over those faces
    pub vertex_uses: usize,
}
