/// A single fingerprint feature point extracted from a template.
///
/// Coordinates live in the template's own coordinate space. The angle is the
/// raw stored byte interpreted as degrees, which is how the record format
/// carries it; arithmetic on angles is done in degrees and normalized into
/// [0, 360) by the matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minutia {
    pub x: u16,
    pub y: u16,
    /// Ridge orientation in degrees, raw byte value from the record.
    pub angle: u8,
    /// Feature classification. Carried through parsing, ignored by matching.
    pub kind: MinutiaKind,
}

impl Minutia {
    pub fn new(x: u16, y: u16, angle: u8, kind: MinutiaKind) -> Self {
        Self { x, y, angle, kind }
    }
}

/// Classification of a minutia as stored in the record's type byte.
///
/// The matcher never looks at this; it is retained so callers inspecting a
/// parsed template see what the source encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinutiaKind {
    RidgeEnding,
    Bifurcation,
    /// Any other raw type byte, kept verbatim.
    Other(u8),
}

impl From<u8> for MinutiaKind {
    fn from(raw: u8) -> Self {
        match raw {
            1 => MinutiaKind::RidgeEnding,
            2 => MinutiaKind::Bifurcation,
            other => MinutiaKind::Other(other),
        }
    }
}
