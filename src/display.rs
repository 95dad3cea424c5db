use core::fmt;

use crate::minutia::{Minutia, MinutiaKind};
use crate::output::MatchOutput;

impl fmt::Display for Minutia {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}:{}:{}", self.x, self.y, self.angle, self.kind)
    }
}

impl fmt::Display for MinutiaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MinutiaKind::RidgeEnding => f.write_str("e"),
            MinutiaKind::Bifurcation => f.write_str("b"),
            MinutiaKind::Other(raw) => write!(f, "?{raw}"),
        }
    }
}

impl fmt::Display for MatchOutput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "score={} threshold={} quality={:.2} ({} vs {} minutiae): {}",
            self.score,
            self.threshold,
            self.quality,
            self.probe_minutiae,
            self.candidate_minutiae,
            if self.is_match { "match" } else { "no match" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutia_display() {
        let m = Minutia::new(120, 45, 90, MinutiaKind::Bifurcation);
        assert_eq!(m.to_string(), "120,45:90:b");
    }

    #[test]
    fn output_display() {
        let output = MatchOutput::new(23, 12, 46, 36);
        assert_eq!(
            output.to_string(),
            "score=23 threshold=12 quality=0.50 (46 vs 36 minutiae): match"
        );
    }
}
