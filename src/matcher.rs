use crate::minutia::Minutia;
use tracing::debug;

/// Tolerances and decision threshold for template matching.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Positional tolerance, applied per axis (box tolerance, not Euclidean).
    pub radius: f64,
    /// Angular tolerance in degrees, compared as circular distance.
    pub angle_tolerance: f64,
    /// Minimum score for `TemplateMatcher::is_match` to report a match.
    pub score_threshold: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            angle_tolerance: 10.0,
            score_threshold: 12,
        }
    }
}

/// One rigid pose hypothesis: rotate probe points about a probe pivot and
/// translate the pivot onto a candidate pivot. The rotation delta comes from
/// the pivots' angles alone, so identical pivot positions stay well-defined.
struct Alignment {
    sin: f64,
    cos: f64,
    dtheta_deg: f64,
    pivot_x: f64,
    pivot_y: f64,
    target_x: f64,
    target_y: f64,
}

impl Alignment {
    fn from_pivots(p: &Minutia, q: &Minutia) -> Self {
        let dtheta_deg = f64::from(q.angle) - f64::from(p.angle);
        let dtheta = dtheta_deg.to_radians();
        Self {
            sin: dtheta.sin(),
            cos: dtheta.cos(),
            dtheta_deg,
            pivot_x: f64::from(p.x),
            pivot_y: f64::from(p.y),
            target_x: f64::from(q.x),
            target_y: f64::from(q.y),
        }
    }

    /// Transformed position and angle of a probe minutia under this pose.
    /// The angle is normalized into [0, 360).
    fn apply(&self, m: &Minutia) -> (f64, f64, f64) {
        let dx = f64::from(m.x) - self.pivot_x;
        let dy = f64::from(m.y) - self.pivot_y;
        let xr = self.cos * dx - self.sin * dy + self.target_x;
        let yr = self.sin * dx + self.cos * dy + self.target_y;
        let angle = (f64::from(m.angle) + self.dtheta_deg).rem_euclid(360.0);
        (xr, yr, angle)
    }
}

/// Circular distance between two angles on a 360 degree cycle: the shorter
/// of the clockwise and counterclockwise arcs.
fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Probe minutiae with at least one tolerance-consistent counterpart in the
/// candidate set under the given pose. Each probe minutia counts at most
/// once; the first satisfying counterpart ends its search.
fn aligned_matches(
    probe: &[Minutia],
    candidate: &[Minutia],
    alignment: &Alignment,
    radius: f64,
    angle_tolerance: f64,
) -> u32 {
    probe
        .iter()
        .filter(|m| {
            let (xr, yr, angle) = alignment.apply(m);
            candidate.iter().any(|c| {
                (xr - f64::from(c.x)).abs() <= radius
                    && (yr - f64::from(c.y)).abs() <= radius
                    && angular_distance(angle, f64::from(c.angle)) <= angle_tolerance
            })
        })
        .count() as u32
}

/// Brute-force match score between two minutiae sets.
///
/// Every ordered pivot pair (probe minutia, candidate minutia) is a pose
/// hypothesis; the score is the best correspondence count over all of them.
/// The enumeration is exhaustive on purpose: the maximum over every
/// hypothesis defines the score, so no hypothesis may be skipped. Either set
/// being empty yields 0. Pure function, no side effects.
pub fn match_score(
    probe: &[Minutia],
    candidate: &[Minutia],
    radius: f64,
    angle_tolerance: f64,
) -> u32 {
    probe
        .iter()
        .flat_map(|p| candidate.iter().map(move |q| Alignment::from_pivots(p, q)))
        .map(|alignment| aligned_matches(probe, candidate, &alignment, radius, angle_tolerance))
        .max()
        .unwrap_or(0)
}

/// Scores minutiae sets against each other under a borrowed configuration.
pub struct TemplateMatcher<'a> {
    config: &'a MatchConfig,
}

impl<'a> TemplateMatcher<'a> {
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, probe: &[Minutia], candidate: &[Minutia]) -> u32 {
        let score = match_score(
            probe,
            candidate,
            self.config.radius,
            self.config.angle_tolerance,
        );
        debug!(
            "matched {score} of {} probe minutiae against {} candidates",
            probe.len(),
            candidate.len()
        );
        score
    }

    pub fn is_match(&self, score: u32) -> bool {
        score >= self.config.score_threshold
    }
}
