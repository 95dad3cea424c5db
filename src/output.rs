/// Quality of a match. Values from 0.0 to 1.0, where 1.0 means every probe
/// minutia found a counterpart under the best pose.
pub type MatchQuality = f32;

/// Result of comparing two fingerprint templates.
///
/// The score is the raw correspondence count from the matcher; the verdict
/// and quality are derived for callers that want a decision or a normalized
/// figure instead of interpreting the count themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutput {
    /// Best correspondence count over all pose hypotheses.
    pub score: u32,
    /// Threshold the score was compared against.
    pub threshold: u32,
    /// Whether the score reached the threshold.
    pub is_match: bool,
    /// Minutiae parsed from the probe template.
    pub probe_minutiae: usize,
    /// Minutiae parsed from the candidate template.
    pub candidate_minutiae: usize,
    /// Score normalized by the probe set size.
    pub quality: MatchQuality,
}

impl MatchOutput {
    pub fn new(score: u32, threshold: u32, probe_minutiae: usize, candidate_minutiae: usize) -> Self {
        let quality = if probe_minutiae == 0 {
            0.0
        } else {
            score as f32 / probe_minutiae as f32
        };
        Self {
            score,
            threshold,
            is_match: score >= threshold,
            probe_minutiae,
            candidate_minutiae,
            quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_follows_threshold() {
        assert!(MatchOutput::new(12, 12, 40, 40).is_match);
        assert!(!MatchOutput::new(11, 12, 40, 40).is_match);
    }

    #[test]
    fn quality_is_score_over_probe_size() {
        let output = MatchOutput::new(23, 12, 46, 36);
        assert!((output.quality - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_probe_has_zero_quality() {
        let output = MatchOutput::new(0, 12, 0, 36);
        assert_eq!(output.quality, 0.0);
        assert!(!output.is_match);
    }
}
