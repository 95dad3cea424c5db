pub mod error;
pub mod matcher;
pub mod minutia;
pub mod output;
pub mod template_parser;

mod display;
#[cfg(test)]
pub(crate) mod test_templates;

pub use crate::error::RidgelineError;
pub use crate::matcher::{match_score, MatchConfig, TemplateMatcher};
pub use crate::minutia::{Minutia, MinutiaKind};
pub use crate::output::{MatchOutput, MatchQuality};

use crate::template_parser::parse_template;

/// Compares encoded fingerprint templates end to end: base64 decode, record
/// parse, rigid-alignment scoring, threshold verdict.
pub struct Ridgeline {
    pub config: MatchConfig,
}

impl Ridgeline {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Decode both templates and score the probe against the candidate.
    ///
    /// Decoding or header parsing failures propagate; a record stream that
    /// ends before its declared count merely yields a smaller set.
    pub fn compare(&self, probe: &str, candidate: &str) -> Result<MatchOutput, RidgelineError> {
        let probe_minutiae = parse_template(probe)?;
        let candidate_minutiae = parse_template(candidate)?;

        let matcher = TemplateMatcher::new(&self.config);
        let score = matcher.score(&probe_minutiae, &candidate_minutiae);

        Ok(MatchOutput::new(
            score,
            self.config.score_threshold,
            probe_minutiae.len(),
            candidate_minutiae.len(),
        ))
    }
}

impl Default for Ridgeline {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
