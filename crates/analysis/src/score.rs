use crate::types::{MergedRisk, Recommendation, ScoreResult, SemanticFinding};

/// Aggregate merged risk weights and compare against the threshold.
///
/// `DoNotSign` exactly when the total reaches the threshold. One degenerate
/// case overrides the comparison: when the merged set and the semantic log
/// are both empty there was no evidence of any kind, and the result is an
/// unconditional `Sign` even for a threshold of zero.
#[must_use]
pub fn score(risks: &[MergedRisk], semantic_log: &[SemanticFinding], threshold: u32) -> ScoreResult {
    let total_weight = risks.iter().map(|risk| risk.weight).sum();

    let recommendation = if risks.is_empty() && semantic_log.is_empty() {
        Recommendation::Sign
    } else if total_weight >= threshold {
        Recommendation::DoNotSign
    } else {
        Recommendation::Sign
    };

    ScoreResult {
        total_weight,
        threshold,
        recommendation,
    }
}
