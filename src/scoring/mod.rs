pub mod confidence;

use crate::core::{CanonicalRecord, ImportRow, ScoredCandidate};

pub use confidence::{calculate_confidence, ConfidenceScorer};

/// Trait for import-row scoring implementations
pub trait Scorer: Send + Sync {
    /// Score how likely `candidate` is the item `row` refers to (0-100)
    fn score(&self, row: &ImportRow, candidate: &CanonicalRecord) -> u8;

    /// Get scorer name for logging
    fn name(&self) -> &str;

    /// Score every candidate, return sorted by score (highest first).
    ///
    /// The sort is stable, so equally scored candidates keep catalogue order.
    fn rank(&self, row: &ImportRow, candidates: &[CanonicalRecord]) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|record| ScoredCandidate::new(record.clone(), self.score(row, record)))
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}
