use serde::{Deserialize, Serialize};
use crate::core::{CanonicalRecord, ImportRow};

/// How an import row was classified after scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBucket {
    /// Score at or above the auto-match threshold
    AutoMatch,
    /// Score between the review and auto-match thresholds
    Review,
    /// Best candidate is already in the user's collection
    Duplicate,
    /// No candidate scored at or above the review threshold
    NotFound,
}

impl std::fmt::Display for MatchBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchBucket::AutoMatch => write!(f, "auto-match"),
            MatchBucket::Review => write!(f, "review"),
            MatchBucket::Duplicate => write!(f, "duplicate"),
            MatchBucket::NotFound => write!(f, "not found"),
        }
    }
}

/// Candidate record with its confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub record: CanonicalRecord,
    pub score: u8,
}

impl ScoredCandidate {
    pub fn new(record: CanonicalRecord, score: u8) -> Self {
        Self { record, score }
    }
}

/// Outcome of matching one import row against its candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportMatch {
    /// The row that was matched
    pub row: ImportRow,

    /// Best-scoring candidate, if there were any candidates at all
    pub best: Option<CanonicalRecord>,

    /// Score of `best` (0 when there is none)
    pub score: u8,

    pub bucket: MatchBucket,

    /// Runner-up candidates, best first
    #[serde(default)]
    pub alternatives: Vec<ScoredCandidate>,

    /// Scorer used (for logging/reporting)
    pub scorer: String,
}

impl ImportMatch {
    /// Row with no candidates to compare against
    pub fn not_found(row: ImportRow, scorer: impl Into<String>) -> Self {
        Self {
            row,
            best: None,
            score: 0,
            bucket: MatchBucket::NotFound,
            alternatives: Vec::new(),
            scorer: scorer.into(),
        }
    }

    /// Whether the row can be imported without asking the user
    pub fn is_auto_match(&self) -> bool {
        self.bucket == MatchBucket::AutoMatch
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match &self.best {
            Some(best) => format!(
                "{} -> {} - {}% [{}] {}",
                self.row.title,
                best.display_name(),
                self.score,
                self.scorer,
                self.bucket
            ),
            None => format!("{} -> - [{}] {}", self.row.title, self.scorer, self.bucket),
        }
    }
}

/// Per-bucket counts for a batch of import rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub auto_matched: usize,
    pub review: usize,
    pub duplicates: usize,
    pub not_found: usize,
}

impl BatchSummary {
    pub fn from_matches(matches: &[ImportMatch]) -> Self {
        let mut summary = Self {
            total: matches.len(),
            ..Default::default()
        };
        for m in matches {
            match m.bucket {
                MatchBucket::AutoMatch => summary.auto_matched += 1,
                MatchBucket::Review => summary.review += 1,
                MatchBucket::Duplicate => summary.duplicates += 1,
                MatchBucket::NotFound => summary.not_found += 1,
            }
        }
        summary
    }
}
