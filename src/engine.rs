use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::MatchConfig;
use crate::core::{BatchSummary, CanonicalRecord, ImportMatch, ImportRow, MatchBucket};
use crate::error::Result;
use crate::scoring::{ConfidenceScorer, Scorer};

/// Import row together with the catalogue candidates found for it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportRequest {
    pub row: ImportRow,
    #[serde(default)]
    pub candidates: Vec<CanonicalRecord>,
}

impl ImportRequest {
    pub fn new(row: ImportRow, candidates: Vec<CanonicalRecord>) -> Self {
        Self { row, candidates }
    }
}

/// Scores import rows against catalogue candidates and buckets the outcome
pub struct ImportMatcher {
    scorer: Arc<dyn Scorer>,
    config: MatchConfig,
    /// Catalogue ids already in the user's collection
    owned_ids: HashSet<String>,
}

impl ImportMatcher {
    /// Create a matcher with the confidence scorer
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::with_scorer(config, Arc::new(ConfidenceScorer::new()))
    }

    /// Create a matcher with a custom scorer
    pub fn with_scorer(config: MatchConfig, scorer: Arc<dyn Scorer>) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected import config: {}", e);
            return Err(e);
        }
        tracing::debug!("Import matcher using {} scorer ({})", scorer.name(), config);

        Ok(Self {
            scorer,
            config,
            owned_ids: HashSet::new(),
        })
    }

    /// Mark catalogue ids as already owned, so matching rows land in the duplicate bucket
    pub fn with_owned_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owned_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Classify a best score (ignoring duplicates)
    pub fn bucket_for(&self, score: u8) -> MatchBucket {
        if score >= self.config.auto_match_threshold {
            MatchBucket::AutoMatch
        } else if score >= self.config.review_threshold {
            MatchBucket::Review
        } else {
            MatchBucket::NotFound
        }
    }

    /// Match one row against its candidates
    pub fn match_row(&self, row: &ImportRow, candidates: &[CanonicalRecord]) -> ImportMatch {
        let ranked = self.scorer.rank(row, candidates);

        let Some(best) = ranked.first() else {
            tracing::debug!("No candidates for '{}'", row.title);
            return ImportMatch::not_found(row.clone(), self.scorer.name());
        };

        let mut bucket = self.bucket_for(best.score);
        let owned = best
            .record
            .id
            .as_ref()
            .is_some_and(|id| self.owned_ids.contains(id));
        if owned && bucket != MatchBucket::NotFound {
            bucket = MatchBucket::Duplicate;
        }

        let alternatives = ranked
            .iter()
            .skip(1)
            .take(self.config.max_alternatives)
            .cloned()
            .collect();

        let result = ImportMatch {
            row: row.clone(),
            best: Some(best.record.clone()),
            score: best.score,
            bucket,
            alternatives,
            scorer: self.scorer.name().to_string(),
        };

        tracing::debug!("{}", result.display());
        result
    }

    /// Match many rows in parallel; results keep the input order
    pub fn match_batch(&self, requests: &[ImportRequest]) -> Vec<ImportMatch> {
        let matches: Vec<ImportMatch> = requests
            .par_iter()
            .map(|req| self.match_row(&req.row, &req.candidates))
            .collect();

        let summary = BatchSummary::from_matches(&matches);
        tracing::info!(
            "Matched {} rows: {} auto, {} review, {} duplicate, {} not found",
            summary.total,
            summary.auto_matched,
            summary.review,
            summary.duplicates,
            summary.not_found
        );

        matches
    }

    /// Per-bucket counts
    pub fn summarize(matches: &[ImportMatch]) -> BatchSummary {
        BatchSummary::from_matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_alone_candidates() -> Vec<CanonicalRecord> {
        vec![
            CanonicalRecord::new("Home Alone 2: Lost in New York")
                .with_id("tt0104431")
                .with_year("1992"),
            CanonicalRecord::new("Home Alone").with_id("tt0099785").with_year("1990"),
            CanonicalRecord::new("Home Alone 3").with_id("tt0119303").with_year("1997"),
        ]
    }

    #[test]
    fn test_auto_match() {
        let matcher = ImportMatcher::new(MatchConfig::default()).unwrap();
        let row = ImportRow::new("Home Alone").with_year("1990");

        let result = matcher.match_row(&row, &home_alone_candidates());
        assert_eq!(result.bucket, MatchBucket::AutoMatch);
        assert_eq!(result.score, 100);
        assert_eq!(result.best.unwrap().id.as_deref(), Some("tt0099785"));
        assert_eq!(result.alternatives.len(), 2);
        assert!(result.alternatives[0].score >= result.alternatives[1].score);
    }

    #[test]
    fn test_review_bucket() {
        let matcher = ImportMatcher::new(MatchConfig::default()).unwrap();
        // containment only: 40
        let row = ImportRow::new("Lost in New York");
        let result = matcher.match_row(&row, &home_alone_candidates());
        assert_eq!(result.score, 40);
        assert_eq!(result.bucket, MatchBucket::Review);
    }

    #[test]
    fn test_not_found() {
        let matcher = ImportMatcher::new(MatchConfig::default()).unwrap();
        let result = matcher.match_row(&ImportRow::new("Krampus"), &home_alone_candidates());
        assert_eq!(result.bucket, MatchBucket::NotFound);

        let empty = matcher.match_row(&ImportRow::new("Krampus"), &[]);
        assert_eq!(empty.bucket, MatchBucket::NotFound);
        assert!(empty.best.is_none());
    }

    #[test]
    fn test_duplicate_bucket() {
        let matcher = ImportMatcher::new(MatchConfig::default())
            .unwrap()
            .with_owned_ids(["tt0099785"]);
        let row = ImportRow::new("Home Alone").with_year("1990");
        let result = matcher.match_row(&row, &home_alone_candidates());
        assert_eq!(result.bucket, MatchBucket::Duplicate);
    }

    #[test]
    fn test_max_alternatives() {
        let config = MatchConfig {
            max_alternatives: 1,
            ..Default::default()
        };
        let matcher = ImportMatcher::new(config).unwrap();
        let result = matcher.match_row(&ImportRow::new("Home Alone"), &home_alone_candidates());
        assert_eq!(result.alternatives.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig {
            auto_match_threshold: 30,
            review_threshold: 60,
            ..Default::default()
        };
        assert!(ImportMatcher::new(config).is_err());
    }

    #[test]
    fn test_batch_keeps_order() {
        let matcher = ImportMatcher::new(MatchConfig::default()).unwrap();
        let requests: Vec<ImportRequest> = ["Home Alone", "Krampus", "Home Alone 3"]
            .iter()
            .map(|t| ImportRequest::new(ImportRow::new(*t), home_alone_candidates()))
            .collect();

        let matches = matcher.match_batch(&requests);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].row.title, "Home Alone");
        assert_eq!(matches[1].row.title, "Krampus");
        assert_eq!(matches[2].row.title, "Home Alone 3");

        let summary = ImportMatcher::summarize(&matches);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.not_found, 1);
    }
}
