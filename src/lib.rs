//! # Title Match
//!
//! Fuzzy text matching for a movie catalogue and its trivia quiz:
//! - Title normalization and sort titles
//! - Search keyword generation for catalogue records
//! - Import confidence scoring (spreadsheet row vs catalogue record)
//! - Free-text quiz answer checking
//! - Bucketed, parallel import matching on top of the scorer
//!
//! Every matching function is pure and total: missing data lowers a score or fails a
//! match, it never produces an error.
//!
//! ## Example Usage
//!
//! ```rust
//! use title_match::{
//!     calculate_confidence, is_text_answer_correct, CanonicalRecord, ImportRow, MatchOptions,
//! };
//!
//! let row = ImportRow::new("Elf").with_year("2003");
//! let candidate = CanonicalRecord::new("Elf").with_year("2003");
//! assert_eq!(calculate_confidence(&row, &candidate), 100);
//!
//! let options = MatchOptions::default().with_alternatives(["Christmas Vacation"]);
//! assert!(is_text_answer_correct(
//!     "Christmas Vacation",
//!     Some("National Lampoon's Christmas Vacation"),
//!     &options,
//! ));
//! ```

pub mod answer;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod normalize;
pub mod scoring;

// Re-export primary types
pub use answer::{is_text_answer_correct, AnswerKey, MatchOptions};
pub use config::MatchConfig;
pub use crate::core::{
    BatchSummary, CanonicalRecord, ImportMatch, ImportRow, MatchBucket, ScoredCandidate,
};
pub use engine::{ImportMatcher, ImportRequest};
pub use error::{MatchError, Result};
pub use keywords::{extract_keywords, search_terms, MAX_KEYWORDS};
pub use normalize::{generate_sort_title, normalize_title};
pub use scoring::{calculate_confidence, ConfidenceScorer, Scorer};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
