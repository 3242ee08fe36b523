pub mod record;
pub mod import_match;

pub use record::{CanonicalRecord, ImportRow};
pub use import_match::{BatchSummary, ImportMatch, MatchBucket, ScoredCandidate};
