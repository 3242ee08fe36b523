//! Search keyword generation for catalogue records.
//!
//! Keywords are precomputed when a record is written and stored alongside it; the
//! document store later intersects them with [`search_terms`] of a user query.

use std::collections::HashSet;

use crate::core::CanonicalRecord;
use crate::normalize::normalize_title;

/// Maximum number of keywords stored per record
pub const MAX_KEYWORDS: usize = 200;

/// Maximum number of terms in one keyword query (array-membership query limit)
pub const MAX_SEARCH_TERMS: usize = 10;

/// Insertion-ordered set of tokens
#[derive(Debug, Default)]
struct KeywordSet {
    seen: HashSet<String>,
    tokens: Vec<String>,
}

impl KeywordSet {
    fn insert(&mut self, token: &str) {
        if token.is_empty() || self.seen.contains(token) {
            return;
        }
        self.seen.insert(token.to_string());
        self.tokens.push(token.to_string());
    }

    /// Add the normalized phrase and each of its words
    fn insert_phrase(&mut self, raw: &str) {
        let phrase = normalize_title(raw);
        if phrase.is_empty() {
            return;
        }
        self.insert(&phrase);
        for word in phrase.split_whitespace() {
            self.insert(word);
        }
    }

    /// Add every segment of a comma-joined list
    fn insert_list(&mut self, joined: Option<&str>) {
        let Some(joined) = joined else {
            return;
        };
        for segment in joined.split(',') {
            self.insert_phrase(segment);
        }
    }

    fn into_capped(mut self, cap: usize) -> Vec<String> {
        self.tokens.truncate(cap);
        self.tokens
    }
}

/// Build the searchable token list for a record.
///
/// Tokens come from the normalized title (whole and per word), the year verbatim, and
/// each genre, actor and director entry (whole and per word). The list is
/// deduplicated, never contains empty strings, and is capped at [`MAX_KEYWORDS`]
/// entries. When more are generated the first ones in that order are kept, so very
/// long cast lists may lose their tail.
pub fn extract_keywords(record: &CanonicalRecord) -> Vec<String> {
    let mut keywords = KeywordSet::default();

    keywords.insert_phrase(&record.title);

    if let Some(year) = record.year.as_deref() {
        keywords.insert(year);
    }

    keywords.insert_list(record.genre.as_deref());
    keywords.insert_list(record.actors.as_deref());
    keywords.insert_list(record.director.as_deref());

    keywords.into_capped(MAX_KEYWORDS)
}

/// Turn a free-text search query into keyword query terms.
///
/// Returns the distinct words of the normalized query, at most [`MAX_SEARCH_TERMS`].
pub fn search_terms(query: &str) -> Vec<String> {
    let mut terms = KeywordSet::default();
    for word in normalize_title(query).split_whitespace() {
        terms.insert(word);
    }
    terms.into_capped(MAX_SEARCH_TERMS)
}
