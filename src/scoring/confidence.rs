use crate::core::{CanonicalRecord, ImportRow};
use crate::scoring::Scorer;

// Title sub-score (max 60)
const TITLE_EXACT: f64 = 60.0;
const TITLE_CONTAINS: f64 = 40.0;
const TITLE_WORD_OVERLAP: f64 = 40.0;

// Year sub-score (max 40)
const YEAR_EXACT: f64 = 40.0;
const YEAR_ADJACENT: f64 = 20.0;
const YEAR_TOLERANCE: i32 = 1;
const YEAR_PREFIX_LEN: usize = 4;

const MAX_SCORE: f64 = 100.0;

/// Confidence (0-100) that an import row and a catalogue record are the same item.
///
/// Blends a title sub-score (exact 60, containment 40, otherwise proportional word
/// overlap up to 40) with a year sub-score (same year 40, off by one 20), then rounds.
/// Missing fields contribute nothing; the function never fails.
///
/// ```
/// use title_match::{calculate_confidence, CanonicalRecord, ImportRow};
///
/// let candidate = CanonicalRecord::new("Elf").with_year("2003");
/// assert_eq!(calculate_confidence(&ImportRow::new("Elf"), &candidate), 60);
/// assert_eq!(calculate_confidence(&ImportRow::new("Elf").with_year("2003"), &candidate), 100);
/// ```
pub fn calculate_confidence(row: &ImportRow, candidate: &CanonicalRecord) -> u8 {
    let total = title_score(&row.title, &candidate.title)
        + year_score(row.release_year.as_deref(), candidate.year.as_deref());

    total.clamp(0.0, MAX_SCORE).round() as u8
}

#[inline]
fn title_score(row_title: &str, candidate_title: &str) -> f64 {
    let a = row_title.to_lowercase();
    let b = candidate_title.to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return TITLE_EXACT;
    }
    if a.contains(&b) || b.contains(&a) {
        return TITLE_CONTAINS;
    }

    let a_words: Vec<&str> = a.split(' ').collect();
    let b_words: Vec<&str> = b.split(' ').collect();

    // Every occurrence in `a` counts, so repeated words weigh more
    let matching = a_words.iter().filter(|w| b_words.contains(w)).count();
    let longest = a_words.len().max(b_words.len());

    matching as f64 / longest as f64 * TITLE_WORD_OVERLAP
}

#[inline]
fn year_score(row_year: Option<&str>, candidate_year: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (
        row_year.filter(|y| !y.is_empty()),
        candidate_year.filter(|y| !y.is_empty()),
    ) else {
        return 0.0;
    };

    let a: String = a.chars().take(YEAR_PREFIX_LEN).collect();
    let b: String = b.chars().take(YEAR_PREFIX_LEN).collect();

    if a == b {
        return YEAR_EXACT;
    }

    // Whole prefix must parse: "199a" is not read as 199 and scores 0
    match (a.trim().parse::<i32>(), b.trim().parse::<i32>()) {
        (Ok(x), Ok(y)) if (x - y).abs() <= YEAR_TOLERANCE => YEAR_ADJACENT,
        _ => 0.0,
    }
}

/// Default scorer used by the import matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for ConfidenceScorer {
    fn score(&self, row: &ImportRow, candidate: &CanonicalRecord) -> u8 {
        calculate_confidence(row, candidate)
    }

    fn name(&self) -> &str {
        "confidence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(row_title: &str, row_year: Option<&str>, title: &str, year: Option<&str>) -> u8 {
        let row = ImportRow {
            title: row_title.to_string(),
            release_year: row_year.map(String::from),
        };
        let candidate = CanonicalRecord {
            title: title.to_string(),
            year: year.map(String::from),
            ..Default::default()
        };
        calculate_confidence(&row, &candidate)
    }

    #[test]
    fn test_exact_title_without_row_year() {
        assert_eq!(score("Elf", None, "Elf", Some("2003")), 60);
    }

    #[test]
    fn test_exact_title_and_year() {
        assert_eq!(score("Elf", Some("2003"), "Elf", Some("2003")), 100);
    }

    #[test]
    fn test_title_is_case_insensitive() {
        assert_eq!(score("HOME ALONE", None, "Home Alone", None), 60);
    }

    #[test]
    fn test_year_tolerance() {
        assert_eq!(score("Elf", Some("2004"), "Elf", Some("2003")), 80);
        assert_eq!(score("Elf", Some("2002"), "Elf", Some("2003")), 80);
        assert_eq!(score("Elf", Some("2005"), "Elf", Some("2003")), 60);
    }

    #[test]
    fn test_year_uses_first_four_characters() {
        assert_eq!(score("Elf", Some("2003-11-07"), "Elf", Some("2003")), 100);
        assert_eq!(score("Elf", Some("2004"), "Elf", Some("2003–2005")), 80);
    }

    #[test]
    fn test_unparseable_year_only_matches_exactly() {
        assert_eq!(score("Elf", Some("abcd"), "Elf", Some("2003")), 60);
        assert_eq!(score("Elf", Some("n/a"), "Elf", Some("n/a")), 100);
        assert_eq!(score("Elf", Some("199a"), "Elf", Some("1990")), 60);
    }

    #[test]
    fn test_year_alone_counts() {
        assert_eq!(score("Zzz", Some("2003"), "Elf", Some("2003")), 40);
    }

    #[test]
    fn test_containment() {
        let lampoon = "National Lampoon's Christmas Vacation";
        assert_eq!(score("Christmas Vacation", None, lampoon, None), 40);
        assert_eq!(score("Die Hard 2: Die Harder", None, "die hard", None), 40);
    }

    #[test]
    fn test_word_overlap() {
        // 2 of max(3, 3) words shared: 2/3 * 40 = 26.67 -> 27
        assert_eq!(score("Santa Clause 2", None, "The Santa Clause", None), 27);
        // 1 of max(2, 4): 10
        assert_eq!(score("Jingle Jangle", None, "Jingle All The Way", None), 10);
        assert_eq!(score("Krampus", None, "Elf", None), 0);
    }

    #[test]
    fn test_rounds_half_up() {
        // 3/8 * 40 = 15
        assert_eq!(score("a b c d e f g h", None, "a b c x y z q r", None), 15);
        // 1/16 * 40 = 2.5 -> 3
        let a = (0..16).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let b = std::iter::once("w0".to_string())
            .chain((1..16).map(|i| format!("x{}", i)))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(score(&a, None, &b, None), 3);
    }

    #[test]
    fn test_missing_titles_score_zero() {
        assert_eq!(score("", None, "Elf", None), 0);
        assert_eq!(score("Elf", None, "", None), 0);
        assert_eq!(score("", Some("2003"), "", Some("2003")), 40);
    }

    #[test]
    fn test_empty_years_are_absent() {
        assert_eq!(score("Elf", Some(""), "Elf", Some("")), 60);
    }

    #[test]
    fn test_bounds() {
        let cases = [
            ("Elf", Some("2003"), "Elf", Some("2003")),
            ("a a a a", Some("2003"), "a", Some("2004")),
            ("", None, "", None),
            ("x", Some("9999"), "y", Some("-999")),
        ];
        for (rt, ry, t, y) in cases {
            assert!(score(rt, ry, t, y) <= 100);
        }
    }

    #[test]
    fn test_scorer_rank_orders_by_score() {
        let scorer = ConfidenceScorer::new();
        let row = ImportRow::new("Elf").with_year("2003");
        let candidates = vec![
            CanonicalRecord::new("Elf").with_year("2014"),
            CanonicalRecord::new("Elf").with_year("2003"),
            CanonicalRecord::new("Elf: Buddy's Musical Christmas").with_year("2014"),
        ];

        let ranked = scorer.rank(&row, &candidates);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].score, 100);
        assert_eq!(ranked[0].record.year.as_deref(), Some("2003"));
        assert_eq!(ranked[1].score, 60);
        assert_eq!(ranked[2].score, 40);
        assert_eq!(scorer.name(), "confidence");
    }
}
