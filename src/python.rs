use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::answer::MatchOptions;
use crate::core::{CanonicalRecord, ImportRow, ScoredCandidate};
use crate::scoring::{ConfidenceScorer, Scorer};

/// Normalize a title for matching
#[pyfunction]
fn normalize_title(title: &str) -> String {
    crate::normalize::normalize_title(title)
}

/// Title with a leading English article removed
#[pyfunction]
fn generate_sort_title(title: &str) -> String {
    crate::normalize::generate_sort_title(title)
}

/// Search keywords for a catalogue record
#[pyfunction]
#[pyo3(signature = (title, year=None, genre=None, actors=None, director=None))]
fn extract_keywords(
    title: String,
    year: Option<String>,
    genre: Option<String>,
    actors: Option<String>,
    director: Option<String>,
) -> Vec<String> {
    let record = CanonicalRecord {
        id: None,
        title,
        year,
        genre,
        actors,
        director,
    };
    crate::keywords::extract_keywords(&record)
}

/// Confidence (0-100) that an import row matches a candidate
#[pyfunction]
#[pyo3(signature = (title, candidate_title, release_year=None, candidate_year=None))]
fn calculate_confidence(
    title: String,
    candidate_title: String,
    release_year: Option<String>,
    candidate_year: Option<String>,
) -> u8 {
    let row = ImportRow { title, release_year };
    let candidate = CanonicalRecord {
        title: candidate_title,
        year: candidate_year,
        ..Default::default()
    };
    crate::scoring::calculate_confidence(&row, &candidate)
}

/// Rank `(title, year)` candidates for an import row, best first
#[pyfunction]
#[pyo3(signature = (title, candidates, release_year=None))]
fn rank_candidates(
    py: Python,
    title: String,
    candidates: Vec<(String, Option<String>)>,
    release_year: Option<String>,
) -> PyResult<Vec<PyObject>> {
    let row = ImportRow { title, release_year };
    let records: Vec<CanonicalRecord> = candidates
        .into_iter()
        .map(|(title, year)| CanonicalRecord {
            title,
            year,
            ..Default::default()
        })
        .collect();

    ConfidenceScorer::new()
        .rank(&row, &records)
        .iter()
        .map(|scored| scored_candidate_to_py(py, scored))
        .collect()
}

/// Whether a free-text quiz answer is correct
#[pyfunction]
#[pyo3(signature = (
    user_answer,
    correct_answer=None,
    allow_partial_match=true,
    min_match_percentage=70.0,
    acceptable_alternatives=None
))]
fn is_text_answer_correct(
    user_answer: &str,
    correct_answer: Option<&str>,
    allow_partial_match: bool,
    min_match_percentage: f64,
    acceptable_alternatives: Option<Vec<String>>,
) -> bool {
    let options = MatchOptions {
        allow_partial_match,
        min_match_percentage,
        acceptable_alternatives: acceptable_alternatives.unwrap_or_default(),
    };
    crate::answer::is_text_answer_correct(user_answer, correct_answer, &options)
}

/// Convert ScoredCandidate to Python dict
fn scored_candidate_to_py(py: Python, scored: &ScoredCandidate) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("title", &scored.record.title)?;
    dict.set_item("year", &scored.record.year)?;
    dict.set_item("score", scored.score)?;
    Ok(dict.into())
}

/// Python module
#[pymodule]
fn title_match(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_title, m)?)?;
    m.add_function(wrap_pyfunction!(generate_sort_title, m)?)?;
    m.add_function(wrap_pyfunction!(extract_keywords, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_confidence, m)?)?;
    m.add_function(wrap_pyfunction!(rank_candidates, m)?)?;
    m.add_function(wrap_pyfunction!(is_text_answer_correct, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
