//! Free-text quiz answer checking.

use serde::{Deserialize, Serialize};

/// Options for [`is_text_answer_correct`]
///
/// Serialized in camelCase like quiz question documents; snake_case keys are also
/// accepted so the options can sit inside a [`MatchConfig`](crate::MatchConfig) file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchOptions {
    /// Accept answers that contain, or are contained in, the correct answer
    #[serde(alias = "allow_partial_match")]
    pub allow_partial_match: bool,

    /// Minimum length of the shorter answer, as a percentage of the longer one,
    /// for a partial match to count
    #[serde(alias = "min_match_percentage")]
    pub min_match_percentage: f64,

    /// Other answers accepted as exact matches
    #[serde(alias = "acceptable_alternatives")]
    pub acceptable_alternatives: Vec<String>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            allow_partial_match: true,
            min_match_percentage: 70.0,
            acceptable_alternatives: Vec::new(),
        }
    }
}

impl MatchOptions {
    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptable_alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    pub fn exact_only(mut self) -> Self {
        self.allow_partial_match = false;
        self
    }

    pub fn with_min_match_percentage(mut self, percentage: f64) -> Self {
        self.min_match_percentage = percentage;
        self
    }
}

/// Lower-case, drop everything but word characters and whitespace, collapse whitespace.
fn normalize_answer(answer: &str) -> String {
    answer
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `shorter` is long enough relative to `longer` for containment to count
#[inline]
fn long_enough(shorter: &str, longer: &str, min_match_percentage: f64) -> bool {
    shorter.len() as f64 >= longer.len() as f64 * (min_match_percentage / 100.0)
}

/// Decide whether a free-text quiz answer is correct.
///
/// Checks, in order: exact match after normalization, a match against any acceptable
/// alternative, then (when partial matching is allowed) containment in either
/// direction as long as the contained answer is at least `min_match_percentage`
/// percent as long as the containing one.
///
/// An absent or empty correct answer, or an empty submission, is never correct.
/// Both sides are otherwise compared after normalization, so two punctuation-only
/// answers are equal.
///
/// ```
/// use title_match::{is_text_answer_correct, MatchOptions};
///
/// let options = MatchOptions::default();
/// assert!(is_text_answer_correct("Home Alone", Some("home alone"), &options));
/// assert!(is_text_answer_correct("the grinch", Some("The Grinch!"), &options));
/// assert!(!is_text_answer_correct("a", Some("National Lampoon's Christmas Vacation"), &options));
/// assert!(!is_text_answer_correct("Elf", None, &options));
/// ```
pub fn is_text_answer_correct(
    user_answer: &str,
    correct_answer: Option<&str>,
    options: &MatchOptions,
) -> bool {
    let Some(correct_answer) = correct_answer.filter(|a| !a.is_empty()) else {
        return false;
    };
    if user_answer.is_empty() {
        return false;
    }

    let user = normalize_answer(user_answer);
    let correct = normalize_answer(correct_answer);

    if user == correct {
        return true;
    }

    if options
        .acceptable_alternatives
        .iter()
        .map(|alt| normalize_answer(alt))
        .any(|alt| alt == user)
    {
        return true;
    }

    if !options.allow_partial_match {
        return false;
    }

    let pct = options.min_match_percentage;
    if correct.contains(&user) && long_enough(&user, &correct, pct) {
        return true;
    }
    if user.contains(&correct) && long_enough(&correct, &user, pct) {
        return true;
    }

    false
}

/// Canonical answer of a quiz question together with its matching options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerKey {
    #[serde(default, alias = "correctAnswer")]
    pub answer: Option<String>,

    #[serde(flatten)]
    pub options: MatchOptions,
}

impl AnswerKey {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            options: MatchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Check a submission against this key
    pub fn check(&self, submission: &str) -> bool {
        is_text_answer_correct(submission, self.answer.as_deref(), &self.options)
    }
}
