//! Title normalization for matching and sorting.
//!
//! Two different transforms live here:
//! - [`normalize_title`] produces a lower-case, punctuation-free form used for equality,
//!   prefix search and keyword generation.
//! - [`generate_sort_title`] only drops a leading English article and otherwise keeps the
//!   display title intact, for alphabetical ordering.

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Leading determiners removed by [`normalize_title`] (input is already lower-cased)
const LEADING_ARTICLES: &[&str] = &["the ", "a ", "an "];

/// Articles recognised by [`generate_sort_title`], matched case-insensitively
const SORT_ARTICLES: &[&str] = &["the", "a", "an"];

/// Apostrophes are deleted rather than turned into word breaks ("Santa's" -> "santas")
const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{02BC}', '`'];

// ═══════════════════════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════════════════════

/// Normalize a title for matching.
///
/// Lower-cases, removes apostrophes, turns every run of characters outside `[a-z0-9]`
/// into a single space, trims, and strips leading "the"/"a"/"an".
///
/// The result is a fixed point: `normalize_title(&normalize_title(x)) == normalize_title(x)`.
///
/// ```
/// use title_match::normalize_title;
///
/// assert_eq!(normalize_title("The Grinch"), "grinch");
/// assert_eq!(normalize_title("Mr. Magorium's Wonder Emporium"), "mr magoriums wonder emporium");
/// assert_eq!(normalize_title("   "), "");
/// ```
pub fn normalize_title(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_space = false;

    for c in lower.chars() {
        if APOSTROPHES.contains(&c) {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    strip_leading_articles(&out).to_string()
}

/// Strip leading articles until none is left, so that the output never starts with one.
#[inline]
fn strip_leading_articles(mut s: &str) -> &str {
    while let Some(rest) = LEADING_ARTICLES.iter().find_map(|a| s.strip_prefix(a)) {
        s = rest;
    }
    s
}

// ═══════════════════════════════════════════════════════════════════════════
// Sort title
// ═══════════════════════════════════════════════════════════════════════════

/// Derive the title used for alphabetical sorting.
///
/// Drops a single leading "The"/"A"/"An" followed by whitespace and returns the rest
/// untouched. Titles without a leading article, or consisting of nothing but the
/// article, come back unchanged.
///
/// ```
/// use title_match::generate_sort_title;
///
/// assert_eq!(generate_sort_title("The Polar Express"), "Polar Express");
/// assert_eq!(generate_sort_title("An American Tail"), "American Tail");
/// assert_eq!(generate_sort_title("Anastasia"), "Anastasia");
/// ```
pub fn generate_sort_title(title: &str) -> String {
    let Some((first, rest)) = title.split_once(char::is_whitespace) else {
        return title.to_string();
    };

    let is_article = SORT_ARTICLES.iter().any(|a| first.eq_ignore_ascii_case(a));
    let rest = rest.trim_start();

    if is_article && !rest.is_empty() {
        rest.to_string()
    } else {
        title.to_string()
    }
}
