//! Fuzzy string similarity scorers.
//!
//! All scorers return a score in `[0.0, 100.0]`, matching the scale the
//! evaluation cutoffs are expressed in. [`token_set_ratio`] is the default
//! scorer for entry matching and field scoring; [`partial_ratio`] tolerates
//! one value being embedded in a longer OCR fragment; [`ratio`] is the plain
//! edit-distance score used for mapping-table lookups.

use std::collections::BTreeSet;

/// A similarity scorer: `(a, b) -> score in [0, 100]`.
pub type Scorer = fn(&str, &str) -> f64;

/// Normalized Levenshtein similarity scaled to `[0, 100]`.
///
/// # Examples
///
/// ```
/// use schematism::similarity::ratio;
///
/// assert_eq!(ratio("czermin", "czermin"), 100.0);
/// assert_eq!(ratio("lig", "mur"), 0.0);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best [`ratio`] of the shorter string against every equal-length character
/// window of the longer one.
///
/// Scores 100 when one string appears verbatim inside the other, which makes
/// it tolerant of OCR fragments that glue neighboring tokens onto a value.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_chars: Vec<char> = short.chars().collect();
    let long_chars: Vec<char> = long.chars().collect();

    if short_chars.is_empty() {
        return if long_chars.is_empty() { 100.0 } else { 0.0 };
    }
    if short_chars.len() == long_chars.len() {
        return ratio(short, long);
    }

    let mut best = 0.0_f64;
    for window in long_chars.windows(short_chars.len()) {
        let candidate: String = window.iter().collect();
        let score = ratio(short, &candidate);
        if score > best {
            best = score;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Token-set similarity: compares the sorted intersection and differences of
/// the two word sets, so word order and repeated words do not matter.
///
/// This is the default scorer for parish matching, where OCR output often
/// transposes or duplicates tokens.
///
/// # Examples
///
/// ```
/// use schematism::similarity::token_set_ratio;
///
/// assert_eq!(token_set_ratio("nowa wies", "wies nowa"), 100.0);
/// assert!(token_set_ratio("czermin", "czermia") > 80.0);
/// assert_eq!(token_set_ratio("", "czermin"), 0.0);
/// ```
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return if tokens_a.is_empty() && tokens_b.is_empty() {
            100.0
        } else {
            0.0
        };
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let base = intersection.join(" ");
    let combined_a = join_sorted(&base, &only_a.join(" "));
    let combined_b = join_sorted(&base, &only_b.join(" "));

    [
        ratio(&base, &combined_a),
        ratio(&base, &combined_b),
        ratio(&combined_a, &combined_b),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

fn join_sorted(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => rest.to_string(),
        (false, false) => format!("{base} {rest}"),
    }
}

/// Find the best-scoring choice for `query`, subject to a score cutoff.
///
/// Returns the index into `choices` and the score, or `None` when no choice
/// reaches the cutoff. Ties are broken deterministically: the highest score
/// wins, and among equal scores the earliest index is kept.
#[must_use]
pub fn extract_one(
    query: &str,
    choices: &[&str],
    scorer: Scorer,
    cutoff: f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, choice) in choices.iter().enumerate() {
        let score = scorer(query, choice);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((index, score));
        }
    }
    best.filter(|&(_, score)| score >= cutoff)
}
