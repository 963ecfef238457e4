//! Jaro / Jaro–Winkler similarity for "did you mean" suggestions.
//!
//! Strings are compared codepoint by codepoint. Scores are in `[0, 1]`,
//! `1.0` meaning identical.

use crate::config::{PREFIX_WEIGHT, SUGGESTION_THRESHOLD};

/// Jaro similarity of `a` and `b`.
///
/// Characters of `a` are matched left to right against the first unused equal
/// character of `b` within the match window. A transposition is counted each
/// time a match lands before the previous match in `b`.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut used = vec![false; b.len()];
    let mut matches = 0usize;
    let mut transpositions = 0usize;
    let mut last: Option<usize> = None;

    for (i, ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if used[j] || b[j] != *ca {
                continue;
            }
            used[j] = true;
            matches += 1;
            if last.is_some_and(|prev| j < prev) {
                transpositions += 1;
            }
            last = Some(j);
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }
    let m = matches as f64;
    let t = transpositions as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro similarity boosted by the length of the common prefix.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let j = jaro(a, b);
    let prefix = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();
    let boost = (prefix as f64 * PREFIX_WEIGHT).min(1.0);
    j + boost * (1.0 - j)
}

/// The candidate most similar to `input`, if any scores at least
/// [`SUGGESTION_THRESHOLD`]. Ties keep the earliest candidate.
pub fn best_match<'n, I>(input: &str, candidates: I) -> Option<&'n str>
where
    I: IntoIterator<Item = &'n str>,
{
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = jaro_winkler(input, candidate);
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(name, _)| name)
}
