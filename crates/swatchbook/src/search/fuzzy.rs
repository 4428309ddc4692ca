//! Fuzzy scoring and match highlighting.
//!
//! Scores live in three disjoint bands so that better kinds of match always
//! rank higher:
//!
//! | match | score |
//! |-------|-------|
//! | exact (case-insensitive) | `1.0` |
//! | substring | `[0.7, 0.99]` |
//! | in-order subsequence | `[0.05, 0.2]` |
//! | none | `0.0` |

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: f64 = 1.0;

const SUBSTRING_BASE: f64 = 0.8;
const SUBSTRING_PREFIX_BONUS: f64 = 0.2;
const SUBSTRING_POSITION_PENALTY: f64 = 0.1;
/// A prefix substring would otherwise tie with an exact match.
const SUBSTRING_MAX: f64 = 0.99;

const SUBSEQUENCE_BASE: f64 = 0.2;
const SUBSEQUENCE_GAP_PENALTY: f64 = 0.08;
const SUBSEQUENCE_MIN: f64 = 0.05;
/// Mean gap above which a subsequence match is too scattered to count.
pub const MAX_MEAN_GAP: f64 = 1.5;

/// Scores how well `query` matches `text`, in `[0.0, 1.0]`.
///
/// Comparison is case-insensitive and works on characters, not bytes. A
/// blank query matches nothing.
///
/// ```rust
/// use swatchbook::search::fuzzy_match;
///
/// assert_eq!(fuzzy_match("blue", "Blue"), 1.0);
/// assert!(fuzzy_match("blue", "base-blue-500") >= 0.7);
/// assert!(fuzzy_match("bl5", "blue-500") < 0.2);
/// assert_eq!(fuzzy_match("xyz", "blue"), 0.0);
/// ```
pub fn fuzzy_match(query: &str, text: &str) -> f64 {
    if query.trim().is_empty() {
        return 0.0;
    }

    let query: Vec<char> = query.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();

    if query == text {
        return EXACT_SCORE;
    }

    if let Some(position) = find_chars(&text, &query) {
        return substring_score(position, text.len());
    }

    subsequence_score(&query, &text)
}

fn substring_score(position: usize, text_len: usize) -> f64 {
    let mut score = SUBSTRING_BASE;
    if position == 0 {
        score += SUBSTRING_PREFIX_BONUS;
    }
    score -= SUBSTRING_POSITION_PENALTY * position as f64 / text_len.max(1) as f64;
    score.min(SUBSTRING_MAX)
}

fn subsequence_score(query: &[char], text: &[char]) -> f64 {
    let mut positions = Vec::with_capacity(query.len());
    let mut from = 0;

    for wanted in query {
        match text[from..].iter().position(|c| c == wanted) {
            Some(offset) => {
                positions.push(from + offset);
                from += offset + 1;
            }
            None => return 0.0,
        }
    }

    let mean_gap = if positions.len() < 2 {
        0.0
    } else {
        let total: usize = positions.windows(2).map(|w| w[1] - w[0] - 1).sum();
        total as f64 / (positions.len() - 1) as f64
    };

    if mean_gap > MAX_MEAN_GAP {
        return 0.0;
    }

    (SUBSEQUENCE_BASE - SUBSEQUENCE_GAP_PENALTY * mean_gap).max(SUBSEQUENCE_MIN)
}

/// Character index of the first occurrence of `needle` in `haystack`.
fn find_chars(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Wraps the first case-insensitive occurrence of `query` in `<mark>` tags.
///
/// Returns `text` unchanged when `query` is blank or does not occur.
///
/// ```rust
/// use swatchbook::search::highlight_match;
///
/// assert_eq!(highlight_match("base-Blue-500", "blue"), "base-<mark>Blue</mark>-500");
/// assert_eq!(highlight_match("base-blue-500", "red"), "base-blue-500");
/// ```
pub fn highlight_match(text: &str, query: &str) -> String {
    highlight_match_with(text, query, "<mark>", "</mark>")
}

/// Like [`highlight_match`], with caller-chosen markers.
///
/// The original casing of `text` is kept inside the markers.
pub fn highlight_match_with(text: &str, query: &str, open: &str, close: &str) -> String {
    match match_range(text, query) {
        Some((start, end)) => format!(
            "{}{}{}{}{}",
            &text[..start],
            open,
            &text[start..end],
            close,
            &text[end..]
        ),
        None => text.to_string(),
    }
}

/// Byte range of the first case-insensitive occurrence of `query` in
/// `text`, compared character by character.
///
/// The range always covers whole characters of `text` and is never empty.
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.trim().is_empty() {
        return None;
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let indices: Vec<(usize, char)> = text.char_indices().collect();

    for start in 0..indices.len() {
        let mut matched = 0;
        let mut cursor = start;
        while matched < needle.len() && cursor < indices.len() {
            // A character whose lowercase form is several characters must
            // match as a whole.
            let folded: Vec<char> = indices[cursor].1.to_lowercase().collect();
            if !needle[matched..].starts_with(&folded) {
                break;
            }
            matched += folded.len();
            cursor += 1;
        }
        if matched == needle.len() {
            let end = indices.get(cursor).map_or(text.len(), |(index, _)| *index);
            return Some((indices[start].0, end));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(fuzzy_match("BLUE", "blue"), 1.0);
    }

    #[test]
    fn test_prefix_substring_stays_below_exact() {
        let score = fuzzy_match("blue", "blue-500");
        assert!(score < EXACT_SCORE);
        assert!(score >= 0.9);
    }

    #[test]
    fn test_substring_position_penalty() {
        let early = fuzzy_match("blue", "a-blue-500");
        let late = fuzzy_match("blue", "a-b-c-d-e-blue");
        assert!(early > late);
        assert!(late >= 0.7);
    }

    #[test]
    fn test_subsequence_scores_below_substring() {
        let sub = fuzzy_match("bl5", "blue-500");
        assert!(sub > 0.0);
        assert!(sub <= 0.2);
    }

    #[test]
    fn test_adjacent_subsequence() {
        // b,l,u adjacent except one gap of one character
        let score = fuzzy_match("blu", "bxlu");
        let expected = 0.2 - 0.08 * 0.5;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_scattered_subsequence_rejected() {
        assert_eq!(fuzzy_match("bl", "b----l"), 0.0);
    }

    #[test]
    fn test_missing_character_rejected() {
        assert_eq!(fuzzy_match("blue", "glue-200"), 0.0);
    }

    #[test]
    fn test_blank_query() {
        assert_eq!(fuzzy_match("", "blue"), 0.0);
        assert_eq!(fuzzy_match("   ", "blue"), 0.0);
    }

    #[test]
    fn test_query_longer_than_text() {
        assert_eq!(fuzzy_match("blue-500-extra", "blue"), 0.0);
    }

    #[test]
    fn test_highlight_keeps_case() {
        assert_eq!(highlight_match("Primary Blue", "blue"), "Primary <mark>Blue</mark>");
    }

    #[test]
    fn test_highlight_first_occurrence_only() {
        assert_eq!(highlight_match("aXa", "a"), "<mark>a</mark>Xa");
    }

    #[test]
    fn test_highlight_noop() {
        assert_eq!(highlight_match("blue", ""), "blue");
        assert_eq!(highlight_match("blue", "red"), "blue");
    }

    #[test]
    fn test_match_range_needs_whole_lowercase_expansion() {
        // 'İ' lowercases to two characters, so "i" covers only part of it.
        assert_eq!(match_range("İx", "i"), None);
        assert_eq!(highlight_match("İx", "i"), "İx");
        assert_eq!(match_range("aİx", "x"), Some((3, 4)));
    }

    #[test]
    fn test_highlight_multibyte() {
        assert_eq!(
            highlight_match_with("Grün-500", "ÜN", "[", "]"),
            "Gr[ün]-500"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_is_in_a_known_band(query in "[a-c]{1,4}", text in "[a-c-]{0,12}") {
            let score = fuzzy_match(&query, &text);
            let in_band = score == 0.0
                || score == EXACT_SCORE
                || (0.7..=SUBSTRING_MAX).contains(&score)
                || (SUBSEQUENCE_MIN..=SUBSEQUENCE_BASE).contains(&score);
            prop_assert!(in_band, "score {} outside every band", score);
        }

        #[test]
        fn substring_outranks_subsequence(prefix in "[xyz]{0,6}", suffix in "[xyz]{0,6}") {
            let containing = format!("{}blue{}", prefix, suffix);
            let scattered = format!("{}b-lue{}", prefix, suffix);
            prop_assert!(fuzzy_match("blue", &containing) > fuzzy_match("blue", &scattered));
        }
    }
}
