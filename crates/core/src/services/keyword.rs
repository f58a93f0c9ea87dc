//! Keyword extraction for post text.
//!
//! Text is split into runs of Han characters and runs of other word
//! characters. Han runs have no word boundaries, so they are indexed as
//! overlapping bigrams; everything else is indexed as lowercased words.

use std::collections::HashSet;
use std::sync::LazyLock;

use pkucat_db::entities::text_key::KEY_MAX_LEN;
use regex::Regex;

// Each match is either entirely Han or contains no Han at all.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}+|[\p{L}\p{M}\p{N}_&&[^\p{Han}]]+").unwrap());

static HAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Han}").unwrap());

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "in",
    "is", "it", "its", "of", "on", "or", "so", "that", "the", "this", "to", "was", "were", "will",
    "with",
];

/// Extract at most `limit` distinct keywords from `text`, in order of first
/// appearance.
#[must_use]
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for token in TOKEN_RE.find_iter(text).map(|m| m.as_str()) {
        for candidate in candidates(token) {
            if keywords.len() >= limit {
                return keywords;
            }
            if seen.insert(candidate.clone()) {
                keywords.push(candidate);
            }
        }
    }

    keywords
}

fn candidates(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();

    if HAN_RE.is_match(token) {
        return match chars.len() {
            0 | 1 => vec![],
            2 => vec![token.to_string()],
            _ => chars.windows(2).map(|pair| pair.iter().collect()).collect(),
        };
    }

    let word = token.to_lowercase();
    if chars.len() < 2
        || word.chars().all(|c| c.is_numeric())
        || STOP_WORDS.contains(&word.as_str())
    {
        return vec![];
    }

    vec![word.chars().take(KEY_MAX_LEN).collect()]
}
