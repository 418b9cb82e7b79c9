//! Post formatting — turns raw completion text into a [`GeneratedPost`].
//!
//! Hashtag discovery order: tags already embedded in the text, then the
//! caller's keywords, then the fixed heuristic table. At most
//! [`MAX_HASHTAGS`] survive. Hashtags are derived from the untruncated text.

use std::sync::LazyLock;

use regex::Regex;

use crate::generation::generator::GeneratedPost;
use crate::generation::tone::Tone;

pub const MAX_HASHTAGS: usize = 3;
const MAX_HEURISTIC_HASHTAGS: usize = 2;
const ELLIPSIS: &str = "...";

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\s]+").expect("Invalid hashtag regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Fixed substring rules: any trigger present in the text yields the tag.
const HEURISTIC_RULES: &[(&[&str], &str)] = &[
    (&["AI", "人工知能"], "AI"),
    (&["技術", "プログラミング"], "プログラミング"),
];

/// Builds the final post from raw completion text.
pub fn format_post(
    raw: &str,
    keywords: &[String],
    max_length: usize,
    tone: Tone,
) -> GeneratedPost {
    let content = raw.trim();
    let hashtags = collect_hashtags(content, keywords);
    let content = truncate_content(content, max_length);
    let character_count = content.chars().count();

    GeneratedPost {
        content,
        hashtags,
        character_count,
        tone,
    }
}

/// Collects up to [`MAX_HASHTAGS`] unique hashtags in discovery order.
pub fn collect_hashtags(content: &str, keywords: &[String]) -> Vec<String> {
    let mut hashtags: Vec<String> = Vec::new();

    let embedded = extract_embedded_hashtags(content);
    let from_keywords = keywords.iter().map(|k| normalize_keyword(k));
    let heuristic = heuristic_hashtags(content).into_iter().map(str::to_string);

    for tag in embedded.into_iter().chain(from_keywords).chain(heuristic) {
        if !tag.is_empty() && !hashtags.contains(&tag) {
            hashtags.push(tag);
        }
    }

    hashtags.truncate(MAX_HASHTAGS);
    hashtags
}

/// `#token` occurrences in the text, with exactly one leading `#` stripped.
pub fn extract_embedded_hashtags(content: &str) -> Vec<String> {
    HASHTAG_REGEX
        .find_iter(content)
        .map(|m| {
            let tag = m.as_str();
            tag.strip_prefix('#').unwrap_or(tag).to_string()
        })
        .collect()
}

/// Lower-cased keyword with all whitespace removed.
pub fn normalize_keyword(keyword: &str) -> String {
    WHITESPACE_REGEX.replace_all(keyword, "").to_lowercase()
}

pub fn heuristic_hashtags(content: &str) -> Vec<&'static str> {
    HEURISTIC_RULES
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| content.contains(*t)))
        .map(|(_, tag)| *tag)
        .take(MAX_HEURISTIC_HASHTAGS)
        .collect()
}

/// Cuts content longer than `max_length` characters down to exactly
/// `max_length`, the last three being the ellipsis.
pub fn truncate_content(content: &str, max_length: usize) -> String {
    if content.chars().count() <= max_length {
        return content.to_string();
    }
    // no room for any content; the ellipsis itself gets clipped
    if max_length < ELLIPSIS.len() {
        return ELLIPSIS[..max_length].to_string();
    }

    let keep = max_length - ELLIPSIS.len();
    let mut truncated: String = content.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
