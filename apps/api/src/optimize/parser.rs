//! Parsers for free-form model output.
//!
//! Rejection policy: caption parsing never rejects (always returns text),
//! hashtag parsing rejects when fewer than 3 valid tags are found (caller
//! must use the heuristic fallback), score parsing never rejects (missing
//! digits default to 7).

use std::sync::LazyLock;

use regex::Regex;

use crate::optimize::models::ScoreAdvice;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

static LEADING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*").expect("leading digits pattern is valid"));

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

/// Meta-commentary prefixes models emit despite being told not to.
const META_PREFIXES: &[&str] = &["here", "caption:", "rewritten"];

const MAX_HASHTAGS: usize = 5;
const MIN_HASHTAGS: usize = 3;
const MAX_EXPLANATION_CHARS: usize = 80;
const DEFAULT_SCORE: u32 = 7;

fn starts_with_meta(line: &str) -> bool {
    let lower = line.to_lowercase();
    META_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
}

/// Cleans a model-generated caption: strips surrounding quotes, and when the
/// text opens with meta-commentary ("Here is...", "Caption: ...") returns the
/// first subsequent line that is not itself commentary. Falls through to the
/// cleaned text when no such line exists, so the result is only empty if the
/// input was.
pub fn parse_caption(raw: &str) -> String {
    let cleaned = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();

    if starts_with_meta(cleaned) {
        for line in cleaned.lines() {
            let line = line.trim();
            if !line.is_empty() && !starts_with_meta(line) {
                return line.to_string();
            }
        }
    }

    cleaned.to_string()
}

/// Extracts hash-prefixed tags from model output, in order of appearance.
///
/// Tokens of length <= 1 (a bare `#`) are discarded and at most the first
/// 5 matches are kept. Returns `None` when fewer than 3 valid tags were
/// found — partial results are never returned.
pub fn parse_hashtags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = HASHTAG_RE
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .filter(|tag| tag.len() > 1)
        .take(MAX_HASHTAGS)
        .collect();

    if tags.len() >= MIN_HASHTAGS {
        Some(tags)
    } else {
        None
    }
}

/// Parses an engagement verdict of the form `[number] [brief reason]`.
///
/// The first run of digits anywhere in the text is the score (default 7 when
/// absent), clamped into 1..=10. The explanation is the text with a leading
/// digit run and following whitespace removed, truncated to 80 characters;
/// when that leaves nothing, a `Score N/10` line is synthesized.
pub fn parse_score(raw: &str) -> ScoreAdvice {
    let text = raw.trim();

    let score = match DIGIT_RUN_RE.find(text) {
        // A digit run too long for u32 can only mean a huge number; clamp handles it.
        Some(m) => m.as_str().parse::<u32>().unwrap_or(u32::MAX),
        None => DEFAULT_SCORE,
    };
    let score = score.clamp(1, 10) as u8;

    let explanation: String = LEADING_DIGITS_RE
        .replace(text, "")
        .trim()
        .chars()
        .take(MAX_EXPLANATION_CHARS)
        .collect();

    let explanation = if explanation.is_empty() {
        format!("Score {score}/10 - Good potential")
    } else {
        explanation
    };

    ScoreAdvice { score, explanation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_caption_strips_surrounding_quotes() {
        assert_eq!(parse_caption("\"Morning vibes ☀️\""), "Morning vibes ☀️");
        assert_eq!(parse_caption("'single quoted'"), "single quoted");
    }

    #[test]
    fn test_parse_caption_skips_meta_commentary() {
        let raw = "Here is your optimized caption:\n\nCrushing it at the gym 💪";
        assert_eq!(parse_caption(raw), "Crushing it at the gym 💪");
    }

    #[test]
    fn test_parse_caption_skips_multiple_meta_lines() {
        let raw = "Here you go!\nRewritten for Instagram:\nSunset state of mind 🌅";
        assert_eq!(parse_caption(raw), "Sunset state of mind 🌅");
    }

    #[test]
    fn test_parse_caption_falls_through_when_all_lines_meta() {
        let raw = "Here is the caption\nrewritten as requested";
        assert_eq!(parse_caption(raw), raw);
    }

    #[test]
    fn test_parse_caption_plain_text_unchanged() {
        assert_eq!(parse_caption("Just a normal caption"), "Just a normal caption");
    }

    #[test]
    fn test_parse_caption_empty_input_stays_empty() {
        assert_eq!(parse_caption(""), "");
    }

    #[test]
    fn test_parse_hashtags_takes_first_five_in_order() {
        let result = parse_hashtags("Great! #sun #fun #run #done #one extra").unwrap();
        assert_eq!(result, vec!["#sun", "#fun", "#run", "#done", "#one"]);
    }

    #[test]
    fn test_parse_hashtags_rejects_below_three() {
        assert!(parse_hashtags("only #a #b").is_none());
        assert!(parse_hashtags("no tags at all").is_none());
    }

    #[test]
    fn test_parse_hashtags_ignores_surrounding_prose() {
        let result =
            parse_hashtags("Sure, here are your tags: #coffee #morning #café then some prose")
                .unwrap();
        assert_eq!(result, vec!["#coffee", "#morning", "#café"]);
    }

    #[test]
    fn test_parse_hashtags_bare_hash_never_matches() {
        // `#` alone does not match the token pattern, so it cannot pad the count
        assert!(parse_hashtags("# # # #solo #duo").is_none());
    }

    #[test]
    fn test_parse_score_extracts_number_and_reason() {
        let result = parse_score("8 Great use of trending hashtags");
        assert_eq!(result.score, 8);
        assert_eq!(result.explanation, "Great use of trending hashtags");
    }

    #[test]
    fn test_parse_score_defaults_to_seven_without_digits() {
        let result = parse_score("no digits here");
        assert_eq!(result.score, 7);
        assert_eq!(result.explanation, "no digits here");
    }

    #[test]
    fn test_parse_score_synthesizes_explanation_when_empty() {
        let result = parse_score("9");
        assert_eq!(result.score, 9);
        assert_eq!(result.explanation, "Score 9/10 - Good potential");
    }

    #[test]
    fn test_parse_score_empty_input_defaults() {
        let result = parse_score("");
        assert_eq!(result.score, 7);
        assert_eq!(result.explanation, "Score 7/10 - Good potential");
    }

    #[test]
    fn test_parse_score_clamps_out_of_range() {
        assert_eq!(parse_score("15 way too enthusiastic").score, 10);
        assert_eq!(parse_score("0 harsh").score, 1);
    }

    #[test]
    fn test_parse_score_keeps_explanation_when_digits_not_leading() {
        // Digits mid-text still set the score, but only a leading run is stripped
        let result = parse_score("Solid 6 with room to grow");
        assert_eq!(result.score, 6);
        assert_eq!(result.explanation, "Solid 6 with room to grow");
    }

    #[test]
    fn test_parse_score_truncates_long_explanation() {
        let long_reason = "x".repeat(200);
        let result = parse_score(&format!("5 {long_reason}"));
        assert_eq!(result.explanation.chars().count(), 80);
    }
}
