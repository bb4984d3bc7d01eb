//! Heuristic fallback generation.
//!
//! Used when the inference call fails outright or a parser rejects the model
//! output. All three generators are deterministic given a fixed random
//! source and never fail; randomness is injected so tests can seed it.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::optimize::models::ScoreAdvice;
use crate::optimize::platform::Platform;

struct PhrasePools {
    prefixes: &'static [&'static str],
    suffixes: &'static [&'static str],
}

const INSTAGRAM_POOLS: PhrasePools = PhrasePools {
    prefixes: &["✨", "🔥", "💫"],
    suffixes: &["What do you think? 💭", "Drop a comment! 👇"],
};

const LINKEDIN_POOLS: PhrasePools = PhrasePools {
    prefixes: &["Key insight:", "Professional tip:"],
    suffixes: &["What's your experience?", "Share your thoughts."],
};

const TWITTER_POOLS: PhrasePools = PhrasePools {
    prefixes: &["🧵", "💡"],
    suffixes: &["Thoughts? 💭", "RT if you agree 🔄"],
};

const TIKTOK_POOLS: PhrasePools = PhrasePools {
    prefixes: &["🔥", "✨"],
    suffixes: &["Who's with me? 🙋‍♀️", "Try this! 💪"],
};

fn phrase_pools(platform: Platform) -> &'static PhrasePools {
    match platform {
        Platform::Linkedin => &LINKEDIN_POOLS,
        Platform::Twitter => &TWITTER_POOLS,
        Platform::Tiktok => &TIKTOK_POOLS,
        Platform::Instagram | Platform::Other => &INSTAGRAM_POOLS,
    }
}

/// Base hashtag sets, 5 per platform.
const INSTAGRAM_TAGS: &[&str] = &["#instagood", "#photooftheday", "#love", "#beautiful", "#happy"];
const LINKEDIN_TAGS: &[&str] = &["#professional", "#career", "#business", "#networking", "#growth"];
const TWITTER_TAGS: &[&str] = &["#trending", "#viral", "#thoughts", "#discussion", "#news"];
const TIKTOK_TAGS: &[&str] = &["#fyp", "#viral", "#trending", "#foryou", "#tiktok"];

/// Topical keywords and the tag triplet each one contributes, matched against
/// the caption in this order. Hand-curated configuration, not derived.
const KEYWORD_TAGS: &[(&str, [&str; 3])] = &[
    ("workout", ["#fitness", "#gym", "#health"]),
    ("coffee", ["#coffee", "#coding", "#developer"]),
    ("work", ["#productivity", "#hustle", "#grind"]),
];

fn base_tags(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Linkedin => LINKEDIN_TAGS,
        Platform::Twitter => TWITTER_TAGS,
        Platform::Tiktok => TIKTOK_TAGS,
        Platform::Instagram | Platform::Other => INSTAGRAM_TAGS,
    }
}

const EXPRESSIVE_SYMBOLS: &[&str] = &["😊", "🔥", "✨", "💪", "❤️"];

/// Decorates the original caption with platform-flavored phrases.
///
/// LinkedIn gets a multi-line layout (hook line, two enhancement bullets,
/// closing question); everything else is prefix + original + suffix.
pub fn caption_fallback<R: Rng + ?Sized>(rng: &mut R, caption: &str, platform: Platform) -> String {
    let pools = phrase_pools(platform);
    let prefix = pools.prefixes.choose(rng).copied().unwrap_or_default();
    let suffix = pools.suffixes.choose(rng).copied().unwrap_or_default();

    if platform == Platform::Linkedin {
        format!("{caption}\n\n{prefix}\n• Enhanced engagement\n• Better reach\n\n{suffix}")
    } else {
        format!("{prefix} {caption} {suffix}")
    }
}

/// Produces exactly 5 hashtags: keyword-matched triplets (scanned against the
/// lowercased caption) ahead of the platform base set, deduplicated in
/// first-occurrence order, truncated to 5.
pub fn hashtag_fallback(caption: &str, platform: Platform) -> Vec<String> {
    let caption_lower = caption.to_lowercase();

    let mut combined: Vec<&str> = Vec::new();
    for (keyword, tags) in KEYWORD_TAGS {
        if caption_lower.contains(keyword) {
            combined.extend_from_slice(tags);
        }
    }
    combined.extend_from_slice(base_tags(platform));

    let mut seen = HashSet::new();
    combined
        .into_iter()
        .filter(|tag| seen.insert(*tag))
        .take(5)
        .map(str::to_string)
        .collect()
}

/// Rule-based engagement score: starts at 5, rewards questions, expressive
/// symbols, longer captions, and platform-specific keywords. Clamped to 1..=10.
pub fn score_fallback(caption: &str, platform: Platform) -> ScoreAdvice {
    let mut score: i32 = 5;

    if caption.contains('?') {
        score += 1;
    }
    if EXPRESSIVE_SYMBOLS.iter().any(|s| caption.contains(s)) {
        score += 1;
    }
    if caption.split_whitespace().count() > 10 {
        score += 1;
    }

    let caption_lower = caption.to_lowercase();
    match platform {
        Platform::Tiktok => {
            if caption_lower.contains("trend") || caption_lower.contains("viral") {
                score += 2;
            }
        }
        Platform::Linkedin => {
            if caption_lower.contains("professional") || caption_lower.contains("career") {
                score += 1;
            }
        }
        _ => {}
    }

    let score = score.clamp(1, 10) as u8;
    ScoreAdvice {
        score,
        explanation: format!("Score {score}/10 - Good engagement potential"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_caption_fallback_wraps_original() {
        let result = caption_fallback(&mut rng(), "morning run", Platform::Instagram);
        assert!(result.contains("morning run"));
        assert_ne!(result, "morning run");
    }

    #[test]
    fn test_caption_fallback_is_reproducible_with_seed() {
        let a = caption_fallback(&mut rng(), "same seed", Platform::Twitter);
        let b = caption_fallback(&mut rng(), "same seed", Platform::Twitter);
        assert_eq!(a, b);
    }

    #[test]
    fn test_caption_fallback_linkedin_layout() {
        let result = caption_fallback(&mut rng(), "shipped a feature", Platform::Linkedin);
        assert!(result.starts_with("shipped a feature\n\n"));
        assert!(result.contains("• Enhanced engagement"));
        assert!(result.contains("• Better reach"));
        let closing = result.lines().last().unwrap();
        assert!(closing == "What's your experience?" || closing == "Share your thoughts.");
    }

    #[test]
    fn test_caption_fallback_unknown_platform_uses_instagram_pools() {
        let result = caption_fallback(&mut rng(), "hello", Platform::Other);
        assert!(
            INSTAGRAM_POOLS
                .suffixes
                .iter()
                .any(|suffix| result.ends_with(suffix)),
            "unexpected suffix in: {result}"
        );
    }

    #[test]
    fn test_hashtag_fallback_always_five_unique_tags() {
        for platform in [
            Platform::Instagram,
            Platform::Linkedin,
            Platform::Twitter,
            Platform::Tiktok,
            Platform::Other,
        ] {
            let tags = hashtag_fallback("a plain caption", platform);
            assert_eq!(tags.len(), 5, "{platform:?} must yield 5 tags");
            let unique: HashSet<&String> = tags.iter().collect();
            assert_eq!(unique.len(), 5, "{platform:?} tags must be deduplicated");
            assert!(tags.iter().all(|t| t.starts_with('#')));
        }
    }

    #[test]
    fn test_hashtag_fallback_keyword_tags_come_first() {
        let tags = hashtag_fallback("Morning coffee before standup", Platform::Twitter);
        assert_eq!(tags[0], "#coffee");
        assert_eq!(tags[1], "#coding");
        assert_eq!(tags[2], "#developer");
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_hashtag_fallback_workout_also_matches_work() {
        // "workout" contains "work", so both triplets fire, in table order
        let tags = hashtag_fallback("Just finished a workout", Platform::Tiktok);
        assert_eq!(
            tags,
            vec!["#fitness", "#gym", "#health", "#productivity", "#hustle"]
        );
    }

    #[test]
    fn test_hashtag_fallback_keyword_match_is_case_insensitive() {
        let tags = hashtag_fallback("WORKOUT done!", Platform::Instagram);
        assert!(tags.contains(&"#fitness".to_string()));
    }

    #[test]
    fn test_score_fallback_base_is_five() {
        let result = score_fallback("short text", Platform::Instagram);
        assert_eq!(result.score, 5);
        assert_eq!(result.explanation, "Score 5/10 - Good engagement potential");
    }

    #[test]
    fn test_score_fallback_additive_rules() {
        // question + symbol + >10 words
        let caption = "Do you even lift 💪 one two three four five six seven eight?";
        let result = score_fallback(caption, Platform::Instagram);
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_score_fallback_tiktok_trend_bonus() {
        let result = score_fallback("this trend is everywhere", Platform::Tiktok);
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_score_fallback_linkedin_career_bonus() {
        let result = score_fallback("a new career chapter", Platform::Linkedin);
        assert_eq!(result.score, 6);
    }

    #[test]
    fn test_score_fallback_keywords_ignored_on_other_platforms() {
        let result = score_fallback("this trend is everywhere", Platform::Instagram);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_score_fallback_clamped_to_ten() {
        let caption = "viral trend alert 🔥 is this real? one two three four five six seven eight nine?";
        let result = score_fallback(caption, Platform::Tiktok);
        assert!(result.score <= 10);
        assert!(result.score >= 1);
    }
}
