//! Prompt constants and builders for the three generation pipelines.
//!
//! Every prompt pins the output format explicitly; the parsers in
//! `optimize::parser` still treat the model output as untrusted.

use crate::optimize::platform::Platform;

const INSTAGRAM_CAPTION_PROMPT: &str = "Transform this text into an Instagram caption: '{caption}'. \
    Rules: Use casual tone, add 2-3 emojis, keep it engaging. \
    Output format: Just the caption text, no explanations, no quotes, no additional text.";

const LINKEDIN_CAPTION_PROMPT: &str = "Transform this text into a LinkedIn post: '{caption}'. \
    Rules: Professional tone, business-focused, no emojis. \
    Output format: Just the post text, no explanations, no quotes, no additional text.";

const TWITTER_CAPTION_PROMPT: &str = "Transform this text into a Twitter post: '{caption}'. \
    Rules: Under 280 characters, punchy, engaging. \
    Output format: Just the tweet text, no explanations, no quotes, no additional text.";

const TIKTOK_CAPTION_PROMPT: &str = "Transform this text into a TikTok caption: '{caption}'. \
    Rules: Trendy language, fun tone, include call-to-action. \
    Output format: Just the caption text, no explanations, no quotes, no additional text.";

/// Caption rewrite prompt for the given platform. Unknown platforms get
/// Instagram's style rules.
pub fn caption_prompt(caption: &str, platform: Platform) -> String {
    let template = match platform {
        Platform::Linkedin => LINKEDIN_CAPTION_PROMPT,
        Platform::Twitter => TWITTER_CAPTION_PROMPT,
        Platform::Tiktok => TIKTOK_CAPTION_PROMPT,
        Platform::Instagram | Platform::Other => INSTAGRAM_CAPTION_PROMPT,
    };
    template.replace("{caption}", caption)
}

/// Hashtag generation prompt. Uses the raw platform label so the model sees
/// whatever the caller asked for.
pub fn hashtag_prompt(caption: &str, platform_label: &str) -> String {
    format!(
        "Create 5 hashtags for {platform_label}. Content: '{caption}'. \
        Rules: Start each with #, relevant to content and platform, popular tags. \
        Output format: #tag1 #tag2 #tag3 #tag4 #tag5 (no other text)"
    )
}

/// Engagement scoring prompt. Consumes the optimized caption and the final
/// hashtag list, so it must run after both pipelines complete.
pub fn score_prompt(caption: &str, hashtags: &[String], platform_label: &str) -> String {
    format!(
        "Rate this {platform_label} post engagement (1-10). Caption: '{caption}'. \
        Hashtags: {}. \
        Output format: [number] [brief reason] (example: 8 Good use of trending hashtags)",
        hashtags.join(" ")
    )
}
