//! Content optimization — orchestrates the three generation pipelines.
//!
//! Flow: caption and hashtag pipelines run first; the score pipeline
//! consumes both of their outputs, so it runs last. Each pipeline is
//! prompt → invoke → parse, with its own heuristic fallback: an invocation
//! failure, a decode failure, or a parser rejection degrades that field
//! only, never the whole request.

use tracing::{debug, warn};

use crate::inference::InferenceClient;
use crate::optimize::fallback;
use crate::optimize::models::{OptimizationRequest, OptimizationResult, ScoreAdvice};
use crate::optimize::parser;
use crate::optimize::platform::Platform;
use crate::optimize::prompts;
use crate::optimize::timing;

const CAPTION_MAX_TOKENS: u32 = 100;
const HASHTAG_MAX_TOKENS: u32 = 50;
const SCORE_MAX_TOKENS: u32 = 30;
const TEMPERATURE: f32 = 0.3;

/// Runs the full optimization pipeline for one request.
///
/// Infallible by construction: every model-dependent field has a
/// deterministic fallback, and the posting-time advisor never errors.
pub async fn optimize_content(
    inference: &dyn InferenceClient,
    request: &OptimizationRequest,
) -> OptimizationResult {
    let platform = Platform::parse(&request.platform);
    debug!(platform = %request.platform, "running optimization pipelines");

    let optimized_caption = generate_caption(inference, &request.caption, platform).await;
    let hashtags = generate_hashtags(inference, &request.caption, &request.platform, platform).await;
    let engagement_score = predict_engagement(
        inference,
        &optimized_caption,
        &hashtags,
        &request.platform,
        platform,
    )
    .await;
    let best_time = timing::advise(platform, request.timezone.as_deref(), request.target_audience);

    OptimizationResult {
        original_caption: request.caption.clone(),
        optimized_caption,
        hashtags,
        best_time,
        engagement_score,
        platform: request.platform.clone(),
    }
}

async fn generate_caption(
    inference: &dyn InferenceClient,
    caption: &str,
    platform: Platform,
) -> String {
    let prompt = prompts::caption_prompt(caption, platform);

    match inference.invoke(&prompt, CAPTION_MAX_TOKENS, TEMPERATURE).await {
        Ok(envelope) => match envelope.text() {
            Some(text) => parser::parse_caption(text),
            None => {
                warn!("caption response missing expected shape; using fallback");
                fallback::caption_fallback(&mut rand::thread_rng(), caption, platform)
            }
        },
        Err(e) => {
            warn!("caption inference failed: {e}; using fallback");
            fallback::caption_fallback(&mut rand::thread_rng(), caption, platform)
        }
    }
}

async fn generate_hashtags(
    inference: &dyn InferenceClient,
    caption: &str,
    platform_label: &str,
    platform: Platform,
) -> Vec<String> {
    let prompt = prompts::hashtag_prompt(caption, platform_label);

    match inference.invoke(&prompt, HASHTAG_MAX_TOKENS, TEMPERATURE).await {
        Ok(envelope) => match envelope.text() {
            Some(text) => parser::parse_hashtags(text).unwrap_or_else(|| {
                warn!("hashtag parse rejected model output; using fallback");
                fallback::hashtag_fallback(caption, platform)
            }),
            None => {
                warn!("hashtag response missing expected shape; using fallback");
                fallback::hashtag_fallback(caption, platform)
            }
        },
        Err(e) => {
            warn!("hashtag inference failed: {e}; using fallback");
            fallback::hashtag_fallback(caption, platform)
        }
    }
}

/// Scores the optimized caption plus final hashtags. Runs after the caption
/// and hashtag pipelines because the prompt embeds both.
async fn predict_engagement(
    inference: &dyn InferenceClient,
    optimized_caption: &str,
    hashtags: &[String],
    platform_label: &str,
    platform: Platform,
) -> ScoreAdvice {
    let prompt = prompts::score_prompt(optimized_caption, hashtags, platform_label);

    match inference.invoke(&prompt, SCORE_MAX_TOKENS, TEMPERATURE).await {
        Ok(envelope) => match envelope.text() {
            Some(text) => parser::parse_score(text),
            None => {
                warn!("score response missing expected shape; using fallback");
                fallback::score_fallback(optimized_caption, platform)
            }
        },
        Err(e) => {
            warn!("score inference failed: {e}; using fallback");
            fallback::score_fallback(optimized_caption, platform)
        }
    }
}
