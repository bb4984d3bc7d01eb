//! Request and response types for the optimization API.
//!
//! All of these are request-scoped value objects: built at request start,
//! read-only afterwards, dropped once the response is serialized.

use serde::{Deserialize, Serialize};

use crate::optimize::platform::Audience;

/// Incoming optimization request. Every field is optional on the wire;
/// defaults match the public API contract (empty caption, Instagram rules,
/// global audience).
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizationRequest {
    #[serde(default)]
    pub caption: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Accepted for API compatibility; image-aware optimization is not implemented.
    #[serde(default)]
    #[allow(dead_code)]
    pub image: Option<serde_json::Value>,
    /// IANA identifier, e.g. `America/New_York`.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub target_audience: Audience,
}

fn default_platform() -> String {
    "instagram".to_string()
}

/// Assembled response: optimized caption, hashtags, posting-time advice,
/// and a predicted engagement score.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub original_caption: String,
    pub optimized_caption: String,
    pub hashtags: Vec<String>,
    pub best_time: TimeAdvice,
    pub engagement_score: ScoreAdvice,
    /// Echoes the platform string from the request, recognized or not.
    pub platform: String,
}

/// Posting-time advice, shaped by the requested audience strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimeAdvice {
    /// Global-reach strategy: UTC peak windows, optionally localized to the
    /// caller's timezone when one was supplied and recognized.
    GlobalReach {
        global_optimal: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        your_timezone: Option<String>,
        secondary_peak: &'static str,
        strategy: &'static str,
        reason: &'static str,
        tip: String,
    },
    /// Regional strategy (us/europe/asia): a fixed window in the region's
    /// reference timezone. `regional_optimal` is null when the platform has
    /// no entry in the regional table.
    RegionalFocus {
        regional_optimal: Option<&'static str>,
        strategy: String,
        reason: String,
    },
    /// Minimal advice for audiences with no dedicated strategy: the
    /// platform's primary peak and its rationale.
    PrimaryOnly {
        time: &'static str,
        reason: &'static str,
    },
}

/// Engagement prediction: a 1-10 score with a short explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreAdvice {
    pub score: u8,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_applied() {
        let request: OptimizationRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.caption, "");
        assert_eq!(request.platform, "instagram");
        assert!(request.timezone.is_none());
        assert_eq!(request.target_audience, Audience::Global);
    }

    #[test]
    fn test_request_accepts_unknown_fields() {
        let request: OptimizationRequest = serde_json::from_value(json!({
            "caption": "hello",
            "platform": "tiktok",
            "image": "base64data",
            "extra": true
        }))
        .unwrap();
        assert_eq!(request.platform, "tiktok");
    }

    #[test]
    fn test_global_reach_omits_your_timezone_when_absent() {
        let advice = TimeAdvice::GlobalReach {
            global_optimal: "1:00-3:00 PM UTC",
            your_timezone: None,
            secondary_peak: "8:00-10:00 PM UTC",
            strategy: "global_reach",
            reason: "r",
            tip: "t".to_string(),
        };
        let value = serde_json::to_value(&advice).unwrap();
        assert!(value.get("your_timezone").is_none());
        assert_eq!(value["strategy"], "global_reach");
    }

    #[test]
    fn test_regional_focus_serializes_null_window() {
        let advice = TimeAdvice::RegionalFocus {
            regional_optimal: None,
            strategy: "us_focused".to_string(),
            reason: "r".to_string(),
        };
        let value = serde_json::to_value(&advice).unwrap();
        assert!(value["regional_optimal"].is_null());
    }
}
