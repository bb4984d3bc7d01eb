//! Platform and audience vocabulary shared across the optimization pipeline.

use serde::Deserialize;

/// Target social network. Unrecognized platform strings map to [`Platform::Other`];
/// rule-set lookups (prompts, fallback pools, global peak times) then fall back
/// to Instagram's entries, while the regional time table treats `Other` as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Linkedin,
    Twitter,
    Tiktok,
    Other,
}

impl Platform {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "instagram" => Platform::Instagram,
            "linkedin" => Platform::Linkedin,
            "twitter" => Platform::Twitter,
            "tiktok" => Platform::Tiktok,
            _ => Platform::Other,
        }
    }
}

/// Target audience for posting-time advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Local,
    Us,
    Europe,
    Asia,
    #[default]
    Global,
    #[serde(other)]
    Other,
}

impl Audience {
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Local => "local",
            Audience::Us => "us",
            Audience::Europe => "europe",
            Audience::Asia => "asia",
            Audience::Global => "global",
            Audience::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse_is_case_insensitive() {
        assert_eq!(Platform::parse("Instagram"), Platform::Instagram);
        assert_eq!(Platform::parse("TIKTOK"), Platform::Tiktok);
    }

    #[test]
    fn test_unknown_platform_parses_to_other() {
        assert_eq!(Platform::parse("myspace"), Platform::Other);
        assert_eq!(Platform::parse(""), Platform::Other);
    }

    #[test]
    fn test_audience_deserializes_lowercase() {
        let audience: Audience = serde_json::from_str(r#""europe""#).unwrap();
        assert_eq!(audience, Audience::Europe);
    }

    #[test]
    fn test_unknown_audience_deserializes_to_other() {
        let audience: Audience = serde_json::from_str(r#""antarctica""#).unwrap();
        assert_eq!(audience, Audience::Other);
    }

    #[test]
    fn test_audience_default_is_global() {
        assert_eq!(Audience::default(), Audience::Global);
    }
}
