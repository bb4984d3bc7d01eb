//! Posting-time advice from static peak-window tables.
//!
//! This module never fails: unknown platforms borrow Instagram's global
//! entry, unknown timezones silently drop the localized figures, and
//! audiences without a dedicated strategy get the primary peak only.

use chrono::{Timelike, Utc};
use chrono_tz::Tz;

use crate::optimize::models::TimeAdvice;
use crate::optimize::platform::{Audience, Platform};

/// Global peak windows in UTC, chosen for overlapping regional activity.
struct GlobalPeak {
    utc_hour: u32,
    primary_range: &'static str,
    secondary_range: &'static str,
    reason: &'static str,
}

const INSTAGRAM_PEAK: GlobalPeak = GlobalPeak {
    utc_hour: 13,
    primary_range: "1:00-3:00 PM UTC",
    secondary_range: "8:00-10:00 PM UTC",
    reason: "Captures US lunch break and European evening engagement",
};

const LINKEDIN_PEAK: GlobalPeak = GlobalPeak {
    utc_hour: 14,
    primary_range: "2:00-4:00 PM UTC",
    secondary_range: "8:00-10:00 AM UTC",
    reason: "Professional users active during business hours across timezones",
};

const TWITTER_PEAK: GlobalPeak = GlobalPeak {
    utc_hour: 16,
    primary_range: "4:00-6:00 PM UTC",
    secondary_range: "12:00-2:00 PM UTC",
    reason: "News and discussion peak during overlapping active hours",
};

const TIKTOK_PEAK: GlobalPeak = GlobalPeak {
    utc_hour: 19,
    primary_range: "7:00-9:00 PM UTC",
    secondary_range: "2:00-4:00 AM UTC",
    reason: "Entertainment content peaks when multiple regions are active",
};

fn global_peak(platform: Platform) -> &'static GlobalPeak {
    match platform {
        Platform::Linkedin => &LINKEDIN_PEAK,
        Platform::Twitter => &TWITTER_PEAK,
        Platform::Tiktok => &TIKTOK_PEAK,
        Platform::Instagram | Platform::Other => &INSTAGRAM_PEAK,
    }
}

/// Fixed regional windows in reference timezones. Hand-curated configuration;
/// platforms outside the table (i.e. unrecognized ones) have no entry.
fn regional_window(audience: Audience, platform: Platform) -> Option<&'static str> {
    use Audience::{Asia, Europe, Us};
    use Platform::{Instagram, Linkedin, Tiktok, Twitter};

    match (audience, platform) {
        (Us, Instagram) => Some("6:00-9:00 PM EST"),
        (Us, Linkedin) => Some("8:00-10:00 AM EST"),
        (Us, Twitter) => Some("12:00-3:00 PM EST"),
        (Us, Tiktok) => Some("6:00-10:00 PM EST"),
        (Europe, Instagram) => Some("7:00-9:00 PM CET"),
        (Europe, Linkedin) => Some("9:00-11:00 AM CET"),
        (Europe, Twitter) => Some("1:00-3:00 PM CET"),
        (Europe, Tiktok) => Some("7:00-10:00 PM CET"),
        (Asia, Instagram) => Some("8:00-10:00 PM JST"),
        (Asia, Linkedin) => Some("9:00-11:00 AM JST"),
        (Asia, Twitter) => Some("12:00-2:00 PM JST"),
        (Asia, Tiktok) => Some("8:00-11:00 PM JST"),
        _ => None,
    }
}

/// Converts today's peak UTC hour into the caller's timezone.
///
/// Degrades to `None` on an unrecognized identifier or an out-of-range hour
/// construction; no other failure modes exist here.
fn local_peak_time(utc_hour: u32, identifier: &str) -> Option<chrono::DateTime<Tz>> {
    let tz: Tz = identifier.parse().ok()?;
    let peak_utc = Utc::now().with_hour(utc_hour)?.with_minute(0)?;
    Some(peak_utc.with_timezone(&tz))
}

/// Recommends posting windows for a platform, audience, and optional caller
/// timezone. Always returns advice; nothing in this path is surfaced as an
/// error.
pub fn advise(platform: Platform, timezone: Option<&str>, audience: Audience) -> TimeAdvice {
    let peak = global_peak(platform);

    match audience {
        Audience::Global => {
            let localized = timezone.and_then(|tz| local_peak_time(peak.utc_hour, tz));
            match localized {
                Some(local) => TimeAdvice::GlobalReach {
                    global_optimal: peak.primary_range,
                    your_timezone: Some(local.format("%I:%M %p %Z").to_string()),
                    secondary_peak: peak.secondary_range,
                    strategy: "global_reach",
                    reason: peak.reason,
                    tip: format!(
                        "Post at {} your time for maximum global engagement",
                        local.format("%I:%M %p")
                    ),
                },
                None => TimeAdvice::GlobalReach {
                    global_optimal: peak.primary_range,
                    your_timezone: None,
                    secondary_peak: peak.secondary_range,
                    strategy: "global_reach",
                    reason: peak.reason,
                    tip: "Use global UTC times for maximum international reach".to_string(),
                },
            }
        }
        Audience::Us | Audience::Europe | Audience::Asia => TimeAdvice::RegionalFocus {
            regional_optimal: regional_window(audience, platform),
            strategy: format!("{}_focused", audience.as_str()),
            reason: format!(
                "Optimized for {} audience engagement patterns",
                audience.as_str().to_uppercase()
            ),
        },
        Audience::Local | Audience::Other => TimeAdvice::PrimaryOnly {
            time: peak.primary_range,
            reason: peak.reason,
        },
    }
}
