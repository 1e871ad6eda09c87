//! Historical-record analysis: classification, aggregation and suggestions.

use serde::Deserialize;

pub mod classifier;
pub mod stats;
pub mod suggestion;

/// Placeholder shown when a time estimate cannot be computed.
pub const SENTINEL_TIME: &str = "-";

/// Business hours window, inclusive on both ends, in minutes since midnight.
pub const OPENING_MINUTE: u16 = 10 * 60 + 30;
pub const CLOSING_MINUTE: u16 = 22 * 60;

/// Backend-assigned reliability tier on a historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One historical observation: a ticket drawn at `drawn_time` for a visit
/// planned at `planned_time`. Owned by the caller; the analysis only reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalRecord {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "dining_time", default)]
    pub planned_time: String,
    #[serde(rename = "estimated_issue_time", default)]
    pub drawn_time: String,
    pub confidence: Confidence,
}

/// A record annotated with per-query derived fields. Discarded after use.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: HistoricalRecord,
    pub wait_minutes: u32,
    pub weekday_label: String,
    pub is_weekend: bool,
}

/// Parse a zero-padded `HH:MM` string into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Option<u16> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Whether a planned time falls inside business hours. Checked before any
/// network interaction.
pub fn within_business_hours(time: &str) -> bool {
    parse_hhmm(time).is_some_and(|m| (OPENING_MINUTE..=CLOSING_MINUTE).contains(&m))
}
