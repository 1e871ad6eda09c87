//! Qualitative recommendation derived from the aggregate wait time.

use crate::analysis::{ClassifiedRecord, parse_hhmm};

/// One queue position clears roughly every this many minutes.
pub const QUEUE_CLEAR_MINUTES: u32 = 3;

const FAVORABLE_TEXT: &str = "Short waits around this time. A good slot for a visit.";
const MODERATE_TEXT: &str =
    "Expect some waiting around this time. Draw a ticket early or consider another slot.";
const UNFAVORABLE_TEXT: &str =
    "Long waits around this time. Picking a different time is recommended.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionTier {
    Favorable,
    Moderate,
    Unfavorable,
}

impl SuggestionTier {
    pub fn for_wait(avg_wait_minutes: u32) -> Self {
        match avg_wait_minutes {
            0..=30 => Self::Favorable,
            31..=90 => Self::Moderate,
            _ => Self::Unfavorable,
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Self::Favorable => FAVORABLE_TEXT,
            Self::Moderate => MODERATE_TEXT,
            Self::Unfavorable => UNFAVORABLE_TEXT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub avg_wait_minutes: u32,
    pub estimated_queue_count: u32,
    pub tier: SuggestionTier,
    pub advice: String,
}

/// Derive a recommendation from the unfiltered record set.
///
/// Confidence is not considered here; a record counts as long as both its
/// planned and drawn time parse. `historical_avg` is the backend's own
/// average draw time and is appended as a supplementary note when present.
pub fn suggest(records: &[ClassifiedRecord], historical_avg: Option<&str>) -> Suggestion {
    let waits: Vec<u32> = records
        .iter()
        .filter(|c| {
            parse_hhmm(&c.record.planned_time).is_some() && parse_hhmm(&c.record.drawn_time).is_some()
        })
        .map(|c| c.wait_minutes)
        .collect();

    let avg_wait_minutes = if waits.is_empty() {
        0
    } else {
        let total: u32 = waits.iter().sum();
        (f64::from(total) / waits.len() as f64).round() as u32
    };

    let estimated_queue_count =
        (f64::from(avg_wait_minutes) / f64::from(QUEUE_CLEAR_MINUTES)).round() as u32;

    let tier = SuggestionTier::for_wait(avg_wait_minutes);
    let mut advice = tier.advice().to_string();
    if let Some(avg) = historical_avg
        && !avg.is_empty()
        && avg != "-"
    {
        advice.push_str(&format!("\nHistorical average draw time: {avg}"));
    }

    Suggestion {
        avg_wait_minutes,
        estimated_queue_count,
        tier,
        advice,
    }
}
