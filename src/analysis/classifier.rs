//! Turns raw historical records into annotated, display-ready ones.

use crate::analysis::{ClassifiedRecord, Confidence, HistoricalRecord, parse_hhmm};
use time::Date;
use time::macros::format_description;

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Day-of-week display labels, Sunday first. The first and last positions are
/// the weekend.
const WEEKDAY_LABELS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// Wait in minutes between the planned visit and the ticket draw.
///
/// A draw after the planned time counts as "no wait" rather than invalid
/// data, so the result clamps to zero. Malformed times also degrade to zero.
pub fn wait_minutes(planned_time: &str, drawn_time: &str) -> u32 {
    match (parse_hhmm(planned_time), parse_hhmm(drawn_time)) {
        (Some(planned), Some(drawn)) => (i32::from(planned) - i32::from(drawn)).max(0) as u32,
        _ => 0,
    }
}

/// Weekday label and weekend flag for a `YYYY-MM-DD` date string.
///
/// Malformed dates degrade to an empty label, not an error. The records are
/// for display; a bad date should not sink the whole query.
pub fn weekday_info(date: &str) -> (String, bool) {
    match Date::parse(date, DATE_FORMAT) {
        Ok(parsed) => {
            let index = parsed.weekday().number_days_from_sunday() as usize;
            (WEEKDAY_LABELS[index].to_string(), index == 0 || index == 6)
        }
        Err(_) => (String::new(), false),
    }
}

pub fn classify(record: &HistoricalRecord) -> ClassifiedRecord {
    let wait = wait_minutes(&record.planned_time, &record.drawn_time);
    let (weekday_label, is_weekend) = weekday_info(&record.date);
    ClassifiedRecord {
        record: record.clone(),
        wait_minutes: wait,
        weekday_label,
        is_weekend,
    }
}

/// Records with `high` confidence only. This subset feeds the point-estimate
/// aggregation; the weekday/weekend breakdown stays unfiltered.
pub fn filter_high_confidence(records: &[HistoricalRecord]) -> Vec<HistoricalRecord> {
    records
        .iter()
        .filter(|r| r.confidence == Confidence::High)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, planned: &str, drawn: &str, confidence: Confidence) -> HistoricalRecord {
        HistoricalRecord {
            date: date.to_string(),
            planned_time: planned.to_string(),
            drawn_time: drawn.to_string(),
            confidence,
        }
    }

    #[test]
    fn wait_is_planned_minus_drawn() {
        assert_eq!(wait_minutes("18:30", "17:40"), 50);
        assert_eq!(wait_minutes("18:30", "18:30"), 0);
    }

    #[test]
    fn drawn_after_planned_clamps_to_zero() {
        assert_eq!(wait_minutes("18:00", "18:45"), 0);
    }

    #[test]
    fn malformed_times_degrade_to_zero() {
        assert_eq!(wait_minutes("", "17:40"), 0);
        assert_eq!(wait_minutes("18:30", "later"), 0);
    }

    #[test]
    fn weekday_labels_and_weekend_flags() {
        // 2026-08-22 is a Saturday, 2026-08-23 a Sunday, 2026-08-24 a Monday.
        assert_eq!(weekday_info("2026-08-22"), ("周六".to_string(), true));
        assert_eq!(weekday_info("2026-08-23"), ("周日".to_string(), true));
        assert_eq!(weekday_info("2026-08-24"), ("周一".to_string(), false));
    }

    #[test]
    fn malformed_date_degrades_to_empty_label() {
        assert_eq!(weekday_info("not-a-date"), (String::new(), false));
        assert_eq!(weekday_info(""), (String::new(), false));
    }

    #[test]
    fn classify_annotates_record() {
        let classified = classify(&record("2026-08-23", "18:30", "17:40", Confidence::High));
        assert_eq!(classified.wait_minutes, 50);
        assert_eq!(classified.weekday_label, "周日");
        assert!(classified.is_weekend);
    }

    #[test]
    fn high_confidence_filter_drops_medium_and_low() {
        let records = vec![
            record("2026-08-20", "18:00", "17:30", Confidence::High),
            record("2026-08-21", "18:00", "17:45", Confidence::Medium),
            record("2026-08-22", "18:00", "17:50", Confidence::Low),
            record("2026-08-23", "18:00", "17:20", Confidence::High),
        ];
        let high = filter_high_confidence(&records);
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|r| r.confidence == Confidence::High));
    }
}
