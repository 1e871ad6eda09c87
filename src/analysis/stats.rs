//! Point-estimate aggregation over high-confidence draw times.

use crate::analysis::{HistoricalRecord, SENTINEL_TIME, format_hhmm, parse_hhmm};

/// Point estimates over observed ticket-draw times.
///
/// Every time field falls back to the `"-"` sentinel when there is nothing to
/// aggregate, so callers always have something renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTimeStats {
    pub estimated_draw_time: String,
    pub mean_draw_time: String,
    pub earliest_draw_time: String,
    pub latest_draw_time: String,
    pub sample_count: usize,
}

impl IssueTimeStats {
    pub fn empty() -> Self {
        Self {
            estimated_draw_time: SENTINEL_TIME.to_string(),
            mean_draw_time: SENTINEL_TIME.to_string(),
            earliest_draw_time: SENTINEL_TIME.to_string(),
            latest_draw_time: SENTINEL_TIME.to_string(),
            sample_count: 0,
        }
    }

    /// Merge in the weekday/weekend averages supplied by the backend.
    ///
    /// These come from an unfiltered external aggregate and are deliberately
    /// not recomputed from the high-confidence subset.
    pub fn into_report(
        self,
        weekday_mean: Option<&str>,
        weekend_mean: Option<&str>,
    ) -> AnalysisReport {
        AnalysisReport {
            estimated_draw_time: self.estimated_draw_time,
            mean_draw_time: self.mean_draw_time,
            weekday_mean_draw_time: non_empty_or_sentinel(weekday_mean),
            weekend_mean_draw_time: non_empty_or_sentinel(weekend_mean),
            earliest_draw_time: self.earliest_draw_time,
            latest_draw_time: self.latest_draw_time,
            sample_count: self.sample_count,
        }
    }
}

/// The full analysis surface shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub estimated_draw_time: String,
    pub mean_draw_time: String,
    pub weekday_mean_draw_time: String,
    pub weekend_mean_draw_time: String,
    pub earliest_draw_time: String,
    pub latest_draw_time: String,
    pub sample_count: usize,
}

fn non_empty_or_sentinel(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => SENTINEL_TIME.to_string(),
    }
}

/// Aggregate high-confidence records into point estimates.
///
/// The mean is the arithmetic mean of drawn-time minutes, rounded to the
/// nearest minute. Earliest/latest come from a stable sort, so records tied
/// on the minute keep their original relative order. The estimated draw time
/// is defined to equal the mean; no recency or day-of-week weighting.
pub fn aggregate(records: &[HistoricalRecord]) -> IssueTimeStats {
    let mut drawn: Vec<(u16, &str)> = records
        .iter()
        .filter_map(|r| parse_hhmm(&r.drawn_time).map(|m| (m, r.drawn_time.as_str())))
        .collect();

    if drawn.is_empty() {
        return IssueTimeStats::empty();
    }

    let total: u32 = drawn.iter().map(|&(m, _)| u32::from(m)).sum();
    let mean = (f64::from(total) / drawn.len() as f64).round() as u16;
    let mean_draw_time = format_hhmm(mean);

    drawn.sort_by_key(|&(m, _)| m);
    let earliest = drawn.first().map(|&(_, s)| s.to_string()).unwrap_or_default();
    let latest = drawn.last().map(|&(_, s)| s.to_string()).unwrap_or_default();

    IssueTimeStats {
        estimated_draw_time: mean_draw_time.clone(),
        mean_draw_time,
        earliest_draw_time: earliest,
        latest_draw_time: latest,
        sample_count: drawn.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Confidence;

    fn record(drawn: &str) -> HistoricalRecord {
        HistoricalRecord {
            date: "2026-08-20".to_string(),
            planned_time: "18:30".to_string(),
            drawn_time: drawn.to_string(),
            confidence: Confidence::High,
        }
    }

    #[test]
    fn empty_input_yields_sentinels() {
        let stats = aggregate(&[]);
        assert_eq!(stats.estimated_draw_time, SENTINEL_TIME);
        assert_eq!(stats.mean_draw_time, SENTINEL_TIME);
        assert_eq!(stats.earliest_draw_time, SENTINEL_TIME);
        assert_eq!(stats.latest_draw_time, SENTINEL_TIME);
        assert_eq!(stats.sample_count, 0);
    }

    #[test]
    fn two_records_average_to_the_midpoint() {
        let stats = aggregate(&[record("17:40"), record("18:10")]);
        assert_eq!(stats.mean_draw_time, "17:55");
        assert_eq!(stats.estimated_draw_time, "17:55");
        assert_eq!(stats.earliest_draw_time, "17:40");
        assert_eq!(stats.latest_draw_time, "18:10");
        assert_eq!(stats.sample_count, 2);
    }

    #[test]
    fn mean_rounds_to_the_nearest_minute() {
        // 17:40, 17:41, 17:41 -> mean 17:40.67 -> 17:41
        let stats = aggregate(&[record("17:40"), record("17:41"), record("17:41")]);
        assert_eq!(stats.mean_draw_time, "17:41");
    }

    #[test]
    fn unparseable_drawn_times_are_ignored() {
        let stats = aggregate(&[record("17:40"), record(""), record("bad")]);
        assert_eq!(stats.sample_count, 1);
        assert_eq!(stats.mean_draw_time, "17:40");
    }

    #[test]
    fn only_unparseable_drawn_times_yields_sentinels() {
        let stats = aggregate(&[record(""), record("??")]);
        assert_eq!(stats.sample_count, 0);
        assert_eq!(stats.estimated_draw_time, SENTINEL_TIME);
    }

    #[test]
    fn report_merges_external_means_with_sentinel_fallback() {
        let report = aggregate(&[record("17:40")]).into_report(Some("17:50"), None);
        assert_eq!(report.weekday_mean_draw_time, "17:50");
        assert_eq!(report.weekend_mean_draw_time, SENTINEL_TIME);
        assert_eq!(report.estimated_draw_time, "17:40");
    }
}
