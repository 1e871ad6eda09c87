use queue_scout::analysis::suggestion::SuggestionTier;
use queue_scout::analysis::{SENTINEL_TIME, within_business_hours};
use queue_scout::backend::compose_analysis;
use queue_scout::backend::types::DiningAnalysisResponse;

fn response(body: &str) -> DiningAnalysisResponse {
    serde_json::from_str(body).expect("fixture parses")
}

#[test]
fn full_pipeline_over_a_mixed_confidence_payload() {
    let payload = response(
        r#"{
            "store_id": 3011,
            "dining_time": "18:30",
            "analysis_data": [
                {"date": "2026-08-17", "dining_time": "18:30",
                 "estimated_issue_time": "17:55", "confidence": "high"},
                {"date": "2026-08-18", "dining_time": "18:30",
                 "estimated_issue_time": "18:05", "confidence": "high"},
                {"date": "2026-08-19", "dining_time": "18:30",
                 "estimated_issue_time": "18:40", "confidence": "medium"},
                {"date": "2026-08-22", "dining_time": "18:30",
                 "estimated_issue_time": "17:10", "confidence": "low"},
                {"date": "bad-date", "dining_time": "18:30",
                 "estimated_issue_time": "", "confidence": "low"}
            ],
            "statistics": {
                "weekday_avg_issue_time": "18:02",
                "weekend_avg_issue_time": "17:20",
                "avg_issue_time": "17:51",
                "total_days": 5
            }
        }"#,
    );

    let analysis = compose_analysis(payload);

    // Point estimates over the two high-confidence records only.
    assert_eq!(analysis.report.mean_draw_time, "18:00");
    assert_eq!(analysis.report.estimated_draw_time, "18:00");
    assert_eq!(analysis.report.earliest_draw_time, "17:55");
    assert_eq!(analysis.report.latest_draw_time, "18:05");
    assert_eq!(analysis.report.sample_count, 2);

    // External weekday/weekend means are merged, not recomputed.
    assert_eq!(analysis.report.weekday_mean_draw_time, "18:02");
    assert_eq!(analysis.report.weekend_mean_draw_time, "17:20");

    // History covers all records, with lenient degradation for the bad one.
    assert_eq!(analysis.history.len(), 5);
    let bad = &analysis.history[4];
    assert_eq!(bad.wait_minutes, 0);
    assert_eq!(bad.weekday_label, "");
    assert!(!bad.is_weekend);
    let saturday = &analysis.history[3];
    assert!(saturday.is_weekend);

    // Suggestion ignores confidence: waits 35, 25, 0 (drawn after planned),
    // 80 over the four valid records -> avg 35 -> moderate.
    assert_eq!(analysis.suggestion.avg_wait_minutes, 35);
    assert_eq!(analysis.suggestion.tier, SuggestionTier::Moderate);
    assert_eq!(analysis.suggestion.estimated_queue_count, 12);
    assert!(analysis.suggestion.advice.contains("17:51"));
}

#[test]
fn empty_payload_still_produces_a_renderable_result() {
    let analysis = compose_analysis(response(r#"{"analysis_data": []}"#));

    assert_eq!(analysis.report.estimated_draw_time, SENTINEL_TIME);
    assert_eq!(analysis.report.mean_draw_time, SENTINEL_TIME);
    assert_eq!(analysis.report.earliest_draw_time, SENTINEL_TIME);
    assert_eq!(analysis.report.latest_draw_time, SENTINEL_TIME);
    assert_eq!(analysis.report.weekday_mean_draw_time, SENTINEL_TIME);
    assert_eq!(analysis.report.weekend_mean_draw_time, SENTINEL_TIME);
    assert_eq!(analysis.report.sample_count, 0);
    assert_eq!(analysis.suggestion.avg_wait_minutes, 0);
    assert_eq!(analysis.suggestion.estimated_queue_count, 0);
}

#[test]
fn business_hours_gate_matches_the_backend_window() {
    assert!(!within_business_hours("09:00"));
    assert!(within_business_hours("10:30"));
    assert!(within_business_hours("22:00"));
    assert!(!within_business_hours("22:01"));
}
