//! Plain-text rendering of query results and notices.
//!
//! Pure string builders so the formatting stays testable; `main` just prints
//! what comes out. Missing numeric fields render as "-".

use crate::analysis::ClassifiedRecord;
use crate::analysis::stats::AnalysisReport;
use crate::analysis::suggestion::Suggestion;
use crate::backend::types::QueueStatsResponse;
use crate::error::{Notice, Tone};
use std::fmt::Write;

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn or_dash_1dp(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

pub fn render_queue_stats(stats: &QueueStatsResponse) -> String {
    let real_time = stats.real_time.as_ref();
    let rates = stats.stats.as_ref();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Current queue:      {}",
        or_dash(real_time.and_then(|r| r.current_queue_count))
    );
    let _ = writeln!(
        out,
        "Current wait (min): {}",
        or_dash(real_time.and_then(|r| r.current_wait_time))
    );
    let _ = writeln!(
        out,
        "Calls per minute:   avg {} / max {}",
        or_dash_1dp(rates.and_then(|s| s.avg_calls)),
        or_dash(rates.and_then(|s| s.max_calls))
    );
    let _ = writeln!(
        out,
        "Tickets per minute: avg {} / max {}",
        or_dash_1dp(rates.and_then(|s| s.avg_new_tickets)),
        or_dash(rates.and_then(|s| s.max_new_tickets))
    );
    out
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Estimated draw time: {}", report.estimated_draw_time);
    let _ = writeln!(out, "Mean draw time:      {}", report.mean_draw_time);
    let _ = writeln!(
        out,
        "Weekday mean:        {}",
        report.weekday_mean_draw_time
    );
    let _ = writeln!(
        out,
        "Weekend mean:        {}",
        report.weekend_mean_draw_time
    );
    let _ = writeln!(out, "Earliest observed:   {}", report.earliest_draw_time);
    let _ = writeln!(out, "Latest observed:     {}", report.latest_draw_time);
    let _ = writeln!(out, "Samples:             {}", report.sample_count);
    out
}

pub fn render_suggestion(suggestion: &Suggestion) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Average wait:    {} min (queue of roughly {})",
        suggestion.avg_wait_minutes, suggestion.estimated_queue_count
    );
    let _ = writeln!(out, "{}", suggestion.advice);
    out
}

pub fn render_history(records: &[ClassifiedRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "date        day   wait  drawn  confidence");
    for classified in records {
        let _ = writeln!(
            out,
            "{:<11} {:<4} {:>4}m  {:<5} {:?}",
            classified.record.date,
            if classified.weekday_label.is_empty() {
                "-"
            } else {
                &classified.weekday_label
            },
            classified.wait_minutes,
            classified.record.drawn_time,
            classified.record.confidence,
        );
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    let prefix = match notice.tone {
        Tone::Success => "OK",
        Tone::Warning => "NOTE",
        Tone::Error => "ERROR",
    };
    format!("[{prefix}] {}", notice.text)
}
