//! Wire DTOs for the read-only backend endpoints.

use crate::analysis::HistoricalRecord;
use crate::error::BackendErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StoresResponse {
    pub stores: Vec<Store>,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DatesResponse {
    pub dates: Vec<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Aggregate queue statistics for one store and date.
#[derive(Debug, Default, Deserialize)]
pub struct QueueStatsResponse {
    #[serde(default)]
    pub real_time: Option<RealTimeBlock>,
    #[serde(default)]
    pub stats: Option<RateBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RealTimeBlock {
    #[serde(default)]
    pub current_queue_count: Option<u32>,
    #[serde(default)]
    pub current_wait_time: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RateBlock {
    #[serde(default)]
    pub avg_calls: Option<f64>,
    #[serde(default)]
    pub max_calls: Option<f64>,
    #[serde(default)]
    pub avg_new_tickets: Option<f64>,
    #[serde(default)]
    pub max_new_tickets: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DiningAnalysisResponse {
    #[serde(default)]
    pub analysis_data: Vec<HistoricalRecord>,
    #[serde(default)]
    pub statistics: StatisticsBlock,
}

/// Backend-computed aggregate over the full (unfiltered) record set.
#[derive(Debug, Default, Deserialize)]
pub struct StatisticsBlock {
    #[serde(default)]
    pub weekday_avg_issue_time: Option<String>,
    #[serde(default)]
    pub weekend_avg_issue_time: Option<String>,
    #[serde(default)]
    pub avg_issue_time: Option<String>,
    #[serde(default)]
    pub total_days: Option<u32>,
}

/// Error envelope the backend may return with any non-success status, or
/// embedded in a 200 body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<BackendErrorCode>,
    #[serde(default)]
    pub message: Option<String>,
}
