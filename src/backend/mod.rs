//! HTTP client for the historical-statistics backend.
//!
//! The backend is an opaque external collaborator reached over read-only GET
//! endpoints. Nothing here retries; recovery is always a new user action.

use crate::analysis::classifier::{classify, filter_high_confidence};
use crate::analysis::stats::{AnalysisReport, aggregate};
use crate::analysis::suggestion::{Suggestion, suggest};
use crate::analysis::{ClassifiedRecord, within_business_hours};
use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub mod types;

use types::{
    DiningAnalysisResponse, ErrorEnvelope, QueueStatsResponse, RegionsResponse, Store,
    StoresResponse,
};

/// Full result of one dining-time analysis query.
#[derive(Debug)]
pub struct DiningAnalysis {
    pub report: AnalysisReport,
    pub suggestion: Suggestion,
    pub history: Vec<ClassifiedRecord>,
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "backend request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| AppError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Transport(err.to_string()))?;

        if !status.is_success() {
            let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();
            return Err(response_error(status.as_u16(), envelope));
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|err| AppError::Format(err.to_string()))?;

        // Some backend deployments report failures inside a 200 body.
        if value.get("error").is_some_and(|e| !e.is_null()) {
            let envelope: ErrorEnvelope =
                serde_json::from_value(value).unwrap_or_default();
            return Err(response_error(status.as_u16(), envelope));
        }

        serde_json::from_value(value).map_err(|err| AppError::Format(err.to_string()))
    }

    /// Supported region names.
    pub async fn regions(&self) -> Result<Vec<String>, AppError> {
        let response: RegionsResponse = self.get_json("/api/regions", &[]).await?;
        Ok(response.regions)
    }

    /// Stores available in a region.
    pub async fn stores(&self, region: &str) -> Result<Vec<Store>, AppError> {
        let response: StoresResponse = self
            .get_json("/api/stores", &[("region", region.to_string())])
            .await?;
        Ok(response.stores)
    }

    /// Dates with recorded data for a store.
    pub async fn dates(&self, store_id: u32) -> Result<Vec<String>, AppError> {
        let response: types::DatesResponse = self
            .get_json("/api/dates", &[("store_id", store_id.to_string())])
            .await?;
        Ok(response.dates)
    }

    /// Aggregate queue statistics snapshot for a store and date.
    pub async fn queue_stats(
        &self,
        store_id: u32,
        date: &str,
    ) -> Result<QueueStatsResponse, AppError> {
        self.get_json(
            "/api/data",
            &[
                ("store_id", store_id.to_string()),
                ("start_date", date.to_string()),
                ("end_date", date.to_string()),
            ],
        )
        .await
    }

    /// Raw dining-time analysis payload for a store and planned time.
    pub async fn dining_analysis(
        &self,
        store_id: u32,
        planned_time: &str,
    ) -> Result<DiningAnalysisResponse, AppError> {
        self.get_json(
            "/api/dining-analysis",
            &[
                ("store_id", store_id.to_string()),
                ("dining_time", planned_time.to_string()),
            ],
        )
        .await
    }

    /// Fetch and analyze historical records for a planned visit time.
    ///
    /// The planned time is validated against business hours before any
    /// network interaction.
    pub async fn analyze_dining_time(
        &self,
        store_id: u32,
        planned_time: &str,
    ) -> Result<DiningAnalysis, AppError> {
        if !within_business_hours(planned_time) {
            return Err(AppError::OutsideBusinessHours(planned_time.to_string()));
        }
        let response = self.dining_analysis(store_id, planned_time).await?;
        Ok(compose_analysis(response))
    }
}

/// Assemble the analysis surface from a raw backend payload.
///
/// Point estimates use only the high-confidence records; the classified
/// history and the suggestion use the full set; weekday/weekend means come
/// straight from the backend statistics block.
pub fn compose_analysis(response: DiningAnalysisResponse) -> DiningAnalysis {
    let high_confidence = filter_high_confidence(&response.analysis_data);
    let report = aggregate(&high_confidence).into_report(
        response.statistics.weekday_avg_issue_time.as_deref(),
        response.statistics.weekend_avg_issue_time.as_deref(),
    );

    let history: Vec<ClassifiedRecord> = response.analysis_data.iter().map(classify).collect();
    let suggestion = suggest(&history, response.statistics.avg_issue_time.as_deref());

    DiningAnalysis {
        report,
        suggestion,
        history,
    }
}

fn response_error(status: u16, envelope: ErrorEnvelope) -> AppError {
    let message = envelope
        .message
        .or(envelope.error)
        .unwrap_or_else(|| "server error".to_string());
    AppError::Response {
        status,
        code: envelope.error_code,
        message,
    }
}
