use serde::Deserialize;
use thiserror::Error;

/// Machine-readable error codes the backend attaches to its error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackendErrorCode {
    StoreClosed,
    NoQueueNeeded,
    CalculationError,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request never reached the backend.
    #[error("network error: {0}")]
    Transport(String),
    /// Non-success status from the backend, with the decoded error envelope.
    #[error("backend error (HTTP {status}): {message}")]
    Response {
        status: u16,
        code: Option<BackendErrorCode>,
        message: String,
    },
    /// Success status but the body did not have the expected shape.
    #[error("unexpected response format: {0}")]
    Format(String),
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("planned time {0} is outside business hours (10:30-22:00)")]
    OutsideBusinessHours(String),
    #[error("incomplete selection: {0}")]
    MissingSelection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// How an error should be surfaced to the user.
///
/// Blocking notices must be acknowledged before the user continues; transient
/// ones auto-dismiss. Actionable backend conditions (store closed, no queue
/// needed) block, everything else is transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub blocking: bool,
    pub tone: Tone,
    pub text: String,
}

impl Notice {
    fn blocking(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            blocking: true,
            tone,
            text: text.into(),
        }
    }

    fn transient(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            blocking: false,
            tone,
            text: text.into(),
        }
    }
}

const STORE_CLOSED_TEXT: &str =
    "The store was not open on the selected date. Try querying another date.";
const NO_QUEUE_TEXT: &str = "No queue at this store right now. You can head straight over.";
const CALCULATION_TEXT: &str = "Statistics could not be computed for this selection.";

impl AppError {
    /// Map an error to its user-facing presentation.
    ///
    /// The backend error code is authoritative when present. Responses that
    /// omit the code fall back to substring matching on the message text,
    /// which is weaker but kept for older backend deployments.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::Response {
                code: Some(code), ..
            } => match code {
                BackendErrorCode::StoreClosed => Notice::blocking(Tone::Warning, STORE_CLOSED_TEXT),
                BackendErrorCode::NoQueueNeeded => Notice::blocking(Tone::Success, NO_QUEUE_TEXT),
                BackendErrorCode::CalculationError => {
                    Notice::transient(Tone::Error, CALCULATION_TEXT)
                }
            },
            AppError::Response {
                code: None,
                status,
                message,
            } => {
                if message.contains("未营业") {
                    Notice::blocking(Tone::Warning, STORE_CLOSED_TEXT)
                } else if message.contains("不需要排队") {
                    Notice::blocking(Tone::Success, NO_QUEUE_TEXT)
                } else {
                    match status {
                        500 => Notice::transient(
                            Tone::Error,
                            "The server could not process the request. Try again later.",
                        ),
                        422 => Notice::transient(
                            Tone::Warning,
                            "The query failed. Check the selected store and date.",
                        ),
                        404 => Notice::transient(
                            Tone::Warning,
                            "No data found. Check the store or pick another date.",
                        ),
                        _ => Notice::transient(Tone::Error, message.clone()),
                    }
                }
            }
            AppError::Transport(_) => Notice::transient(
                Tone::Error,
                "Network connection failed. Check your connection and try again.",
            ),
            AppError::Format(_) => Notice::transient(
                Tone::Error,
                "The server returned data in an unexpected format.",
            ),
            AppError::PermissionDenied => Notice::transient(
                Tone::Warning,
                "Location permission is off. Pick a region manually or enable it in settings.",
            ),
            AppError::LocationUnavailable(_) => Notice::transient(
                Tone::Warning,
                "Your location could not be determined. Pick a region manually.",
            ),
            AppError::OutsideBusinessHours(_) => Notice::transient(
                Tone::Warning,
                "Pick a planned time within business hours (10:30-22:00).",
            ),
            AppError::MissingSelection(hint) => Notice::transient(Tone::Warning, hint.clone()),
        }
    }
}
