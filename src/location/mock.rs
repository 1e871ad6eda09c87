//! Deterministic probe and provider implementations for tests.

use crate::error::AppError;
use crate::geo::Coordinate;
use crate::location::{LocationProvider, PermissionProbe, PermissionState};

#[derive(Debug, Clone)]
pub struct MockPermissionProbe {
    pub status: PermissionState,
    pub prompt_response: bool,
    pub prompts_issued: u32,
}

impl MockPermissionProbe {
    pub fn granted() -> Self {
        Self {
            status: PermissionState::Granted,
            prompt_response: false,
            prompts_issued: 0,
        }
    }

    pub fn denied() -> Self {
        Self {
            status: PermissionState::Denied,
            prompt_response: false,
            prompts_issued: 0,
        }
    }

    pub fn unasked(prompt_response: bool) -> Self {
        Self {
            status: PermissionState::Unasked,
            prompt_response,
            prompts_issued: 0,
        }
    }
}

impl PermissionProbe for MockPermissionProbe {
    fn status(&self) -> PermissionState {
        self.status
    }

    async fn prompt(&mut self) -> bool {
        self.prompts_issued += 1;
        self.prompt_response
    }
}

#[derive(Debug, Clone)]
pub struct MockLocationProvider {
    pub coordinate: Option<Coordinate>,
}

impl MockLocationProvider {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
        }
    }

    pub fn unavailable() -> Self {
        Self { coordinate: None }
    }
}

impl LocationProvider for MockLocationProvider {
    async fn locate(&self) -> Result<Coordinate, AppError> {
        self.coordinate
            .ok_or_else(|| AppError::LocationUnavailable("no fix available".to_string()))
    }
}
