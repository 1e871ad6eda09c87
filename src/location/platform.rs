//! Config-backed permission and location sources for the CLI build.
//!
//! A desktop terminal has no platform location service, so the permission
//! snapshot, the would-be prompt answer and the coordinate all come from the
//! `[location]` config section. The rest of the resolution pipeline treats
//! these exactly like a real platform.

use crate::error::AppError;
use crate::geo::Coordinate;
use crate::location::{LocationProvider, PermissionProbe, PermissionState};

#[derive(Debug, Clone)]
pub struct ConfiguredPermissionProbe {
    status: PermissionState,
    prompt_response: bool,
}

impl ConfiguredPermissionProbe {
    pub fn new(status: PermissionState, prompt_response: bool) -> Self {
        Self {
            status,
            prompt_response,
        }
    }
}

impl PermissionProbe for ConfiguredPermissionProbe {
    fn status(&self) -> PermissionState {
        self.status
    }

    async fn prompt(&mut self) -> bool {
        if self.prompt_response {
            self.status = PermissionState::Granted;
        } else {
            self.status = PermissionState::Denied;
        }
        self.prompt_response
    }
}

#[derive(Debug, Clone)]
pub struct ConfiguredLocationProvider {
    coordinate: Option<Coordinate>,
}

impl ConfiguredLocationProvider {
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self { coordinate }
    }
}

impl LocationProvider for ConfiguredLocationProvider {
    async fn locate(&self) -> Result<Coordinate, AppError> {
        self.coordinate.ok_or_else(|| {
            AppError::LocationUnavailable("no coordinate configured".to_string())
        })
    }
}
