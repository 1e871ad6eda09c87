//! Location permission gating and default-region resolution.

use crate::error::AppError;
use crate::geo::{Coordinate, cities};
use tracing::{info, warn};

pub mod mock;
pub mod platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Unasked,
    Granted,
    Denied,
}

/// Platform snapshot of the location permission plus the one-shot prompt.
///
/// `prompt` may suspend for as long as the user takes to decide; there is no
/// timeout or cancellation on that round trip.
pub trait PermissionProbe {
    fn status(&self) -> PermissionState;
    async fn prompt(&mut self) -> bool;
}

/// Platform location acquisition. May fail independently of permission.
pub trait LocationProvider {
    async fn locate(&self) -> Result<Coordinate, AppError>;
}

/// Mediates one-time, non-repetitive permission acquisition.
#[derive(Debug)]
pub struct PermissionGate<P> {
    probe: P,
    prompt_denied: bool,
}

impl<P: PermissionProbe> PermissionGate<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            prompt_denied: false,
        }
    }

    /// Current permission state without prompting.
    pub fn check_silently(&self) -> PermissionState {
        if self.prompt_denied && self.probe.status() == PermissionState::Unasked {
            return PermissionState::Denied;
        }
        self.probe.status()
    }

    /// Resolve the permission, prompting at most once.
    ///
    /// An explicit denial is never re-surfaced; recovery only happens through
    /// an out-of-band settings change, which shows up as a fresh `Granted`
    /// snapshot from the probe.
    pub async fn request_silently(&mut self) -> bool {
        match self.probe.status() {
            PermissionState::Granted => true,
            PermissionState::Denied => false,
            PermissionState::Unasked => {
                if self.prompt_denied {
                    return false;
                }
                let granted = self.probe.prompt().await;
                if !granted {
                    self.prompt_denied = true;
                }
                granted
            }
        }
    }
}

/// Resolve the default region for startup or a manual "locate me" action.
///
/// Permission, location acquisition and nearest-match run in sequence; the
/// first failure is terminal for this attempt and falls back to
/// `fallback` when it is in `supported`. There is no retry.
pub async fn resolve_default_region<P, L>(
    gate: &mut PermissionGate<P>,
    provider: &L,
    supported: &[String],
    fallback: &str,
) -> Option<String>
where
    P: PermissionProbe,
    L: LocationProvider,
{
    if !gate.request_silently().await {
        info!("location permission unavailable, using fallback region");
        return fallback_region(supported, fallback);
    }

    let coordinate = match provider.locate().await {
        Ok(coordinate) => coordinate,
        Err(err) => {
            warn!(error = %err, "location acquisition failed, using fallback region");
            return fallback_region(supported, fallback);
        }
    };

    match cities::nearest_match(coordinate, supported) {
        Some(name) => {
            info!(region = name, "resolved default region from location");
            Some(name.to_string())
        }
        None => fallback_region(supported, fallback),
    }
}

fn fallback_region(supported: &[String], fallback: &str) -> Option<String> {
    supported
        .iter()
        .find(|region| region.as_str() == fallback)
        .cloned()
}
