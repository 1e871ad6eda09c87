//! Best-effort persistence of the last-used selection.
//!
//! Loaded once at startup and written after every successful selection
//! change. A missing or unreadable file is never fatal; the user just starts
//! from an empty selection.

use crate::state::Selection;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_SELECTION_PATH: &str = "selection.json";

pub fn load(path: impl AsRef<Path>) -> Selection {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(selection) => selection,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stored selection unreadable, starting fresh");
                Selection::default()
            }
        },
        Err(_) => {
            // Missing file is the normal first-run case.
            debug!(path = %path.display(), "no stored selection");
            Selection::default()
        }
    }
}

pub fn save(path: impl AsRef<Path>, selection: &Selection) {
    let path = path.as_ref();
    let json = match serde_json::to_string_pretty(selection) {
        Ok(json) => json,
        Err(err) => {
            warn!(error = %err, "selection could not be serialized");
            return;
        }
    };
    if let Err(err) = std::fs::write(path, json) {
        warn!(path = %path.display(), error = %err, "selection could not be saved");
    }
}
