//! The current user selection, passed explicitly into each flow.
//!
//! Single event-loop semantics: all writes happen sequentially, last write
//! wins, no locking. A slow stale response can overwrite a newer one; that is
//! a race on freshness, never corruption.

use serde::{Deserialize, Serialize};

/// Last-selected region, store and date. Persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub store_id: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Selection {
    /// Selecting a region invalidates the dependent store and date picks.
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = Some(region.into());
        self.store_id = None;
        self.date = None;
    }

    /// Selecting a store invalidates the dependent date pick.
    pub fn set_store(&mut self, store_id: u32) {
        self.store_id = Some(store_id);
        self.date = None;
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = Some(date.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_change_clears_store_and_date() {
        let mut selection = Selection::default();
        selection.set_region("杭州");
        selection.set_store(3011);
        selection.set_date("2026-08-24");

        selection.set_region("上海");

        assert_eq!(selection.region.as_deref(), Some("上海"));
        assert_eq!(selection.store_id, None);
        assert_eq!(selection.date, None);
    }

    #[test]
    fn store_change_clears_date_only() {
        let mut selection = Selection::default();
        selection.set_region("杭州");
        selection.set_store(3011);
        selection.set_date("2026-08-24");

        selection.set_store(3020);

        assert_eq!(selection.region.as_deref(), Some("杭州"));
        assert_eq!(selection.store_id, Some(3020));
        assert_eq!(selection.date, None);
    }

    #[test]
    fn selection_round_trips_through_json() {
        let mut selection = Selection::default();
        selection.set_region("杭州");
        selection.set_store(3011);
        selection.set_date("2026-08-24");

        let json = serde_json::to_string(&selection).unwrap();
        let restored: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, selection);
    }
}
