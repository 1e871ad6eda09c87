//! Static region coordinate table and nearest-region lookup.
//!
//! The table is embedded from `data/cities.toml` and parsed once on first use.
//! It is read-only for the lifetime of the process.

use crate::geo::{Coordinate, distance_km};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

const CITY_TABLE_TOML: &str = include_str!("../../data/cities.toml");

#[derive(Debug, Deserialize)]
struct CityEntry {
    lat: f64,
    lon: f64,
}

static CITIES: LazyLock<HashMap<String, Coordinate>> = LazyLock::new(|| {
    let raw: HashMap<String, CityEntry> =
        toml::from_str(CITY_TABLE_TOML).expect("embedded city table is valid TOML");
    raw.into_iter()
        .map(|(name, entry)| (name, Coordinate::new(entry.lat, entry.lon)))
        .collect()
});

/// Reference coordinate for a region name, if the table knows it.
pub fn coordinate_of(name: &str) -> Option<Coordinate> {
    CITIES.get(name).copied()
}

/// Pick the candidate region closest to `user`.
///
/// Candidates without a table entry are skipped rather than treated as errors.
/// Returns `None` when the list is empty or nothing matched the table. On an
/// exact distance tie the earlier candidate wins (strict `<` comparison).
pub fn nearest_match<'a>(user: Coordinate, candidates: &'a [String]) -> Option<&'a str> {
    let mut nearest: Option<(&str, f64)> = None;

    for name in candidates {
        let Some(coordinate) = coordinate_of(name) else {
            continue;
        };
        let distance = distance_km(user, coordinate);
        match nearest {
            Some((_, min)) if distance >= min => {}
            _ => nearest = Some((name, distance)),
        }
    }

    if let Some((name, distance)) = nearest {
        debug!(region = name, distance_km = distance, "nearest region");
    }
    nearest.map(|(name, _)| name)
}
