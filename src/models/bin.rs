//! Bin model and the nearest-bin query response.
//!
//! Bins are loaded once at startup from the dataset CSV and never change
//! afterwards, so both types are plain value objects.

use serde::{Deserialize, Serialize};

/// A single compost drop-off bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Sequential id, assigned from 1 in dataset load order.
    pub id: u64,
    /// Display name. Defaults to "Compost Bin {id}" when the source has none.
    pub name: String,
    /// Free-text description from the source data.
    pub description: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Result of a nearest-bin query.
///
/// `bin` is `None` only when the dataset is empty; distance and bearing
/// are both 0 in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestBin {
    pub bin: Option<Bin>,
    /// Great-circle distance from the query point, in meters.
    pub distance_meters: f64,
    /// Initial compass bearing from the query point, degrees in [0, 360).
    pub bearing_degrees: f64,
}
