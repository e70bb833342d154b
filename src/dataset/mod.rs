//! The in-memory bin dataset.
//!
//! Loaded once at startup and never mutated, so it can be shared across
//! any number of concurrent readers without synchronization.

mod loader;

pub use loader::LoadError;

use std::path::Path;

use crate::geo;
use crate::models::{Bin, NearestBin};

/// The full set of bins, in dataset load order.
#[derive(Debug, Clone)]
pub struct BinSet {
    bins: Vec<Bin>,
}

impl BinSet {
    /// Load the dataset from a CSV file. Fails if the file is unreadable,
    /// a required column is missing, or a coordinate does not parse.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            bins: loader::load_bins(path)?,
        })
    }

    /// Build a set from already-constructed bins.
    pub fn from_bins(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// All bins in load order.
    pub fn all(&self) -> &[Bin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Find the bin nearest to the query point.
    ///
    /// Linear scan over the whole set. Ties keep the earliest-loaded bin
    /// (strict less-than comparison).
    pub fn nearest(&self, lat: f64, lng: f64) -> NearestBin {
        let mut best: Option<&Bin> = None;
        let mut best_distance = f64::INFINITY;

        for bin in &self.bins {
            let distance = geo::haversine_meters(lat, lng, bin.lat, bin.lng);
            if distance < best_distance {
                best_distance = distance;
                best = Some(bin);
            }
        }

        match best {
            Some(bin) => NearestBin {
                bin: Some(bin.clone()),
                distance_meters: best_distance,
                bearing_degrees: geo::bearing_degrees(lat, lng, bin.lat, bin.lng),
            },
            None => NearestBin {
                bin: None,
                distance_meters: 0.0,
                bearing_degrees: 0.0,
            },
        }
    }
}
