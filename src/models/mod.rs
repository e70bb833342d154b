//! Data models for binfinder.

mod bin;

pub use bin::{Bin, NearestBin};
