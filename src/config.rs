//! Runtime settings for binfinder.

use std::path::PathBuf;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_FILE: &str = "bins.csv";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "BINFINDER_DATASET";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Location of the bin dataset CSV.
    pub dataset_path: PathBuf,
}

impl Settings {
    /// Resolve settings from an optional CLI override, the environment,
    /// and the built-in default, in that order of precedence.
    pub fn resolve(dataset: Option<PathBuf>) -> Self {
        let dataset_path = dataset
            .or_else(|| {
                std::env::var(DATASET_ENV_VAR)
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE));

        Self { dataset_path }
    }
}
