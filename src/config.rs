use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Duration bucket thresholds for auto-tag generation, in milliseconds.
/// Kept out of the bucketing algorithm itself so callers can retune them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBuckets {
    pub short_max_ms: u64,
    pub medium_max_ms: u64,
}

impl Default for DurationBuckets {
    fn default() -> Self {
        DurationBuckets {
            short_max_ms: 180_000,
            medium_max_ms: 300_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tracks_path: PathBuf,
    pub tags_path: PathBuf,
    pub templates_path: PathBuf,
    pub playlists_path: PathBuf,
    pub duration_buckets: DurationBuckets,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tracks_path: PathBuf::from("data/tracks.json"),
            tags_path: PathBuf::from("data/tags.json"),
            templates_path: PathBuf::from("data/templates.json"),
            playlists_path: PathBuf::from("data/playlists.json"),
            duration_buckets: DurationBuckets::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file. Unset keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(format!(
                "config file {}",
                path.display()
            )));
        }

        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
