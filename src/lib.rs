pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod hierarchy;
pub mod storage;

pub use config::{Config, DurationBuckets};
pub use error::{Error, Result};
pub use generator::{Generated, GenerationWarning, RandomSource, generate};

/// Render a millisecond duration as `m:ss`.
pub fn readable_duration(ms: u64) -> String {
    let mut secs = ms / 1000;
    let mins = secs / 60;
    secs %= 60;

    format!("{mins}:{secs:02}")
}
