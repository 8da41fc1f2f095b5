use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One track as delivered by the ingestion collaborator. Read-only within
/// this crate; `track_id` is the source system's stable key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub image: String,
    /// Milliseconds.
    pub duration: u64,
}

impl Track {
    pub fn new(
        track_id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        image: impl Into<String>,
        duration: u64,
    ) -> Self {
        Track {
            track_id: track_id.into(),
            name: name.into(),
            artist: artist.into(),
            image: image.into(),
            duration,
        }
    }

    pub fn short_display(&self) -> String {
        format!("{} by {} ({})", self.name, self.artist, self.track_id)
    }

    pub fn duration_str(&self) -> String {
        crate::readable_duration(self.duration)
    }
}

// Two tracks with the same id are interchangeable, whatever their other
// fields say.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.track_id == other.track_id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.track_id.hash(state);
    }
}
