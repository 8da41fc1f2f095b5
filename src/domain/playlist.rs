use super::{Creator, Identified, Track, new_id};
use serde::{Deserialize, Serialize};

/// A concrete, ordered tracklist. Produced in one shot by the generator;
/// `spotify_id` is filled in later by the publishing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub spotify_id: Option<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Playlist {
            id: new_id(),
            name: name.into(),
            creator: Creator::User,
            tracks: Vec::new(),
            spotify_id: None,
        }
    }

    pub fn with_tracks(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Playlist {
            tracks,
            ..Playlist::new(name)
        }
    }

    /// Total runtime in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration).sum()
    }

    pub fn duration_str(&self) -> String {
        crate::readable_duration(self.duration_ms())
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.tracks == other.tracks
    }
}

impl Identified for Playlist {
    fn ident(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
