use super::{Creator, Identified, Track, new_id};
use serde::{Deserialize, Serialize};

/// A named group of tracks. Tags nest through `parent` id references only,
/// never direct pointers, and the graph must stay acyclic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub locked: bool,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            id: new_id(),
            name: name.into(),
            creator: Creator::User,
            tracks: Vec::new(),
            parent: None,
            locked: false,
        }
    }

    /// Tag produced by the auto-tag generator (artist or duration buckets).
    pub fn auto(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Tag {
            creator: Creator::Auto,
            tracks,
            ..Tag::new(name)
        }
    }

    pub fn with_parent(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Tag {
            parent: Some(parent.into()),
            ..Tag::new(name)
        }
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn remove_track(&mut self, index: usize) -> Option<Track> {
        match index < self.tracks.len() {
            true => Some(self.tracks.remove(index)),
            false => None,
        }
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.track_id == track_id)
    }
}

// Structural equality: id, name, and track list. Lock state and parentage
// are hierarchy bookkeeping, not identity.
impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.tracks == other.tracks
    }
}

impl Identified for Tag {
    fn ident(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tags_get_distinct_ids_and_user_creator() {
        let a = Tag::new("workout");
        let b = Tag::new("workout");

        assert_ne!(a.id, b.id);
        assert_eq!(a.creator, Creator::User);
        assert!(!a.locked);
        assert!(a.parent.is_none());
    }

    #[test]
    fn equality_ignores_lock_and_parent() {
        let mut a = Tag::new("focus");
        let mut b = a.clone();
        b.locked = true;
        b.parent = Some("other".into());

        assert_eq!(a, b);

        a.add_track(Track::new("t1", "x", "y", "", 0));
        assert_ne!(a, b);
    }

    #[test]
    fn track_membership_round_trip() {
        let mut tag = Tag::new("mix");
        tag.add_track(Track::new("t1", "a", "b", "", 0));

        assert!(tag.contains("t1"));
        assert_eq!(tag.remove_track(0).unwrap().track_id, "t1");
        assert!(tag.remove_track(0).is_none());
        assert!(!tag.contains("t1"));
    }

    #[test]
    fn deserialization_without_id_assigns_one() {
        let tag: Tag = serde_json::from_str(r#"{ "name": "loaded" }"#).unwrap();
        assert!(!tag.id.is_empty());
        assert_eq!(tag.creator, Creator::User);
    }
}
