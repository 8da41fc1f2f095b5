use crate::{
    Error, Result,
    domain::{Identified, Playlist, Tag, Template, Track},
    hierarchy::dedup_by_id,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use std::{fs, path::Path};
use tracing::debug;

// Interchange shape: each collection file nests its items under a single
// plural key, e.g. {"tags": [...]}. The keys are contract, not style.

#[derive(Default, Serialize, Deserialize)]
struct TracksFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

#[derive(Default, Serialize, Deserialize)]
struct TagsFile {
    #[serde(default)]
    tags: Vec<Tag>,
}

#[derive(Default, Serialize, Deserialize)]
struct TemplatesFile {
    #[serde(default)]
    templates: Vec<Template>,
}

#[derive(Default, Serialize, Deserialize)]
struct PlaylistsFile {
    #[serde(default)]
    playlists: Vec<Playlist>,
}

pub fn load_tracks<P: AsRef<Path>>(path: P) -> Result<Vec<Track>> {
    Ok(read_file::<TracksFile, _>(path)?.tracks)
}

pub fn load_tags<P: AsRef<Path>>(path: P) -> Result<Vec<Tag>> {
    Ok(read_file::<TagsFile, _>(path)?.tags)
}

pub fn load_templates<P: AsRef<Path>>(path: P) -> Result<Vec<Template>> {
    Ok(read_file::<TemplatesFile, _>(path)?.templates)
}

pub fn load_playlists<P: AsRef<Path>>(path: P) -> Result<Vec<Playlist>> {
    Ok(read_file::<PlaylistsFile, _>(path)?.playlists)
}

pub fn save_tracks<P: AsRef<Path>>(tracks: &[Track], path: P) -> Result<()> {
    write_pretty(path.as_ref(), &json!({ "tracks": tracks }))
}

pub fn save_tags<P: AsRef<Path>>(tags: &[Tag], path: P) -> Result<()> {
    write_pretty(path.as_ref(), &json!({ "tags": tags }))
}

pub fn save_templates<P: AsRef<Path>>(templates: &[Template], path: P) -> Result<()> {
    write_pretty(path.as_ref(), &json!({ "templates": templates }))
}

pub fn save_playlists<P: AsRef<Path>>(playlists: &[Playlist], path: P) -> Result<()> {
    write_pretty(path.as_ref(), &json!({ "playlists": playlists }))
}

/// Replace the contents of an owned collection outright.
pub fn replace_all<T>(target: &mut Vec<T>, loaded: Vec<T>) {
    target.clear();
    target.extend(loaded);
}

/// Append freshly loaded items to an existing collection, keeping the
/// first occurrence per id. Reloading a file twice changes nothing.
pub fn merge_unique<T: Identified>(existing: Vec<T>, incoming: Vec<T>) -> Vec<T> {
    dedup_by_id(existing.into_iter().chain(incoming).collect())
}

fn read_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(format!("file {}", path.display())));
    }

    let raw = fs::read_to_string(path)?;
    let parsed = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), "loaded collection file");
    Ok(parsed)
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body)?;
    debug!(path = %path.display(), "saved collection file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PositionSpec, SlotItem};

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn tags_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "tags.json");

        let mut tag = Tag::new("focus");
        tag.add_track(Track::new("t1", "song", "artist", "img", 240_000));
        tag.locked = true;

        save_tags(&[tag.clone()], &path).unwrap();
        let loaded = load_tags(&path).unwrap();

        assert_eq!(loaded, vec![tag.clone()]);
        assert!(loaded[0].locked);

        // Contract keys, exactly.
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""tags""#));
        assert!(raw.contains(r#""track_id""#));
    }

    #[test]
    fn templates_round_trip_with_mixed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "templates.json");

        let mut template = Template::new("evening");
        template
            .insert(
                SlotItem::Track(Track::new("t1", "a", "x", "", 1)),
                PositionSpec::Same(0),
                1.0,
            )
            .unwrap();
        template
            .insert(
                SlotItem::Tag(Tag::auto("chill", vec![Track::new("t2", "b", "y", "", 2)])),
                PositionSpec::Same(0),
                0.3,
            )
            .unwrap();

        save_templates(&[template.clone()], &path).unwrap();
        assert_eq!(load_templates(&path).unwrap(), vec![template]);
    }

    #[test]
    fn playlists_keep_spotify_id_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "playlists.json");

        let mut playlist = Playlist::with_tracks(
            "mix",
            vec![
                Track::new("t2", "b", "y", "", 2),
                Track::new("t1", "a", "x", "", 1),
            ],
        );
        playlist.spotify_id = Some("sp:9".into());

        save_playlists(&[playlist.clone()], &path).unwrap();
        let loaded = load_playlists(&path).unwrap();

        assert_eq!(loaded[0].spotify_id.as_deref(), Some("sp:9"));
        assert_eq!(loaded[0].tracks[0].track_id, "t2");
    }

    #[test]
    fn loading_a_missing_file_is_not_found() {
        assert!(matches!(
            load_tags("no/such/tags.json"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn merge_unique_prefers_the_already_loaded_copy() {
        let mut first = Tag::new("one");
        first.id = "same".into();
        let mut second = Tag::new("two");
        second.id = "same".into();

        let merged = merge_unique(vec![first], vec![second, Tag::new("three")]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "one");
    }

    #[test]
    fn replace_all_swaps_contents_outright() {
        let mut tags = vec![Tag::new("old")];
        replace_all(&mut tags, vec![Tag::new("new a"), Tag::new("new b")]);

        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["new a", "new b"]);
    }
}
