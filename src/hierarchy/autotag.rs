use crate::{
    config::DurationBuckets,
    domain::{Identified, Tag, Track},
};
use indexmap::IndexMap;
use std::collections::HashSet;

pub const SHORT_TAG_NAME: &str = "Short Tracks";
pub const MEDIUM_TAG_NAME: &str = "Medium Tracks";
pub const LONG_TAG_NAME: &str = "Long Tracks";

/// One auto tag per distinct artist, in first-seen order.
pub fn tags_by_artist(tracks: &[Track]) -> Vec<Tag> {
    let mut by_artist: IndexMap<&str, Vec<Track>> = IndexMap::new();
    for track in tracks {
        by_artist
            .entry(track.artist.as_str())
            .or_default()
            .push(track.clone());
    }

    by_artist
        .into_iter()
        .map(|(artist, tracks)| Tag::auto(artist, tracks))
        .collect()
}

/// Partition tracks into short/medium/long auto tags. The thresholds live
/// in [`DurationBuckets`], not here.
pub fn tags_by_duration(tracks: &[Track], buckets: &DurationBuckets) -> Vec<Tag> {
    let mut short = Vec::new();
    let mut medium = Vec::new();
    let mut long = Vec::new();

    for track in tracks {
        if track.duration <= buckets.short_max_ms {
            short.push(track.clone());
        } else if track.duration <= buckets.medium_max_ms {
            medium.push(track.clone());
        } else {
            long.push(track.clone());
        }
    }

    vec![
        Tag::auto(SHORT_TAG_NAME, short),
        Tag::auto(MEDIUM_TAG_NAME, medium),
        Tag::auto(LONG_TAG_NAME, long),
    ]
}

/// Keep the first occurrence per id. Lets regenerated auto tags merge into
/// an existing set without accumulating copies.
pub fn dedup_by_id<T: Identified>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.ident().to_string()))
        .collect()
}

/// Keep the first occurrence per name.
pub fn dedup_by_name<T: Identified>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.label().to_string()))
        .collect()
}
