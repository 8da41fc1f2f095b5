use crate::domain::{Playlist, Position, SlotItem, Tag, Template, Track};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Attempt cap per template position. When a position has burned this many
/// draws without an accepted track it contributes nothing.
pub const MAX_TRIES: usize = 100;

/// Randomness seam for the generator. Any `rand::Rng` works out of the box;
/// tests implement it directly to force exact draws.
pub trait RandomSource {
    /// Uniform value in `[0, upper)`. `upper` is always positive.
    fn uniform(&mut self, upper: f64) -> f64;

    /// Uniform index in `[0, len)`. `len` is always non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, upper: f64) -> f64 {
        self.random_range(0.0..upper)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// The position hit [`MAX_TRIES`] without an accepted track and was
    /// skipped. The run continues; the playlist is just shorter.
    RetryCapReached { position: usize },
}

/// A finished generation run: the playlist plus anything worth surfacing
/// that didn't abort it.
#[derive(Debug)]
pub struct Generated {
    pub playlist: Playlist,
    pub warnings: Vec<GenerationWarning>,
}

/// Walk the template's positions in order, sampling one track per position.
///
/// Track entries are accepted unless the playlist already holds that id.
/// Tag entries pick uniformly from the tag's tracks not yet chosen from
/// that tag during this run; an exhausted tag resets its chosen set and the
/// draw is retried, so a tag can feed many positions without ever running
/// dry for good. All per-tag state is scoped to this single call.
pub fn generate<R: RandomSource>(
    name: &str,
    template: &Template,
    tags: &[Tag],
    rng: &mut R,
) -> Generated {
    let mut tracks: Vec<Track> = Vec::new();
    let mut in_playlist: HashSet<String> = HashSet::new();
    let mut chosen_per_tag: HashMap<String, HashSet<String>> = HashMap::new();
    let mut warnings = Vec::new();

    for (index, position) in template.contents.iter().enumerate() {
        let sum: f64 = position.iter().map(|e| e.probability).sum();
        if sum <= 0.0 {
            continue;
        }

        let mut accepted = false;
        for _ in 0..MAX_TRIES {
            let draw = rng.uniform(sum);
            let Some(entry) = candidate_at(position, draw) else {
                break;
            };

            match &entry.item {
                SlotItem::Track(track) => {
                    if in_playlist.insert(track.track_id.clone()) {
                        tracks.push(track.clone());
                        accepted = true;
                        break;
                    }
                }
                SlotItem::Tag(snapshot) => {
                    // Prefer the live tag over the snapshot embedded at
                    // template-edit time, so later membership edits count.
                    let tag = tags.iter().find(|t| t.id == snapshot.id).unwrap_or(snapshot);
                    let used = chosen_per_tag.entry(tag.id.clone()).or_default();

                    let available: Vec<&Track> = tag
                        .tracks
                        .iter()
                        .filter(|t| !used.contains(&t.track_id))
                        .collect();

                    if available.is_empty() {
                        if tag.tracks.is_empty() {
                            continue;
                        }
                        debug!(tag = %tag.name, "tag exhausted, resetting chosen set");
                        used.clear();
                        continue;
                    }

                    let track = available[rng.pick_index(available.len())];
                    used.insert(track.track_id.clone());
                    in_playlist.insert(track.track_id.clone());
                    tracks.push(track.clone());
                    accepted = true;
                    break;
                }
            }
        }

        if !accepted {
            warn!(position = index, "retry cap reached, skipping position");
            warnings.push(GenerationWarning::RetryCapReached { position: index });
        }
    }

    Generated {
        playlist: Playlist::with_tracks(name, tracks),
        warnings,
    }
}

/// First entry whose cumulative probability reaches the draw.
fn candidate_at(position: &Position, draw: f64) -> Option<&crate::domain::Entry> {
    let mut cumulative = 0.0;
    for entry in position {
        cumulative += entry.probability;
        if cumulative >= draw {
            return Some(entry);
        }
    }

    // Floating-point shortfall at the top of the range.
    position.last()
}
