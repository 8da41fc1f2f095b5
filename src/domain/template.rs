use super::{Creator, Identified, Tag, Track, new_id};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A candidate item inside a template position: either one concrete track
/// or a whole tag to sample from at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum SlotItem {
    Track(Track),
    Tag(Tag),
}

impl SlotItem {
    pub fn name(&self) -> &str {
        match self {
            SlotItem::Track(track) => &track.name,
            SlotItem::Tag(tag) => &tag.name,
        }
    }
}

/// One weighted candidate within a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub item: SlotItem,
    pub probability: f64,
}

/// One slot in a template's ordered contents. Empty only transiently
/// during editing; the slot API deletes emptied positions.
pub type Position = Vec<Entry>;

/// Where an insertion lands relative to an existing position index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSpec {
    /// Join the weighted set at this index.
    Same(usize),
    /// New single-entry position inserted at this index.
    Before(usize),
    /// New single-entry position inserted after this index.
    After(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(default = "super::new_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default)]
    pub contents: Vec<Position>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Template {
            id: new_id(),
            name: name.into(),
            creator: Creator::User,
            contents: Vec::new(),
        }
    }

    /// Insert an item per the position spec. `probability` is the target
    /// weight when joining an occupied position; fresh positions (and the
    /// very first insertion) always land at 1.0.
    pub fn insert(
        &mut self,
        item: SlotItem,
        spec: PositionSpec,
        probability: f64,
    ) -> Result<()> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability(probability));
        }

        if self.contents.is_empty() {
            self.contents.push(vec![Entry {
                item,
                probability: 1.0,
            }]);
            return Ok(());
        }

        match spec {
            PositionSpec::Same(index) => {
                // Pad with empty placeholders when the target index is past
                // the current end.
                while self.contents.len() <= index {
                    self.contents.push(Vec::new());
                }

                let position = &mut self.contents[index];
                match position.is_empty() {
                    true => position.push(Entry {
                        item,
                        probability: 1.0,
                    }),
                    false => {
                        renormalize(position, probability);
                        position.push(Entry { item, probability });
                    }
                }
            }
            PositionSpec::Before(index) | PositionSpec::After(index) => {
                let new_index = match spec {
                    PositionSpec::After(_) => index + 1,
                    _ => index,
                };
                while self.contents.len() < new_index {
                    self.contents.push(Vec::new());
                }
                self.contents.insert(
                    new_index,
                    vec![Entry {
                        item,
                        probability: 1.0,
                    }],
                );
            }
        }

        Ok(())
    }

    /// Remove one entry. A position's sole entry takes the whole position
    /// with it; removing from a multi-entry position leaves the remaining
    /// probabilities untouched (see DESIGN.md).
    pub fn remove(&mut self, position: usize, entry: usize) -> Result<Entry> {
        let entries = self.contents.get(position).ok_or_else(|| {
            Error::InvalidPosition(format!("position {position} out of range"))
        })?;
        if entry >= entries.len() {
            return Err(Error::InvalidPosition(format!(
                "entry {entry} out of range at position {position}"
            )));
        }

        let removed = match entries.len() {
            1 => self.contents.remove(position).remove(entry),
            _ => self.contents[position].remove(entry),
        };

        // A position emptied mid-list is dead weight.
        if position < self.contents.len() && self.contents[position].is_empty() {
            self.contents.remove(position);
        }

        Ok(removed)
    }

    /// Sum of entry probabilities at a position, 0.0 when out of range.
    pub fn position_sum(&self, position: usize) -> f64 {
        self.contents
            .get(position)
            .map(|entries| entries.iter().map(|e| e.probability).sum())
            .unwrap_or(0.0)
    }
}

/// Rescale existing entries by `(1 - incoming) / sum` so the position totals
/// exactly 1.0 once the incoming entry is appended. A near-zero sum rescales
/// everything to zero rather than dividing by it.
fn renormalize(entries: &mut [Entry], incoming: f64) {
    let sum: f64 = entries.iter().map(|e| e.probability).sum();
    let factor = match sum > f64::EPSILON {
        true => (1.0 - incoming) / sum,
        false => 0.0,
    };

    for entry in entries.iter_mut() {
        entry.probability = (entry.probability * factor).max(0.0);
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.contents == other.contents
    }
}

impl Identified for Template {
    fn ident(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
