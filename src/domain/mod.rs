mod playlist;
mod tag;
mod template;
mod track;

pub use playlist::Playlist;
pub use tag::Tag;
pub use template::{Entry, Position, PositionSpec, SlotItem, Template};
pub use track::Track;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who made an entity: a person, or the auto-tag generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Creator {
    #[default]
    User,
    Auto,
}

/// Identity keys shared by the id-carrying entities, so dedup and merge
/// helpers work across tags, templates, and playlists alike.
pub trait Identified {
    fn ident(&self) -> &str;
    fn label(&self) -> &str;
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
