mod autotag;

pub use autotag::{dedup_by_id, dedup_by_name, tags_by_artist, tags_by_duration};

use crate::{
    Error, Result,
    domain::{Creator, Tag},
};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use tracing::warn;

/// The synthetic root anchoring top-level and orphaned tags in a tree view.
/// Never persisted.
pub const ROOT_ID: &str = "0";
pub const ROOT_NAME: &str = "Root";

/// One node of the materialized tag tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagNode {
    pub id: String,
    pub name: String,
    pub creator: Creator,
    pub parent: Option<String>,
    pub locked: bool,
    pub children: Vec<TagNode>,
}

/// Nest a flat tag set under a synthetic root. Tags whose `parent` is unset
/// or names an id missing from the input hang directly off the root; child
/// order follows input order throughout.
pub fn materialize_tree(tags: &[Tag]) -> TagNode {
    let known: HashSet<&str> = tags.iter().map(|t| t.id.as_str()).collect();

    let mut buckets: IndexMap<&str, Vec<&Tag>> = IndexMap::new();
    let mut top_level: Vec<&Tag> = Vec::new();

    for tag in tags {
        match tag.parent.as_deref().filter(|p| known.contains(p)) {
            Some(parent) => buckets.entry(parent).or_default().push(tag),
            None => top_level.push(tag),
        }
    }

    TagNode {
        id: ROOT_ID.to_string(),
        name: ROOT_NAME.to_string(),
        creator: Creator::User,
        parent: None,
        locked: false,
        children: top_level
            .into_iter()
            .map(|tag| build_node(tag, &buckets))
            .collect(),
    }
}

fn build_node(tag: &Tag, buckets: &IndexMap<&str, Vec<&Tag>>) -> TagNode {
    TagNode {
        id: tag.id.clone(),
        name: tag.name.clone(),
        creator: tag.creator,
        parent: tag.parent.clone(),
        locked: tag.locked,
        children: buckets
            .get(tag.id.as_str())
            .map(|kids| kids.iter().map(|kid| build_node(kid, buckets)).collect())
            .unwrap_or_default(),
    }
}

/// The tag itself plus everything transitively parented under it, in BFS
/// discovery order.
pub fn descendants(tag_id: &str, tags: &[Tag]) -> Result<Vec<String>> {
    if !tags.iter().any(|t| t.id == tag_id) {
        return Err(Error::NotFound(format!("tag {tag_id}")));
    }

    let mut found = vec![tag_id.to_string()];
    let mut seen: HashSet<String> = HashSet::from([tag_id.to_string()]);
    let mut queue = VecDeque::from([tag_id.to_string()]);

    while let Some(current) = queue.pop_front() {
        for tag in tags {
            if tag.parent.as_deref() == Some(current.as_str()) && seen.insert(tag.id.clone()) {
                found.push(tag.id.clone());
                queue.push_back(tag.id.clone());
            }
        }
    }

    Ok(found)
}

/// Delete a tag and its whole subtree, all-or-nothing: if any tag in the
/// subtree is locked, nothing is removed and the locked ids are reported.
pub fn delete_cascade(tag_id: &str, tags: &mut Vec<Tag>) -> Result<Vec<String>> {
    let doomed = descendants(tag_id, tags)?;
    let doomed_set: HashSet<&str> = doomed.iter().map(String::as_str).collect();

    let locked: Vec<String> = tags
        .iter()
        .filter(|t| t.locked && doomed_set.contains(t.id.as_str()))
        .map(|t| t.id.clone())
        .collect();
    if !locked.is_empty() {
        warn!(tag_id, blocking = ?locked, "cascade delete blocked by locked tags");
        return Err(Error::Locked { ids: locked });
    }

    tags.retain(|t| !doomed_set.contains(t.id.as_str()));
    Ok(doomed)
}
