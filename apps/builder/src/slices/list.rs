//! Shared add/update/remove semantics for the id-keyed list sections.
//!
//! Identifiers are unique within a list: `add` ignores an entry whose id is
//! already present, so `update` (first match) and `remove` (every match) agree
//! for any list built through these functions. `remove` still drops every
//! match to clean up duplicates loaded from older snapshots.

use tracing::warn;

use crate::model::Identified;

/// Appends `entry` unless an element with the same id exists.
pub fn add<T: Identified + Clone>(mut list: Vec<T>, entry: &T) -> Vec<T> {
    if list.iter().any(|e| e.id() == entry.id()) {
        warn!("Ignoring add of duplicate entry id '{}'", entry.id());
        return list;
    }
    list.push(entry.clone());
    list
}

/// Replaces the first element sharing `entry`'s id, keeping its position.
pub fn update<T: Identified + Clone>(mut list: Vec<T>, entry: &T) -> Vec<T> {
    if let Some(slot) = list.iter_mut().find(|e| e.id() == entry.id()) {
        *slot = entry.clone();
    }
    list
}

/// Drops every element with the given id.
pub fn remove<T: Identified>(mut list: Vec<T>, id: &str) -> Vec<T> {
    list.retain(|e| e.id() != id);
    list
}
