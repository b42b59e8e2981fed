//! Invited-participant selection.
//!
//! The presentation layer owns which roster members are invited to the
//! meeting being planned; the engine only ever sees the already-filtered
//! list. Every mutation here is O(1) and idempotent, and the selection never
//! mutates the roster itself.

use std::collections::HashSet;

use crate::participant::Participant;

/// The set of invited participant ids, maintained by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvitedSet {
    ids: HashSet<String>,
}

impl InvitedSet {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection with every roster member invited.
    pub fn all(roster: &[Participant]) -> Self {
        Self {
            ids: roster.iter().map(|p| p.id.clone()).collect(),
        }
    }

    /// Invite an id. Returns `true` if it was not already invited.
    pub fn invite(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Remove an id from the selection. Returns `true` if it was invited.
    pub fn uninvite(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip one id's invited state.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Whether the id is currently invited.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether every member of `roster` is invited (the "toggle all" state;
    /// false for an empty roster).
    pub fn all_invited(&self, roster: &[Participant]) -> bool {
        !roster.is_empty() && roster.iter().all(|p| self.ids.contains(&p.id))
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of invited ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The invited subset of `roster`, preserving roster order. This is the
    /// list handed to [`crate::overlap::find_overlap_slots`]. Ids with no
    /// matching roster member are ignored.
    pub fn selected(&self, roster: &[Participant]) -> Vec<Participant> {
        roster
            .iter()
            .filter(|p| self.ids.contains(&p.id))
            .cloned()
            .collect()
    }
}
