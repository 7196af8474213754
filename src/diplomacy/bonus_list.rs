//! Ordered bonus entries a ledger keeps about one other player

use serde::{Deserialize, Serialize};

use crate::core::types::PlayerIndex;

use super::bonus::{BonusEntry, BonusKind};

/// Bonus entries about a single other player, in recording order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusList {
    /// Slot of the player these entries are about
    pub player_index: PlayerIndex,
    entries: Vec<BonusEntry>,
}

impl BonusList {
    pub fn new(player_index: PlayerIndex) -> Self {
        Self {
            player_index,
            entries: Vec::new(),
        }
    }

    pub fn with_entries(player_index: PlayerIndex, entries: Vec<BonusEntry>) -> Self {
        Self {
            player_index,
            entries,
        }
    }

    /// Append an entry
    pub fn push(&mut self, entry: BonusEntry) {
        self.entries.push(entry);
    }

    /// Append an entry unless one of the same kind is already present.
    ///
    /// Returns true if the entry was added.
    pub fn push_unique(&mut self, entry: BonusEntry) -> bool {
        if self.has_kind(entry.kind) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn has_kind(&self, kind: BonusKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    pub fn count_kind(&self, kind: BonusKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Sum of all entry weights
    pub fn sentiment(&self) -> i32 {
        self.entries.iter().map(BonusEntry::weight).sum()
    }

    pub fn get(&self, i: usize) -> Option<&BonusEntry> {
        self.entries.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BonusEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
