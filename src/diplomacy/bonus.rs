//! Diplomatic bonus kinds and the immutable entries recorded for them

use serde::{Deserialize, Serialize};

use crate::core::types::Turn;

/// Kind of diplomatic event, each with a fixed signed weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusKind {
    InWar,
    WarDeclaration,
    BorderCrossed,
    LongPeace,
    DiplomaticTrade,
    GivenValuableFree,
    SameRace,
    InTradeAlliance,
    InAlliance,
}

impl BonusKind {
    pub const ALL: [BonusKind; 9] = [
        BonusKind::InWar,
        BonusKind::WarDeclaration,
        BonusKind::BorderCrossed,
        BonusKind::LongPeace,
        BonusKind::DiplomaticTrade,
        BonusKind::GivenValuableFree,
        BonusKind::SameRace,
        BonusKind::InTradeAlliance,
        BonusKind::InAlliance,
    ];

    /// Contribution to the aggregate sentiment
    pub const fn weight(self) -> i32 {
        match self {
            BonusKind::InWar => -30,
            BonusKind::WarDeclaration => -15,
            BonusKind::BorderCrossed => -5,
            BonusKind::LongPeace => 1,
            BonusKind::DiplomaticTrade => 1,
            BonusKind::GivenValuableFree => 2,
            BonusKind::SameRace => 5,
            BonusKind::InTradeAlliance => 15,
            BonusKind::InAlliance => 30,
        }
    }

    /// Turns an entry of this kind stays relevant, `None` for permanent.
    ///
    /// Only consulted by an external expiry rule; the ledger never drops
    /// entries on its own.
    pub const fn default_lifetime(self) -> Option<Turn> {
        match self {
            BonusKind::WarDeclaration => Some(150),
            BonusKind::BorderCrossed => Some(20),
            BonusKind::DiplomaticTrade => Some(20),
            BonusKind::GivenValuableFree => Some(100),
            BonusKind::InWar
            | BonusKind::LongPeace
            | BonusKind::SameRace
            | BonusKind::InTradeAlliance
            | BonusKind::InAlliance => None,
        }
    }

    /// Standing states rather than one-off events
    pub const fn is_state(self) -> bool {
        matches!(
            self,
            BonusKind::InWar
                | BonusKind::LongPeace
                | BonusKind::SameRace
                | BonusKind::InTradeAlliance
                | BonusKind::InAlliance
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            BonusKind::InWar => "In war",
            BonusKind::WarDeclaration => "War declaration",
            BonusKind::BorderCrossed => "Border crossed",
            BonusKind::LongPeace => "Long peace",
            BonusKind::DiplomaticTrade => "Diplomatic trade",
            BonusKind::GivenValuableFree => "Given valuable for free",
            BonusKind::SameRace => "Same race",
            BonusKind::InTradeAlliance => "In trade alliance",
            BonusKind::InAlliance => "In alliance",
        }
    }
}

/// A single recorded diplomatic event. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEntry {
    pub kind: BonusKind,
    /// Turn the event was recorded on
    pub turn: Turn,
}

impl BonusEntry {
    pub fn new(kind: BonusKind, turn: Turn) -> Self {
        Self { kind, turn }
    }

    pub fn weight(&self) -> i32 {
        self.kind.weight()
    }

    /// Whether this entry is past its kind's lifetime at `current_turn`
    pub fn is_past_lifetime(&self, current_turn: Turn) -> bool {
        match self.kind.default_lifetime() {
            Some(lifetime) => current_turn.saturating_sub(self.turn) >= lifetime,
            None => false,
        }
    }
}
