//! Per-player diplomacy ledger
//!
//! One ledger belongs to one player and keeps a `BonusList` for every other
//! player slot. All queries fail to a default on a bad slot: predicates give
//! false, liking gives `Liking::Neutral`, list lookups give `None`.
//! `try_list` is the strict variant for callers that want the reason.

use serde::{Deserialize, Serialize};

use crate::core::error::{DiplomacyError, Result};
use crate::core::types::{slot_in_range, PlayerIndex};

use super::bonus::{BonusEntry, BonusKind};
use super::bonus_list::BonusList;
use super::liking::Liking;
use super::relation::DiplomaticRelation;

/// More border crossings than this counts as repeated trespassing
const MULTIPLE_BORDER_CROSSINGS: usize = 2;

/// Bonus lists one player keeps about every other player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLedger")]
pub struct DiplomacyLedger {
    /// Owning player's slot; `None` for a shell ledger filled via `set_list`
    owner: Option<PlayerIndex>,
    lists: Vec<Option<BonusList>>,
}

/// Unchecked serialized form, validated into a `DiplomacyLedger`
#[derive(Deserialize)]
struct RawLedger {
    owner: Option<PlayerIndex>,
    lists: Vec<Option<BonusList>>,
}

impl TryFrom<RawLedger> for DiplomacyLedger {
    type Error = DiplomacyError;

    /// Rejects a populated owner slot and lists filed under the wrong slot
    fn try_from(raw: RawLedger) -> Result<Self> {
        let size = raw.lists.len();
        let owner_slot = raw.owner.and_then(|o| slot_in_range(o, size));

        for (i, list) in raw.lists.iter().enumerate() {
            let Some(list) = list else { continue };
            if owner_slot == Some(i) {
                return Err(DiplomacyError::InvalidLedger(format!(
                    "owner slot {} holds a bonus list",
                    i
                )));
            }
            if list.player_index != i as PlayerIndex {
                return Err(DiplomacyError::InvalidLedger(format!(
                    "slot {} holds the list for player {}",
                    i, list.player_index
                )));
            }
        }

        Ok(Self {
            owner: raw.owner,
            lists: raw.lists,
        })
    }
}

impl DiplomacyLedger {
    /// Ledger for `owner` with an empty list for every other slot
    pub fn new(max_players: usize, owner: PlayerIndex) -> Self {
        let lists = (0..max_players)
            .map(|i| {
                if slot_in_range(owner, max_players) == Some(i) {
                    None
                } else {
                    Some(BonusList::new(i as PlayerIndex))
                }
            })
            .collect();
        Self {
            owner: Some(owner),
            lists,
        }
    }

    /// Ledger with `max_players` empty slots, populated later via `set_list`
    pub fn shell(max_players: usize) -> Self {
        Self {
            owner: None,
            lists: vec![None; max_players],
        }
    }

    pub fn owner(&self) -> Option<PlayerIndex> {
        self.owner
    }

    /// Number of player slots
    pub fn size(&self) -> usize {
        self.lists.len()
    }

    fn owner_slot(&self) -> Option<usize> {
        self.owner.and_then(|o| slot_in_range(o, self.lists.len()))
    }

    fn slot(&self, index: PlayerIndex) -> Option<&BonusList> {
        slot_in_range(index, self.lists.len()).and_then(|i| self.lists[i].as_ref())
    }

    /// Insert or replace the list at `index`.
    ///
    /// Out-of-range slots and the owner's own slot are ignored.
    pub fn set_list(&mut self, list: BonusList, index: PlayerIndex) {
        let Some(i) = slot_in_range(index, self.lists.len()) else {
            tracing::debug!(
                index,
                size = self.lists.len(),
                "set_list ignored: slot out of range"
            );
            return;
        };
        if self.owner_slot() == Some(i) {
            tracing::debug!(index, "set_list ignored: owner slot");
            return;
        }
        self.lists[i] = Some(list);
    }

    /// List for `index`, or `None` if the slot is invalid or unset
    pub fn list(&self, index: PlayerIndex) -> Option<&BonusList> {
        self.slot(index)
    }

    /// Alias of [`DiplomacyLedger::list`]
    pub fn diplomacy_list(&self, index: PlayerIndex) -> Option<&BonusList> {
        self.list(index)
    }

    pub fn list_mut(&mut self, index: PlayerIndex) -> Option<&mut BonusList> {
        let i = slot_in_range(index, self.lists.len())?;
        self.lists[i].as_mut()
    }

    /// Strict lookup reporting why a slot has no list
    pub fn try_list(&self, index: PlayerIndex) -> Result<&BonusList> {
        let size = self.lists.len();
        let i = slot_in_range(index, size)
            .ok_or(DiplomacyError::IndexOutOfRange { index, size })?;
        self.lists[i].as_ref().ok_or(DiplomacyError::EmptySlot(index))
    }

    /// Append an event about player `index`. Returns false if nothing was recorded.
    pub fn record(&mut self, index: PlayerIndex, entry: BonusEntry) -> bool {
        match self.list_mut(index) {
            Some(list) => {
                tracing::trace!(index, kind = ?entry.kind, turn = entry.turn, "bonus recorded");
                list.push(entry);
                true
            }
            None => {
                tracing::debug!(index, kind = ?entry.kind, "bonus dropped: no list for slot");
                false
            }
        }
    }

    /// Like `record`, but skips kinds already present for that player
    pub fn record_unique(&mut self, index: PlayerIndex, entry: BonusEntry) -> bool {
        self.list_mut(index)
            .map(|list| list.push_unique(entry))
            .unwrap_or(false)
    }

    /// Populated slots with their indices
    pub fn others(&self) -> impl Iterator<Item = (PlayerIndex, &BonusList)> {
        self.lists
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (i as PlayerIndex, l)))
    }

    /// Drop every entry, restoring the freshly constructed state
    pub fn reset(&mut self) {
        let size = self.lists.len();
        *self = match self.owner {
            Some(owner) => Self::new(size, owner),
            None => Self::shell(size),
        };
    }

    fn has_kind(&self, index: PlayerIndex, kind: BonusKind) -> bool {
        self.slot(index).is_some_and(|l| l.has_kind(kind))
    }

    pub fn is_war(&self, index: PlayerIndex) -> bool {
        self.has_kind(index, BonusKind::InWar)
    }

    pub fn is_peace(&self, index: PlayerIndex) -> bool {
        self.has_kind(index, BonusKind::LongPeace)
    }

    pub fn is_trade_alliance(&self, index: PlayerIndex) -> bool {
        self.has_kind(index, BonusKind::InTradeAlliance)
    }

    pub fn is_alliance(&self, index: PlayerIndex) -> bool {
        self.has_kind(index, BonusKind::InAlliance)
    }

    /// Summed weights for `index`, `None` if there is no list
    pub fn sentiment(&self, index: PlayerIndex) -> Option<i32> {
        self.slot(index).map(BonusList::sentiment)
    }

    /// How much the owner likes player `index`
    pub fn liking(&self, index: PlayerIndex) -> Liking {
        self.sentiment(index)
            .map(Liking::from_sentiment)
            .unwrap_or_default()
    }

    /// Relation with player `index`; later checks take precedence
    pub fn diplomatic_relation(&self, index: PlayerIndex) -> DiplomaticRelation {
        let mut result = DiplomaticRelation::None;
        if self.is_peace(index) {
            result = DiplomaticRelation::Peace;
        }
        if self.is_trade_alliance(index) {
            result = DiplomaticRelation::TradeAlliance;
        }
        if self.is_alliance(index) {
            result = DiplomaticRelation::Alliance;
        }
        if self.is_war(index) {
            result = DiplomaticRelation::War;
        }
        result
    }

    /// True if player `index` crossed the border more than twice
    pub fn is_multiple_border_crossing(&self, index: PlayerIndex) -> bool {
        self.slot(index)
            .is_some_and(|l| l.count_kind(BonusKind::BorderCrossed) > MULTIPLE_BORDER_CROSSINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: BonusKind) -> BonusEntry {
        BonusEntry::new(kind, 1)
    }

    #[test]
    fn test_new_leaves_owner_slot_empty() {
        let ledger = DiplomacyLedger::new(4, 2);
        assert_eq!(ledger.size(), 4);
        assert!(ledger.list(2).is_none());
        for i in [0, 1, 3] {
            let list = ledger.list(i).expect("other slots populated");
            assert!(list.is_empty());
            assert_eq!(list.player_index, i);
        }
    }

    #[test]
    fn test_shell_has_no_lists() {
        let ledger = DiplomacyLedger::shell(3);
        assert_eq!(ledger.size(), 3);
        assert!(ledger.owner().is_none());
        assert_eq!(ledger.others().count(), 0);
    }

    #[test]
    fn test_set_list_ignores_owner_slot() {
        let mut ledger = DiplomacyLedger::new(3, 0);
        ledger.set_list(BonusList::new(0), 0);
        assert!(ledger.list(0).is_none());
    }

    #[test]
    fn test_set_list_out_of_range_is_noop() {
        let mut ledger = DiplomacyLedger::shell(2);
        let mut list = BonusList::new(1);
        list.push(entry(BonusKind::InWar));
        ledger.set_list(list.clone(), 1);

        ledger.set_list(BonusList::new(5), 2);
        ledger.set_list(BonusList::new(5), -1);
        assert_eq!(ledger.list(1), Some(&list));
        assert_eq!(ledger.size(), 2);
    }

    #[test]
    fn test_record_into_missing_slot_fails() {
        let mut ledger = DiplomacyLedger::new(3, 1);
        assert!(!ledger.record(1, entry(BonusKind::InWar)));
        assert!(!ledger.record(7, entry(BonusKind::InWar)));
        assert!(ledger.record(2, entry(BonusKind::InWar)));
        assert!(ledger.is_war(2));
    }

    #[test]
    fn test_record_unique() {
        let mut ledger = DiplomacyLedger::new(2, 0);
        assert!(ledger.record_unique(1, entry(BonusKind::InAlliance)));
        assert!(!ledger.record_unique(1, entry(BonusKind::InAlliance)));
        assert_eq!(ledger.sentiment(1), Some(30));
    }

    #[test]
    fn test_try_list_reports_reason() {
        let ledger = DiplomacyLedger::new(3, 0);
        assert!(matches!(
            ledger.try_list(3),
            Err(DiplomacyError::IndexOutOfRange { index: 3, size: 3 })
        ));
        assert!(matches!(ledger.try_list(0), Err(DiplomacyError::EmptySlot(0))));
        assert!(ledger.try_list(1).is_ok());
    }

    #[test]
    fn test_predicates_not_exclusive() {
        let mut ledger = DiplomacyLedger::new(2, 0);
        ledger.record(1, entry(BonusKind::InTradeAlliance));
        ledger.record(1, entry(BonusKind::InAlliance));
        assert!(ledger.is_trade_alliance(1));
        assert!(ledger.is_alliance(1));
        assert!(!ledger.is_war(1));
        assert!(!ledger.is_peace(1));
        assert_eq!(ledger.diplomatic_relation(1), DiplomaticRelation::Alliance);
    }

    #[test]
    fn test_relation_precedence() {
        let mut ledger = DiplomacyLedger::new(2, 0);
        assert_eq!(ledger.diplomatic_relation(1), DiplomaticRelation::None);

        ledger.record(1, entry(BonusKind::LongPeace));
        assert_eq!(ledger.diplomatic_relation(1), DiplomaticRelation::Peace);

        ledger.record(1, entry(BonusKind::InTradeAlliance));
        assert_eq!(ledger.diplomatic_relation(1), DiplomaticRelation::TradeAlliance);

        ledger.record(1, entry(BonusKind::InWar));
        assert_eq!(ledger.diplomatic_relation(1), DiplomaticRelation::War);

        ledger.record(1, entry(BonusKind::InAlliance));
        assert_eq!(ledger.diplomatic_relation(1), DiplomaticRelation::War);
    }

    #[test]
    fn test_multiple_border_crossing_threshold() {
        let mut ledger = DiplomacyLedger::new(2, 0);
        for expected in [false, false, false, true, true] {
            assert_eq!(ledger.is_multiple_border_crossing(1), expected);
            ledger.record(1, entry(BonusKind::BorderCrossed));
        }
    }

    #[test]
    fn test_liking_defaults_to_neutral() {
        let mut ledger = DiplomacyLedger::new(2, 0);
        ledger.record(1, entry(BonusKind::InWar));
        assert_eq!(ledger.liking(1), Liking::Hate);
        assert_eq!(ledger.liking(0), Liking::Neutral);
        assert_eq!(ledger.liking(-3), Liking::Neutral);
        assert_eq!(ledger.liking(2), Liking::Neutral);
    }

    #[test]
    fn test_json_round_trip() {
        let mut ledger = DiplomacyLedger::new(3, 1);
        ledger.record(0, entry(BonusKind::BorderCrossed));
        let json = serde_json::to_string(&ledger).unwrap();
        let restored: DiplomacyLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_deserialize_rejects_populated_owner_slot() {
        let json = r#"{
            "owner": 0,
            "lists": [
                {"player_index": 0, "entries": [{"kind": "IN_WAR", "turn": 1}]},
                {"player_index": 1, "entries": []}
            ]
        }"#;
        let err = serde_json::from_str::<DiplomacyLedger>(json).unwrap_err();
        assert!(err.to_string().contains("owner slot 0"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_misfiled_list() {
        let json = r#"{
            "owner": 0,
            "lists": [null, {"player_index": 2, "entries": []}, null]
        }"#;
        let err = serde_json::from_str::<DiplomacyLedger>(json).unwrap_err();
        assert!(err.to_string().contains("slot 1"), "{}", err);
    }

    #[test]
    fn test_deserialize_shell_accepts_any_matching_slot() {
        let json = r#"{
            "owner": null,
            "lists": [{"player_index": 0, "entries": [{"kind": "IN_WAR", "turn": 4}]}, null]
        }"#;
        let ledger: DiplomacyLedger = serde_json::from_str(json).unwrap();
        assert!(ledger.is_war(0));
        assert!(ledger.list(1).is_none());
    }

    #[test]
    fn test_reset_restores_construction_mode() {
        let mut ledger = DiplomacyLedger::new(3, 1);
        ledger.record(0, entry(BonusKind::InWar));
        ledger.reset();
        assert_eq!(ledger, DiplomacyLedger::new(3, 1));

        let mut shell = DiplomacyLedger::shell(2);
        shell.set_list(BonusList::new(0), 0);
        shell.reset();
        assert_eq!(shell, DiplomacyLedger::shell(2));
    }
}
