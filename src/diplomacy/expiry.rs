//! Turn-based expiry of transient bonuses
//!
//! The ledger itself only accumulates. Expiry is a rule owned by the turn
//! driver: it builds replacement lists and swaps them in with `set_list`.

use crate::core::types::{PlayerIndex, Turn};

use super::bonus::BonusEntry;
use super::bonus_list::BonusList;
use super::ledger::DiplomacyLedger;

/// Decides whether an entry should be dropped at a given turn
pub trait ExpiryPolicy {
    fn is_expired(&self, entry: &BonusEntry, current_turn: Turn) -> bool;
}

/// Expires entries after their kind's default lifetime
#[derive(Debug, Clone, Copy, Default)]
pub struct LifetimePolicy;

impl ExpiryPolicy for LifetimePolicy {
    fn is_expired(&self, entry: &BonusEntry, current_turn: Turn) -> bool {
        entry.is_past_lifetime(current_turn)
    }
}

/// Replace every list in `ledger` with one missing the expired entries.
///
/// Returns the number of entries dropped. Lists with nothing expired are
/// left untouched.
pub fn expire<P: ExpiryPolicy>(
    ledger: &mut DiplomacyLedger,
    policy: &P,
    current_turn: Turn,
) -> usize {
    let replacements: Vec<(PlayerIndex, BonusList, usize)> = ledger
        .others()
        .filter_map(|(index, list)| {
            let kept: Vec<BonusEntry> = list
                .iter()
                .filter(|e| !policy.is_expired(e, current_turn))
                .copied()
                .collect();
            let dropped = list.len() - kept.len();
            (dropped > 0).then(|| {
                let replacement = BonusList::with_entries(list.player_index, kept);
                (index, replacement, dropped)
            })
        })
        .collect();

    let mut total = 0;
    for (index, list, dropped) in replacements {
        tracing::debug!(index, dropped, turn = current_turn, "expired diplomacy bonuses");
        ledger.set_list(list, index);
        total += dropped;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diplomacy::bonus::BonusKind;

    #[test]
    fn test_expire_drops_only_past_lifetime() {
        let mut ledger = DiplomacyLedger::new(3, 0);
        ledger.record(1, BonusEntry::new(BonusKind::BorderCrossed, 0));
        ledger.record(1, BonusEntry::new(BonusKind::BorderCrossed, 15));
        ledger.record(1, BonusEntry::new(BonusKind::InWar, 0));
        ledger.record(2, BonusEntry::new(BonusKind::GivenValuableFree, 0));

        let dropped = expire(&mut ledger, &LifetimePolicy, 20);
        assert_eq!(dropped, 1);

        let list = ledger.list(1).unwrap();
        assert_eq!(list.count_kind(BonusKind::BorderCrossed), 1);
        assert!(list.has_kind(BonusKind::InWar));
        assert_eq!(ledger.list(2).unwrap().len(), 1);
    }

    #[test]
    fn test_expire_with_custom_policy() {
        struct DropAll;
        impl ExpiryPolicy for DropAll {
            fn is_expired(&self, _entry: &BonusEntry, _turn: Turn) -> bool {
                true
            }
        }

        let mut ledger = DiplomacyLedger::new(2, 1);
        ledger.record(0, BonusEntry::new(BonusKind::InAlliance, 3));
        assert_eq!(expire(&mut ledger, &DropAll, 3), 1);
        assert!(ledger.list(0).unwrap().is_empty());
        assert!(ledger.list(1).is_none());
    }
}
