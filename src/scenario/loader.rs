//! Load scenarios from TOML files

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::config;
use crate::core::error::{DiplomacyError, Result};
use crate::core::types::{slot_in_range, PlayerIndex, Turn, MAX_PLAYERS};
use crate::diplomacy::{expire, BonusEntry, BonusKind, DiplomacyLedger, LifetimePolicy};

/// One diplomatic event seen by the scenario's owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEvent {
    pub turn: Turn,
    /// Player the event concerns
    pub with: PlayerIndex,
    pub kind: BonusKind,
    /// Skip the event if the kind is already recorded for that player
    #[serde(default)]
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Falls back to the global config when omitted
    #[serde(default)]
    pub max_players: Option<usize>,
    pub owner: PlayerIndex,
    #[serde(default)]
    pub current_turn: Turn,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a scenario from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn player_count(&self) -> usize {
        self.max_players.unwrap_or_else(|| config().max_players)
    }

    /// Check the owner and every event target against the player count
    pub fn validate(&self) -> Result<()> {
        let players = self.player_count();
        if !(2..=MAX_PLAYERS).contains(&players) {
            return Err(DiplomacyError::InvalidScenario(format!(
                "max_players ({}) must be between 2 and {}",
                players, MAX_PLAYERS
            )));
        }

        if slot_in_range(self.owner, players).is_none() {
            return Err(DiplomacyError::InvalidScenario(format!(
                "owner {} is not a player slot",
                self.owner
            )));
        }

        for (i, event) in self.events.iter().enumerate() {
            if event.with == self.owner || slot_in_range(event.with, players).is_none() {
                return Err(DiplomacyError::InvalidScenario(format!(
                    "event {} targets invalid player {}",
                    i, event.with
                )));
            }
        }

        Ok(())
    }

    /// Record every event into `ledger`, returning how many were kept
    pub fn replay_into(&self, ledger: &mut DiplomacyLedger) -> usize {
        let mut recorded = 0;
        for event in &self.events {
            let entry = BonusEntry::new(event.kind, event.turn);
            let added = if event.unique {
                ledger.record_unique(event.with, entry)
            } else {
                ledger.record(event.with, entry)
            };
            if added {
                recorded += 1;
            }
        }
        recorded
    }

    /// Fresh ledger for the owner with all events replayed
    pub fn build_ledger(&self) -> DiplomacyLedger {
        let mut ledger = DiplomacyLedger::new(self.player_count(), self.owner);
        let recorded = self.replay_into(&mut ledger);
        tracing::debug!(
            owner = self.owner,
            recorded,
            total = self.events.len(),
            "scenario replayed"
        );
        ledger
    }

    /// Like `build_ledger`, then expires transient bonuses at `current_turn`
    pub fn build_expired_ledger(&self) -> DiplomacyLedger {
        let mut ledger = self.build_ledger();
        expire(&mut ledger, &LifetimePolicy, self.current_turn);
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        max_players = 3
        owner = 0
        current_turn = 30

        [[events]]
        turn = 1
        with = 1
        kind = "BORDER_CROSSED"

        [[events]]
        turn = 2
        with = 1
        kind = "IN_WAR"
        unique = true

        [[events]]
        turn = 3
        with = 1
        kind = "IN_WAR"
        unique = true

        [[events]]
        turn = 4
        with = 2
        kind = "LONG_PEACE"
    "#;

    #[test]
    fn test_parse_and_replay() {
        let scenario = Scenario::parse_toml(SAMPLE).unwrap();
        assert_eq!(scenario.events.len(), 4);
        assert!(scenario.events[1].unique);
        assert!(!scenario.events[0].unique);

        let mut ledger = DiplomacyLedger::new(3, 0);
        assert_eq!(scenario.replay_into(&mut ledger), 3);
        assert_eq!(ledger.list(1).unwrap().count_kind(BonusKind::InWar), 1);
        assert!(ledger.is_peace(2));
    }

    #[test]
    fn test_expired_ledger_drops_old_crossings() {
        let scenario = Scenario::parse_toml(SAMPLE).unwrap();
        let ledger = scenario.build_expired_ledger();
        assert_eq!(ledger.list(1).unwrap().count_kind(BonusKind::BorderCrossed), 0);
        assert!(ledger.is_war(1));
    }

    #[test]
    fn test_rejects_events_about_owner() {
        let err = Scenario::parse_toml(
            r#"
            max_players = 2
            owner = 1

            [[events]]
            turn = 1
            with = 1
            kind = "IN_WAR"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, DiplomacyError::InvalidScenario(_)));
    }

    #[test]
    fn test_rejects_owner_out_of_range() {
        let err = Scenario::parse_toml("max_players = 2\nowner = 2").unwrap_err();
        assert!(matches!(err, DiplomacyError::InvalidScenario(_)));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let err = Scenario::parse_toml(
            r#"
            max_players = 2
            owner = 0

            [[events]]
            turn = 1
            with = 1
            kind = "SPACE_PIRACY"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, DiplomacyError::TomlError(_)));
    }
}
