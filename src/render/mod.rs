//! Display helpers for diplomacy state
//!
//! This module is READ-ONLY - it never modifies a ledger.

pub mod colors;

use serde::Serialize;

use crate::core::types::PlayerIndex;
use crate::diplomacy::{BonusEntry, DiplomacyLedger, DiplomaticRelation, Liking};

pub use colors::{liking_as_color, liking_as_string, Color, Palette};

/// Lightweight snapshot of one relationship for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationRow {
    pub player: PlayerIndex,
    pub sentiment: i32,
    pub liking: Liking,
    pub liking_label: String,
    pub color: Color,
    pub relation: DiplomaticRelation,
    pub border_trespasser: bool,
}

/// Collects a row for every populated slot into a reusable buffer.
pub fn collect_relation_rows(
    ledger: &DiplomacyLedger,
    palette: &Palette,
    buffer: &mut Vec<RelationRow>,
) {
    buffer.clear();

    for (player, list) in ledger.others() {
        let liking = ledger.liking(player);
        buffer.push(RelationRow {
            player,
            sentiment: list.sentiment(),
            liking,
            liking_label: palette.label(liking).to_string(),
            color: palette.color(liking),
            relation: ledger.diplomatic_relation(player),
            border_trespasser: ledger.is_multiple_border_crossing(player),
        });
    }
}

/// One-line description of a recorded event, e.g. `turn 5: War declaration (-15)`
pub fn describe_entry(entry: &BonusEntry) -> String {
    format!(
        "turn {}: {} ({:+})",
        entry.turn,
        entry.kind.name(),
        entry.weight()
    )
}
