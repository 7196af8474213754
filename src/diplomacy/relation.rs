//! Descriptive diplomatic relation between two players

use serde::{Deserialize, Serialize};

pub const PEACE: &str = "Peace";
pub const TRADE_ALLIANCE: &str = "Trade alliance";
pub const ALLIANCE: &str = "Alliance";
pub const WAR: &str = "War";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiplomaticRelation {
    #[default]
    None,
    Peace,
    TradeAlliance,
    Alliance,
    War,
}

impl DiplomaticRelation {
    /// Display label; empty when no relation applies
    pub fn label(self) -> &'static str {
        match self {
            DiplomaticRelation::None => "",
            DiplomaticRelation::Peace => PEACE,
            DiplomaticRelation::TradeAlliance => TRADE_ALLIANCE,
            DiplomaticRelation::Alliance => ALLIANCE,
            DiplomaticRelation::War => WAR,
        }
    }
}

impl std::fmt::Display for DiplomaticRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
