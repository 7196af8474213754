//! Diplomacy relationship tracking
//!
//! Game events append typed bonus entries to the ledger of the player who
//! observed them. UI and AI code query the ledger for sentiment bands,
//! relation flags and labels.

pub mod bonus;
pub mod bonus_list;
pub mod expiry;
pub mod ledger;
pub mod liking;
pub mod relation;

pub use bonus::{BonusEntry, BonusKind};
pub use bonus_list::BonusList;
pub use expiry::{expire, ExpiryPolicy, LifetimePolicy};
pub use ledger::DiplomacyLedger;
pub use liking::Liking;
pub use relation::DiplomaticRelation;
