//! Star Diplomacy - relationship ledger for a turn-based space strategy game

pub mod core;
pub mod diplomacy;
pub mod render;
pub mod scenario;
