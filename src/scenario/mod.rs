//! Scripted diplomatic event feeds
//!
//! A scenario replays a list of diplomatic events into one player's ledger.
//! It stands in for the game-event layer in the demo binary and tests.

pub mod loader;

pub use loader::{Scenario, ScenarioEvent};
