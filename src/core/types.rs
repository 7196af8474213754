//! Core type definitions used throughout the codebase

/// Game turn counter
pub type Turn = u32;

/// Player slot as used by game index arithmetic.
///
/// Signed so that slot math which underflows stays representable; negative
/// slots are simply out of range for every ledger.
pub type PlayerIndex = i32;

/// Hard upper bound on players in one game
pub const MAX_PLAYERS: usize = 16;

/// Convert a player slot into a vector index if it lies in `[0, size)`
pub fn slot_in_range(index: PlayerIndex, size: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < size)
}
