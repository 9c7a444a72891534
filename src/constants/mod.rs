//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod combat;
mod dungeon;
mod enemies;
mod gameplay;
mod skills;

// Re-export all constants at the module level
pub use combat::*;
pub use dungeon::*;
pub use enemies::*;
pub use gameplay::*;
pub use skills::*;
