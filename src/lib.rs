//! Turn-based dungeon crawler core.
//!
//! Pure game logic with no rendering or input handling: procedural floor
//! generation, archetype-driven enemy AI, combat resolution and player
//! progression, all behind the [`Game`] facade. A presentation shell drives
//! it through commands and reads back snapshots and events.
//!
//! Every run is deterministic given its seed: all randomness flows through
//! one seeded generator owned by the [`Game`].

pub mod combatant;
pub mod constants;
pub mod dungeon_gen;
pub mod events;
pub mod game;
pub mod grid;
pub mod pathfinding;
pub mod queries;
pub mod spawning;
pub mod systems;
pub mod tile;

pub use combatant::{Archetype, Combatant};
pub use dungeon_gen::{DungeonGenerator, DungeonResult};
pub use events::GameEvent;
pub use game::{EnemyView, Game, GameError, ItemKind, PlayerView};
pub use grid::GridMap;
pub use systems::combat::CombatReport;
pub use systems::experience::LevelUpReport;
pub use systems::skills::{PassiveSkill, SkillId};
pub use tile::Tile;
