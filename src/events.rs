//! Game event stream for the presentation layer.
//!
//! Core systems emit events as they resolve; the consuming shell drains
//! them to drive messages, effects and UI without coupling to the core.

use serde::Serialize;

/// Events the core emits during a turn.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// One attack exchange resolved
    AttackHit {
        attacker_id: u32,
        target_id: u32,
        damage: i32,
        is_crit: bool,
    },
    /// An enemy was reduced to zero health
    EnemyDefeated {
        id: u32,
        experience: u32,
        gold: u32,
    },
    /// The player was reduced to zero health
    PlayerDied,
    /// The player's Last Stand passive absorbed a lethal hit
    LastStandTriggered,
    /// The player reached a new level
    LevelUp {
        new_level: u32,
        is_milestone: bool,
    },
    /// A boss crossed its enrage threshold
    BossEnraged {
        id: u32,
    },
    /// The player opened a chest
    ChestOpened {
        x: i32,
        y: i32,
        gold: u32,
    },
    /// The player descended to a new floor
    FloorEntered {
        floor: u32,
    },
}

/// Simple event queue - events are pushed during a turn, drained by the
/// presentation layer afterwards.
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
