//! Shared entity state for the player and enemies.
//!
//! A [`Combatant`] is a plain data record: AI behavior is selected by the
//! [`Archetype`] tag and dispatched in [`crate::systems::ai`] rather than
//! carried as methods on the entity itself. All construction goes through
//! the validating constructors here, so combat math can assume well-formed
//! numeric fields.

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::constants::*;

/// Behavioral tag selecting an enemy's AI decision function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Aggressive,
    Ranged,
    Defensive,
    Magical,
    Boss,
}

/// Boss-only tactical state, advanced by the boss AI each decision call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BossState {
    pub turn_count: u32,
    pub enrage_triggered: bool,
}

/// A player or enemy on the grid.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub id: u32,
    pub name: &'static str,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    /// Action rate: lower speed means the entity acts on fewer turns.
    pub speed: f64,
    pub crit_chance: f64,
    pub crit_damage: f64,
    pub lifesteal: f64,
    pub damage_reduction: f64,
    /// Health regained at the start of each turn.
    pub regeneration: i32,
    pub alive: bool,
    /// None for the player.
    pub archetype: Option<Archetype>,
    pub xp_reward: u32,
    pub gold_reward: u32,
    /// Present only for boss-archetype enemies.
    pub boss_state: Option<BossState>,
}

impl Combatant {
    /// Create a player combatant. Stats are clamped into sane ranges so
    /// downstream math never sees negative attack or zero max health.
    pub fn player(x: i32, y: i32) -> Self {
        Self::with_stats(
            0,
            "player",
            x,
            y,
            PLAYER_START_HEALTH,
            PLAYER_START_ATTACK,
            PLAYER_START_DEFENSE,
            1.0,
            None,
        )
    }

    /// Create an enemy combatant of the given archetype.
    #[allow(clippy::too_many_arguments)]
    pub fn enemy(
        id: u32,
        name: &'static str,
        archetype: Archetype,
        x: i32,
        y: i32,
        max_health: i32,
        attack: i32,
        defense: i32,
        speed: f64,
        xp_reward: u32,
        gold_reward: u32,
    ) -> Self {
        let mut combatant = Self::with_stats(
            id,
            name,
            x,
            y,
            max_health,
            attack,
            defense,
            speed,
            Some(archetype),
        );
        combatant.xp_reward = xp_reward;
        combatant.gold_reward = gold_reward;
        if archetype == Archetype::Boss {
            combatant.boss_state = Some(BossState::default());
        }
        combatant
    }

    #[allow(clippy::too_many_arguments)]
    fn with_stats(
        id: u32,
        name: &'static str,
        x: i32,
        y: i32,
        max_health: i32,
        attack: i32,
        defense: i32,
        speed: f64,
        archetype: Option<Archetype>,
    ) -> Self {
        let max_health = max_health.max(1);
        Self {
            id,
            name,
            x,
            y,
            health: max_health,
            max_health,
            attack: attack.max(0),
            defense: defense.max(0),
            speed: speed.max(0.0),
            crit_chance: DEFAULT_CRIT_CHANCE,
            crit_damage: DEFAULT_CRIT_DAMAGE,
            lifesteal: 0.0,
            damage_reduction: 0.0,
            regeneration: 0,
            alive: true,
            archetype,
            xp_reward: 0,
            gold_reward: 0,
            boss_state: None,
        }
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn health_fraction(&self) -> f64 {
        self.health as f64 / self.max_health as f64
    }

    /// Reduce health, never below zero. Reaching zero marks the combatant
    /// not alive.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Restore health, capped at max.
    pub fn heal(&mut self, amount: i32) {
        if self.alive {
            self.health = (self.health + amount.max(0)).min(self.max_health);
        }
    }
}
