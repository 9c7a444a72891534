//! Data-driven enemy definitions and roster instantiation.
//!
//! Enemy types are plain data, so adding a new one means adding a constant,
//! not new spawning code. Base stats scale up with the floor number.

use rand::Rng;

use crate::combatant::{Archetype, Combatant};
use crate::constants::*;

/// Definition of an enemy type - all the data needed to spawn one.
#[derive(Clone, Copy)]
pub struct EnemyDef {
    pub name: &'static str,
    pub archetype: Archetype,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: f64,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl EnemyDef {
    /// Instantiate this enemy at a position, scaled for the given floor.
    pub fn instantiate(&self, id: u32, x: i32, y: i32, floor: u32) -> Combatant {
        let depth = floor.saturating_sub(1) as f64;
        let health = (self.health as f64 * (1.0 + FLOOR_HEALTH_SCALING * depth)) as i32;
        let attack = (self.attack as f64 * (1.0 + FLOOR_ATTACK_SCALING * depth)) as i32;
        Combatant::enemy(
            id,
            self.name,
            self.archetype,
            x,
            y,
            health,
            attack,
            self.defense,
            self.speed,
            self.xp_reward,
            self.gold_reward,
        )
    }
}

/// Predefined enemy types.
pub mod enemies {
    use super::*;

    pub const BRUTE: EnemyDef = EnemyDef {
        name: "brute",
        archetype: Archetype::Aggressive,
        health: AGGRESSIVE_HEALTH,
        attack: AGGRESSIVE_ATTACK,
        defense: AGGRESSIVE_DEFENSE,
        speed: AGGRESSIVE_SPEED,
        xp_reward: AGGRESSIVE_XP,
        gold_reward: AGGRESSIVE_GOLD,
    };

    pub const ARCHER: EnemyDef = EnemyDef {
        name: "archer",
        archetype: Archetype::Ranged,
        health: RANGED_HEALTH,
        attack: RANGED_ATTACK,
        defense: RANGED_DEFENSE,
        speed: RANGED_SPEED,
        xp_reward: RANGED_XP,
        gold_reward: RANGED_GOLD,
    };

    pub const GUARDIAN: EnemyDef = EnemyDef {
        name: "guardian",
        archetype: Archetype::Defensive,
        health: DEFENSIVE_HEALTH,
        attack: DEFENSIVE_ATTACK,
        defense: DEFENSIVE_DEFENSE,
        speed: DEFENSIVE_SPEED,
        xp_reward: DEFENSIVE_XP,
        gold_reward: DEFENSIVE_GOLD,
    };

    pub const WARLOCK: EnemyDef = EnemyDef {
        name: "warlock",
        archetype: Archetype::Magical,
        health: MAGICAL_HEALTH,
        attack: MAGICAL_ATTACK,
        defense: MAGICAL_DEFENSE,
        speed: MAGICAL_SPEED,
        xp_reward: MAGICAL_XP,
        gold_reward: MAGICAL_GOLD,
    };

    pub const WARDEN: EnemyDef = EnemyDef {
        name: "warden",
        archetype: Archetype::Boss,
        health: BOSS_HEALTH,
        attack: BOSS_ATTACK,
        defense: BOSS_DEFENSE,
        speed: BOSS_SPEED,
        xp_reward: BOSS_XP,
        gold_reward: BOSS_GOLD,
    };

    pub const REGULARS: [EnemyDef; 4] = [BRUTE, ARCHER, GUARDIAN, WARLOCK];
}

/// Build the enemy roster for a floor from the generator's spawn points.
///
/// At most [`ROSTER_CAP`] spawn points are used; every 5th floor replaces
/// the first spawn with a boss. Duplicate spawn coordinates (which the
/// generator never produces, but the contract does not promise) are skipped
/// so no two enemies ever share a tile.
pub fn spawn_roster(
    spawn_points: &[(i32, i32)],
    floor: u32,
    first_id: u32,
    rng: &mut impl Rng,
) -> Vec<Combatant> {
    let mut roster = Vec::new();
    let mut used = std::collections::HashSet::new();
    let boss_floor = floor % BOSS_FLOOR_INTERVAL == 0;

    for (i, &(x, y)) in spawn_points.iter().take(ROSTER_CAP).enumerate() {
        if !used.insert((x, y)) {
            continue;
        }
        let def = if boss_floor && i == 0 {
            enemies::WARDEN
        } else {
            enemies::REGULARS[rng.gen_range(0..enemies::REGULARS.len())]
        };
        roster.push(def.instantiate(first_id + i as u32, x, y, floor));
    }

    roster
}
