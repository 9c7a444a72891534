//! Attack resolution and the damage pipeline.
//!
//! `resolve_attack` is the single damage formula shared by both sides:
//! variance band, optional skill multiplier, crit roll, defense subtraction,
//! damage-reduction scaling, and a hard floor of 1. The directional wrappers
//! layer on lifesteal, defeat rewards, the shield-block buff and Last Stand.

use rand::Rng;
use serde::Serialize;

use crate::combatant::Combatant;
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::systems::effects::StatusEffects;
use crate::systems::skills::SkillModifier;

/// The raw result of one attack resolution.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttackOutcome {
    pub damage: i32,
    pub is_crit: bool,
}

/// Human-readable record of one resolved exchange, for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct CombatReport {
    pub damage: i32,
    pub is_crit: bool,
    pub message: String,
    pub defeated: bool,
    pub experience: Option<u32>,
    pub gold: Option<u32>,
}

/// Resolve one attack. Damage is always at least 1, no matter how high the
/// defender's defense or damage reduction.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    modifier: Option<&SkillModifier>,
    rng: &mut impl Rng,
) -> AttackOutcome {
    let base = attacker.attack;
    let variance = (base as f64 * DAMAGE_VARIANCE_FRACTION).floor() as i32;
    let raw = base + rng.gen_range(0..=variance) - variance / 2;

    let mut modified = match modifier.and_then(|m| m.damage_multiplier) {
        Some(mult) => (raw as f64 * mult).floor() as i32,
        None => raw,
    };

    if let Some(exec) = modifier.and_then(|m| m.execute) {
        if defender.health_fraction() < exec.threshold {
            modified = (modified as f64 * exec.multiplier).floor() as i32;
        }
    }

    let is_crit = rng.gen::<f64>() < attacker.crit_chance;
    let crit_adjusted = if is_crit {
        (modified as f64 * attacker.crit_damage).floor() as i32
    } else {
        modified
    };

    let effective_defense = if modifier.is_some_and(|m| m.ignore_defense) {
        0
    } else {
        defender.defense
    };
    let post_defense = (crit_adjusted - effective_defense).max(DAMAGE_FLOOR);

    let final_damage = if defender.damage_reduction > 0.0 {
        (post_defense as f64 * (1.0 - defender.damage_reduction)).floor() as i32
    } else {
        post_defense
    };

    AttackOutcome {
        damage: final_damage.max(DAMAGE_FLOOR),
        is_crit,
    }
}

/// Resolve a player attack against one enemy: applies lifesteal to the
/// player and, on defeat, reports the enemy's experience and gold rewards.
pub fn player_attacks_enemy(
    player: &mut Combatant,
    enemy: &mut Combatant,
    modifier: Option<&SkillModifier>,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) -> CombatReport {
    let outcome = resolve_attack(player, enemy, modifier, rng);
    enemy.apply_damage(outcome.damage);

    if player.lifesteal > 0.0 {
        player.heal((outcome.damage as f64 * player.lifesteal).floor() as i32);
    }

    events.push(GameEvent::AttackHit {
        attacker_id: player.id,
        target_id: enemy.id,
        damage: outcome.damage,
        is_crit: outcome.is_crit,
    });

    let defeated = !enemy.alive;
    let message = if defeated {
        events.push(GameEvent::EnemyDefeated {
            id: enemy.id,
            experience: enemy.xp_reward,
            gold: enemy.gold_reward,
        });
        format!(
            "You {} the {} for {} damage, defeating it!",
            hit_verb(outcome.is_crit),
            enemy.name,
            outcome.damage
        )
    } else {
        format!(
            "You {} the {} for {} damage.",
            hit_verb(outcome.is_crit),
            enemy.name,
            outcome.damage
        )
    };

    CombatReport {
        damage: outcome.damage,
        is_crit: outcome.is_crit,
        message,
        defeated,
        experience: defeated.then_some(enemy.xp_reward),
        gold: defeated.then_some(enemy.gold_reward),
    }
}

/// Resolve an enemy attack against the player: the shield-block buff scales
/// the damage down first, and an unused Last Stand converts a lethal hit
/// into survival at 1 health.
pub fn enemy_attacks_player(
    enemy: &Combatant,
    player: &mut Combatant,
    player_buffs: &StatusEffects,
    last_stand_ready: &mut bool,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) -> CombatReport {
    let outcome = resolve_attack(enemy, player, None, rng);

    let damage = match player_buffs.shield_block_reduction() {
        Some(reduction) => (outcome.damage as f64 * (1.0 - reduction)).floor() as i32,
        None => outcome.damage,
    };

    let mut last_stand_fired = false;
    if player.health - damage <= 0 && *last_stand_ready {
        player.health = 1;
        *last_stand_ready = false;
        last_stand_fired = true;
        events.push(GameEvent::LastStandTriggered);
    } else {
        player.apply_damage(damage);
        if !player.alive {
            events.push(GameEvent::PlayerDied);
        }
    }

    events.push(GameEvent::AttackHit {
        attacker_id: enemy.id,
        target_id: player.id,
        damage,
        is_crit: outcome.is_crit,
    });

    let message = if last_stand_fired {
        format!(
            "The {} hits you for {} damage - you barely hold on!",
            enemy.name, damage
        )
    } else {
        format!(
            "The {} {}s you for {} damage.",
            enemy.name,
            hit_verb(outcome.is_crit),
            damage
        )
    };

    CombatReport {
        damage,
        is_crit: outcome.is_crit,
        message,
        defeated: !player.alive,
        experience: None,
        gold: None,
    }
}

fn hit_verb(is_crit: bool) -> &'static str {
    if is_crit {
        "critically hit"
    } else {
        "hit"
    }
}
