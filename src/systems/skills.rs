//! Data-driven skill definitions.
//!
//! Active skills produce a [`SkillModifier`] that overrides one attack
//! resolution (or a timed buff); passive skills permanently adjust base
//! stats, subject to hard caps.

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::combatant::Combatant;
use crate::constants::*;

/// Identifier for an active, player-invocable skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SkillId {
    PowerStrike,
    PiercingThrust,
    Whirlwind,
    Execute,
    ChainLightning,
    ShieldBlock,
}

/// Bonus damage applied when the defender is below a health fraction.
#[derive(Debug, Clone, Copy)]
pub struct ExecuteBonus {
    pub threshold: f64,
    pub multiplier: f64,
}

/// Transient overrides a skill supplies to a single attack resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillModifier {
    pub damage_multiplier: Option<f64>,
    pub ignore_defense: bool,
    /// Hits every living enemy within this Manhattan radius of the player.
    pub aoe_radius: Option<i32>,
    pub execute: Option<ExecuteBonus>,
    /// Additional visible enemies struck after the primary target.
    pub chain_targets: usize,
}

/// What invoking a skill does: a modified attack, or a timed self-buff.
#[derive(Debug, Clone, Copy)]
pub enum SkillKind {
    Attack(SkillModifier),
    Buff { damage_reduction: f64, duration: u32 },
}

impl SkillId {
    pub fn kind(&self) -> SkillKind {
        match self {
            SkillId::PowerStrike => SkillKind::Attack(SkillModifier {
                damage_multiplier: Some(POWER_STRIKE_MULTIPLIER),
                ..Default::default()
            }),
            SkillId::PiercingThrust => SkillKind::Attack(SkillModifier {
                ignore_defense: true,
                ..Default::default()
            }),
            SkillId::Whirlwind => SkillKind::Attack(SkillModifier {
                damage_multiplier: Some(WHIRLWIND_MULTIPLIER),
                aoe_radius: Some(WHIRLWIND_RADIUS),
                ..Default::default()
            }),
            SkillId::Execute => SkillKind::Attack(SkillModifier {
                damage_multiplier: Some(EXECUTE_MULTIPLIER),
                execute: Some(ExecuteBonus {
                    threshold: EXECUTE_THRESHOLD,
                    multiplier: EXECUTE_BONUS_MULTIPLIER,
                }),
                ..Default::default()
            }),
            SkillId::ChainLightning => SkillKind::Attack(SkillModifier {
                damage_multiplier: Some(CHAIN_LIGHTNING_MULTIPLIER),
                chain_targets: CHAIN_LIGHTNING_TARGETS,
                ..Default::default()
            }),
            SkillId::ShieldBlock => SkillKind::Buff {
                damage_reduction: SHIELD_BLOCK_REDUCTION,
                duration: SHIELD_BLOCK_DURATION,
            },
        }
    }

    /// Cooldown in turns after invocation.
    pub fn cooldown(&self) -> u32 {
        match self {
            SkillId::PowerStrike => POWER_STRIKE_COOLDOWN,
            SkillId::PiercingThrust => PIERCING_THRUST_COOLDOWN,
            SkillId::Whirlwind => WHIRLWIND_COOLDOWN,
            SkillId::Execute => EXECUTE_COOLDOWN,
            SkillId::ChainLightning => CHAIN_LIGHTNING_COOLDOWN,
            SkillId::ShieldBlock => SHIELD_BLOCK_COOLDOWN,
        }
    }
}

/// Passive skills: permanent additive stat adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PassiveSkill {
    CriticalMastery,
    DeadlyPrecision,
    IronSkin,
    Vitality,
    Vampirism,
    StoneForm,
    Regeneration,
    /// Once per floor, survive a lethal hit at 1 health.
    LastStand,
}

/// Apply one instance of a passive to a combatant's base stats.
/// Percent-based stats are capped; repeated application never exceeds
/// the caps.
pub fn apply_passive(combatant: &mut Combatant, passive: PassiveSkill) {
    match passive {
        PassiveSkill::CriticalMastery => {
            combatant.crit_chance =
                (combatant.crit_chance + CRITICAL_MASTERY_CRIT_CHANCE).min(CRIT_CHANCE_CAP);
        }
        PassiveSkill::DeadlyPrecision => {
            combatant.crit_damage += DEADLY_PRECISION_CRIT_DAMAGE;
        }
        PassiveSkill::IronSkin => {
            combatant.defense += IRON_SKIN_DEFENSE;
        }
        PassiveSkill::Vitality => {
            combatant.max_health += VITALITY_MAX_HEALTH;
            combatant.health += VITALITY_MAX_HEALTH;
        }
        PassiveSkill::Vampirism => {
            combatant.lifesteal = (combatant.lifesteal + VAMPIRISM_LIFESTEAL).min(LIFESTEAL_CAP);
        }
        PassiveSkill::StoneForm => {
            combatant.damage_reduction =
                (combatant.damage_reduction + STONE_FORM_DAMAGE_REDUCTION).min(DAMAGE_REDUCTION_CAP);
        }
        PassiveSkill::Regeneration => {
            combatant.regeneration += REGENERATION_PER_TURN;
        }
        // Tracked by the game facade, no stat change
        PassiveSkill::LastStand => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crit_chance_never_exceeds_cap() {
        let mut player = Combatant::player(0, 0);
        for _ in 0..40 {
            apply_passive(&mut player, PassiveSkill::CriticalMastery);
        }
        assert!(player.crit_chance <= CRIT_CHANCE_CAP);
        assert_eq!(player.crit_chance, CRIT_CHANCE_CAP);
    }

    #[test]
    fn test_damage_reduction_capped_at_ninety_percent() {
        let mut player = Combatant::player(0, 0);
        for _ in 0..20 {
            apply_passive(&mut player, PassiveSkill::StoneForm);
        }
        assert!(player.damage_reduction <= DAMAGE_REDUCTION_CAP);
    }

    #[test]
    fn test_lifesteal_capped() {
        let mut player = Combatant::player(0, 0);
        for _ in 0..30 {
            apply_passive(&mut player, PassiveSkill::Vampirism);
        }
        assert!(player.lifesteal <= LIFESTEAL_CAP);
    }

    #[test]
    fn test_vitality_raises_current_and_max_health() {
        let mut player = Combatant::player(0, 0);
        let before = player.max_health;
        apply_passive(&mut player, PassiveSkill::Vitality);
        assert_eq!(player.max_health, before + VITALITY_MAX_HEALTH);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn test_whirlwind_is_an_aoe_attack() {
        match SkillId::Whirlwind.kind() {
            SkillKind::Attack(m) => {
                assert_eq!(m.aoe_radius, Some(WHIRLWIND_RADIUS));
                assert!(m.damage_multiplier.is_some());
            }
            SkillKind::Buff { .. } => panic!("whirlwind must be an attack"),
        }
    }

    #[test]
    fn test_shield_block_is_a_buff() {
        match SkillId::ShieldBlock.kind() {
            SkillKind::Buff { damage_reduction, duration } => {
                assert_eq!(damage_reduction, SHIELD_BLOCK_REDUCTION);
                assert_eq!(duration, SHIELD_BLOCK_DURATION);
            }
            SkillKind::Attack(_) => panic!("shield block must be a buff"),
        }
    }
}
