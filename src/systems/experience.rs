//! Experience, leveling and milestone rewards.

use serde::Serialize;

use crate::combatant::Combatant;
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};

/// Player meta-progression alongside the Combatant record.
#[derive(Debug, Clone)]
pub struct Progression {
    pub level: u32,
    pub experience: u32,
    pub skill_points: u32,
    pub gold: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            skill_points: 0,
            gold: 0,
        }
    }
}

/// XP needed to advance past the given level.
pub fn xp_for_level(level: u32) -> u32 {
    level * XP_PER_LEVEL_MULTIPLIER
}

/// Record of one level gained.
#[derive(Debug, Clone, Serialize)]
pub struct LevelUpReport {
    pub new_level: u32,
    pub health_increase: i32,
    pub attack_increase: i32,
    pub defense_increase: i32,
    pub skill_points_gained: u32,
    pub is_milestone: bool,
}

/// Apply defeat rewards to the player. Level-ups cascade: a large grant can
/// advance several levels in one call, the remainder carrying over each
/// time. Any level gained restores health to the new maximum.
pub fn apply_rewards(
    player: &mut Combatant,
    progression: &mut Progression,
    experience: u32,
    gold: u32,
    events: &mut EventQueue,
) -> Vec<LevelUpReport> {
    progression.experience += experience;
    progression.gold += gold;

    let mut reports = Vec::new();
    while progression.experience >= xp_for_level(progression.level) {
        progression.experience -= xp_for_level(progression.level);
        progression.level += 1;

        let report = level_up(player, progression.level);
        progression.skill_points += report.skill_points_gained;
        events.push(GameEvent::LevelUp {
            new_level: report.new_level,
            is_milestone: report.is_milestone,
        });
        reports.push(report);
    }

    if !reports.is_empty() {
        player.health = player.max_health;
    }

    reports
}

/// Apply the stat increases for reaching `new_level`. Every 5th level is a
/// milestone with amplified increases and an extra skill point.
fn level_up(player: &mut Combatant, new_level: u32) -> LevelUpReport {
    let is_milestone = new_level % MILESTONE_INTERVAL == 0;
    let completed_tiers = (new_level / MILESTONE_INTERVAL) as i32;

    let health_increase = LEVEL_HEALTH_INCREASE
        + TIER_HEALTH_BONUS * completed_tiers
        + if is_milestone { MILESTONE_HEALTH_BONUS } else { 0 };
    let attack_increase =
        LEVEL_ATTACK_INCREASE + if is_milestone { MILESTONE_ATTACK_BONUS } else { 0 };
    let defense_increase =
        LEVEL_DEFENSE_INCREASE + if is_milestone { MILESTONE_DEFENSE_BONUS } else { 0 };
    let skill_points_gained = if is_milestone {
        MILESTONE_SKILL_POINTS
    } else {
        LEVEL_SKILL_POINTS
    };

    player.max_health += health_increase;
    player.attack += attack_increase;
    player.defense += defense_increase;

    LevelUpReport {
        new_level,
        health_increase,
        attack_increase,
        defense_increase,
        skill_points_gained,
        is_milestone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_curve() {
        assert_eq!(xp_for_level(1), 100);
        assert_eq!(xp_for_level(2), 200);
        assert_eq!(xp_for_level(7), 700);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut player = Combatant::player(0, 0);
        let mut progression = Progression::default();
        let mut events = EventQueue::new();

        player.apply_damage(40);
        let reports = apply_rewards(&mut player, &mut progression, 250, 0, &mut events);

        assert_eq!(reports.len(), 1);
        assert_eq!(progression.level, 2);
        assert_eq!(progression.experience, 150);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn test_large_grant_cascades_multiple_levels() {
        let mut player = Combatant::player(0, 0);
        let mut progression = Progression::default();
        let mut events = EventQueue::new();

        // 100 + 200 + 50 leftover
        let reports = apply_rewards(&mut player, &mut progression, 350, 0, &mut events);
        assert_eq!(reports.len(), 2);
        assert_eq!(progression.level, 3);
        assert_eq!(progression.experience, 50);
    }

    #[test]
    fn test_no_level_up_below_requirement() {
        let mut player = Combatant::player(0, 0);
        let mut progression = Progression::default();
        let mut events = EventQueue::new();

        let reports = apply_rewards(&mut player, &mut progression, 99, 25, &mut events);
        assert!(reports.is_empty());
        assert_eq!(progression.level, 1);
        assert_eq!(progression.experience, 99);
        assert_eq!(progression.gold, 25);
        assert!(events.is_empty());
    }

    #[test]
    fn test_milestone_level_grants_amplified_rewards() {
        let mut player = Combatant::player(0, 0);
        let mut progression = Progression {
            level: 4,
            ..Default::default()
        };
        let mut events = EventQueue::new();

        let reports = apply_rewards(&mut player, &mut progression, 400, 0, &mut events);
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.new_level, 5);
        assert!(report.is_milestone);
        // 20 base + 5 per completed tier (1) + 15 milestone bonus
        assert_eq!(report.health_increase, 40);
        assert_eq!(report.attack_increase, 3);
        assert_eq!(report.defense_increase, 2);
        assert_eq!(report.skill_points_gained, 2);
    }

    #[test]
    fn test_regular_level_grants_one_skill_point() {
        let mut player = Combatant::player(0, 0);
        let mut progression = Progression::default();
        let mut events = EventQueue::new();

        let reports = apply_rewards(&mut player, &mut progression, 100, 0, &mut events);
        assert_eq!(reports[0].skill_points_gained, 1);
        assert!(!reports[0].is_milestone);
        assert_eq!(reports[0].health_increase, 20);
        assert_eq!(progression.skill_points, 1);
    }
}
