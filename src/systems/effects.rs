//! Timed buffs and per-turn upkeep.

use crate::combatant::Combatant;

/// What a buff does while active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuffKind {
    /// Incoming damage reduced by this fraction before it reaches health.
    ShieldBlock { damage_reduction: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct ActiveBuff {
    pub kind: BuffKind,
    pub remaining_turns: u32,
}

/// Active buffs on one combatant. Durations tick down once per turn.
#[derive(Debug, Default)]
pub struct StatusEffects {
    buffs: Vec<ActiveBuff>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a buff, refreshing the duration if the same kind is already up.
    pub fn add(&mut self, kind: BuffKind, duration: u32) {
        if let Some(existing) = self.buffs.iter_mut().find(|b| b.kind == kind) {
            existing.remaining_turns = duration;
        } else {
            self.buffs.push(ActiveBuff {
                kind,
                remaining_turns: duration,
            });
        }
    }

    /// The active shield-block reduction fraction, if any.
    pub fn shield_block_reduction(&self) -> Option<f64> {
        self.buffs.iter().find_map(|b| match b.kind {
            BuffKind::ShieldBlock { damage_reduction } => Some(damage_reduction),
        })
    }

    /// Decrement all durations by one turn, dropping expired buffs.
    pub fn tick(&mut self) {
        for buff in &mut self.buffs {
            buff.remaining_turns = buff.remaining_turns.saturating_sub(1);
        }
        self.buffs.retain(|b| b.remaining_turns > 0);
    }

    pub fn clear(&mut self) {
        self.buffs.clear();
    }
}

/// Per-turn regeneration upkeep for one combatant.
pub fn regenerate(combatant: &mut Combatant) {
    if combatant.alive && combatant.regeneration > 0 {
        combatant.heal(combatant.regeneration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buff_expires_after_duration() {
        let mut effects = StatusEffects::new();
        effects.add(BuffKind::ShieldBlock { damage_reduction: 0.5 }, 2);
        assert_eq!(effects.shield_block_reduction(), Some(0.5));

        effects.tick();
        assert_eq!(effects.shield_block_reduction(), Some(0.5));
        effects.tick();
        assert_eq!(effects.shield_block_reduction(), None);
    }

    #[test]
    fn test_reapplying_buff_refreshes_duration() {
        let mut effects = StatusEffects::new();
        effects.add(BuffKind::ShieldBlock { damage_reduction: 0.5 }, 3);
        effects.tick();
        effects.tick();
        effects.add(BuffKind::ShieldBlock { damage_reduction: 0.5 }, 3);
        effects.tick();
        effects.tick();
        assert_eq!(effects.shield_block_reduction(), Some(0.5));
    }

    #[test]
    fn test_regeneration_heals_up_to_max() {
        let mut player = Combatant::player(0, 0);
        player.regeneration = 3;
        player.apply_damage(5);
        regenerate(&mut player);
        assert_eq!(player.health, player.max_health - 2);
        regenerate(&mut player);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn test_dead_combatants_do_not_regenerate() {
        let mut player = Combatant::player(0, 0);
        player.regeneration = 3;
        player.apply_damage(1000);
        regenerate(&mut player);
        assert_eq!(player.health, 0);
        assert!(!player.alive);
    }
}
