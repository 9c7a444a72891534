//! The turn-driven game facade.
//!
//! Owns the grid, the enemy roster and the player, and exposes the command
//! surface the presentation shell drives: movement intents, attack/skill/
//! item/flee commands, turn advancement, and read-only snapshots. All
//! randomness flows through one seeded generator so a whole run is
//! reproducible from its seed.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::combatant::Combatant;
use crate::constants::*;
use crate::dungeon_gen::DungeonGenerator;
use crate::events::{EventQueue, GameEvent};
use crate::grid::GridMap;
use crate::pathfinding::{can_see, manhattan_distance, valid_moves};
use crate::queries;
use crate::spawning::spawn_roster;
use crate::systems::ai;
use crate::systems::combat::{self, CombatReport};
use crate::systems::effects::{regenerate, BuffKind, StatusEffects};
use crate::systems::experience::{apply_rewards, LevelUpReport, Progression};
use crate::systems::skills::{apply_passive, PassiveSkill, SkillId, SkillKind, SkillModifier};
use crate::tile::Tile;

/// Command-boundary failures. Gameplay-internal faults (blocked moves,
/// degenerate generation) are handled silently and never reach here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the player is dead")]
    PlayerDead,
    #[error("no enemy is adjacent")]
    NoAdjacentTarget,
    #[error("{0} is still on cooldown")]
    SkillOnCooldown(SkillId),
    #[error("no such item in the inventory")]
    ItemNotHeld,
    #[error("no skill points available")]
    NoSkillPoints,
}

/// Consumable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    HealthPotion,
}

/// Per-enemy read-only view for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub id: u32,
    pub name: &'static str,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
}

/// Player read-only view.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub max_health: i32,
    pub level: u32,
    pub experience: u32,
    pub skill_points: u32,
    pub gold: u32,
}

pub struct Game {
    grid: GridMap,
    roster: Vec<Combatant>,
    player: Combatant,
    progression: Progression,
    buffs: StatusEffects,
    cooldowns: HashMap<SkillId, u32>,
    passives: Vec<PassiveSkill>,
    inventory: Vec<ItemKind>,
    floor: u32,
    turn: u32,
    last_stand_ready: bool,
    level_ups: Vec<LevelUpReport>,
    width: usize,
    height: usize,
    next_enemy_id: u32,
    events: EventQueue,
    rng: ChaCha8Rng,
}

impl Game {
    /// Start a new run on floor 1 with a reproducible seed.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        let mut game = Self {
            grid: GridMap::filled_with_walls(width, height),
            roster: Vec::new(),
            player: Combatant::player(1, 1),
            progression: Progression::default(),
            buffs: StatusEffects::new(),
            cooldowns: HashMap::new(),
            passives: Vec::new(),
            inventory: vec![ItemKind::HealthPotion],
            floor: 1,
            turn: 0,
            last_stand_ready: false,
            level_ups: Vec::new(),
            width,
            height,
            next_enemy_id: 1,
            events: EventQueue::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.generate_floor();
        game
    }

    /// Generate the current floor: fresh grid, fresh roster, player moved
    /// to the start tile, per-floor state reset.
    fn generate_floor(&mut self) {
        let result = DungeonGenerator::generate(self.width, self.height, &mut self.rng);

        let spawns: Vec<_> = result
            .enemy_spawns
            .iter()
            .copied()
            .filter(|&p| p != result.player_start)
            .collect();
        self.roster = spawn_roster(&spawns, self.floor, self.next_enemy_id, &mut self.rng);
        self.next_enemy_id += self.roster.len() as u32;

        self.grid = result.grid;
        self.player.x = result.player_start.0;
        self.player.y = result.player_start.1;
        self.buffs.clear();
        self.last_stand_ready = self.passives.contains(&PassiveSkill::LastStand);
        self.events.push(GameEvent::FloorEntered { floor: self.floor });
        debug!(floor = self.floor, enemies = self.roster.len(), "entered floor");
    }

    // ------------------------------------------------------------------
    // Player commands
    // ------------------------------------------------------------------

    /// Attempt a unit step in a cardinal direction. Invalid targets
    /// (out of bounds, wall, occupied by a living enemy) are rejected
    /// silently: the position is unchanged and false is returned.
    pub fn movement_intent(&mut self, dx: i32, dy: i32) -> bool {
        if !self.player.alive || dx.abs() + dy.abs() != 1 {
            return false;
        }
        let dest = (self.player.x + dx, self.player.y + dy);
        if !self.grid.is_walkable(dest.0, dest.1) {
            return false;
        }
        if queries::enemy_at(&self.roster, dest).is_some() {
            return false;
        }
        self.player.x = dest.0;
        self.player.y = dest.1;
        true
    }

    /// Attack the first cardinally adjacent living enemy.
    pub fn attack_command(&mut self) -> Result<CombatReport, GameError> {
        if !self.player.alive {
            return Err(GameError::PlayerDead);
        }
        let target = *queries::adjacent_enemies(&self.player, &self.roster)
            .first()
            .ok_or(GameError::NoAdjacentTarget)?;

        let report = combat::player_attacks_enemy(
            &mut self.player,
            &mut self.roster[target],
            None,
            &mut self.rng,
            &mut self.events,
        );
        self.collect_rewards(&report);
        self.roster.retain(|e| e.alive);
        Ok(report)
    }

    /// Invoke an active skill: a buff applies to the player, an attack
    /// skill resolves against the adjacent target (plus AOE and chain
    /// victims where the skill has them).
    pub fn use_skill_command(&mut self, skill: SkillId) -> Result<Vec<CombatReport>, GameError> {
        if !self.player.alive {
            return Err(GameError::PlayerDead);
        }
        if self.cooldowns.get(&skill).copied().unwrap_or(0) > 0 {
            return Err(GameError::SkillOnCooldown(skill));
        }

        let reports = match skill.kind() {
            SkillKind::Buff { damage_reduction, duration } => {
                self.buffs.add(BuffKind::ShieldBlock { damage_reduction }, duration);
                Vec::new()
            }
            SkillKind::Attack(modifier) => self.resolve_skill_attack(&modifier)?,
        };

        self.cooldowns.insert(skill, skill.cooldown());
        self.roster.retain(|e| e.alive);
        Ok(reports)
    }

    fn resolve_skill_attack(
        &mut self,
        modifier: &SkillModifier,
    ) -> Result<Vec<CombatReport>, GameError> {
        let primary = *queries::adjacent_enemies(&self.player, &self.roster)
            .first()
            .ok_or(GameError::NoAdjacentTarget)?;

        let mut hit: Vec<usize> = vec![primary];
        if let Some(radius) = modifier.aoe_radius {
            for (i, e) in self.roster.iter().enumerate() {
                if i != primary
                    && e.alive
                    && manhattan_distance(self.player.pos(), e.pos()) <= radius
                {
                    hit.push(i);
                }
            }
        }
        if modifier.chain_targets > 0 {
            let mut extra: Vec<(i32, usize)> = self
                .roster
                .iter()
                .enumerate()
                .filter(|(i, e)| {
                    !hit.contains(i) && e.alive && can_see(self.player.pos(), e.pos(), &self.grid)
                })
                .map(|(i, e)| (manhattan_distance(self.player.pos(), e.pos()), i))
                .collect();
            extra.sort();
            hit.extend(extra.into_iter().take(modifier.chain_targets).map(|(_, i)| i));
        }

        let mut reports = Vec::new();
        for idx in hit {
            let report = combat::player_attacks_enemy(
                &mut self.player,
                &mut self.roster[idx],
                Some(modifier),
                &mut self.rng,
                &mut self.events,
            );
            self.collect_rewards(&report);
            reports.push(report);
        }
        Ok(reports)
    }

    /// Consume an item from the inventory.
    pub fn use_item_command(&mut self, item: ItemKind) -> Result<(), GameError> {
        if !self.player.alive {
            return Err(GameError::PlayerDead);
        }
        let slot = self
            .inventory
            .iter()
            .position(|&held| held == item)
            .ok_or(GameError::ItemNotHeld)?;
        self.inventory.remove(slot);

        match item {
            ItemKind::HealthPotion => self.player.heal(HEALTH_POTION_HEAL),
        }
        Ok(())
    }

    /// Step away from the nearest living enemy. Fails (returns false,
    /// position unchanged) when no step strictly increases the distance.
    pub fn flee_command(&mut self) -> bool {
        if !self.player.alive {
            return false;
        }
        let Some(nearest) = queries::nearest_enemy(&self.player, &self.roster) else {
            return false;
        };
        let threat = self.roster[nearest].pos();
        let occupied = queries::occupied_positions(&self.roster, None);
        let moves = valid_moves(self.player.pos(), &self.grid, &occupied);

        match ai::greedy_away(threat, &moves) {
            Some(dest)
                if manhattan_distance(dest, threat)
                    > manhattan_distance(self.player.pos(), threat) =>
            {
                self.player.x = dest.0;
                self.player.y = dest.1;
                true
            }
            _ => false,
        }
    }

    /// Spend a skill point on a passive.
    pub fn learn_passive(&mut self, passive: PassiveSkill) -> Result<(), GameError> {
        if self.progression.skill_points == 0 {
            return Err(GameError::NoSkillPoints);
        }
        self.progression.skill_points -= 1;
        self.passives.push(passive);
        apply_passive(&mut self.player, passive);
        if passive == PassiveSkill::LastStand {
            self.last_stand_ready = true;
        }
        Ok(())
    }

    /// Open the chest on or next to the player, turning the tile to floor
    /// and yielding gold. Returns None if no chest is in reach.
    pub fn open_chest_at(&mut self, x: i32, y: i32) -> Option<u32> {
        if self.grid.get(x, y) != Some(Tile::Chest)
            || manhattan_distance(self.player.pos(), (x, y)) > 1
        {
            return None;
        }
        self.grid.set(x, y, Tile::Floor);
        let gold = self.rng.gen_range(CHEST_GOLD_MIN..=CHEST_GOLD_MAX);
        self.progression.gold += gold;
        self.events.push(GameEvent::ChestOpened { x, y, gold });
        Some(gold)
    }

    pub fn player_on_stairs(&self) -> bool {
        self.grid.get(self.player.x, self.player.y) == Some(Tile::Stairs)
    }

    /// Descend to the next floor; only valid while standing on stairs.
    pub fn descend(&mut self) -> bool {
        if !self.player.alive || !self.player_on_stairs() {
            return false;
        }
        self.floor += 1;
        self.generate_floor();
        true
    }

    // ------------------------------------------------------------------
    // Turn advancement
    // ------------------------------------------------------------------

    /// Advance one turn: upkeep (regeneration, buff and cooldown ticks),
    /// one AI decision pass over the living roster, then attacks from
    /// enemies adjacent to the player. Returns the exchanges resolved.
    pub fn advance_turn(&mut self) -> Vec<CombatReport> {
        self.turn += 1;

        self.buffs.tick();
        for cd in self.cooldowns.values_mut() {
            *cd = cd.saturating_sub(1);
        }
        regenerate(&mut self.player);
        for enemy in &mut self.roster {
            regenerate(enemy);
        }

        self.run_ai_pass();

        let mut reports = Vec::new();
        for i in 0..self.roster.len() {
            if !self.player.alive {
                break;
            }
            if self.roster[i].alive
                && manhattan_distance(self.roster[i].pos(), self.player.pos()) == 1
            {
                reports.push(combat::enemy_attacks_player(
                    &self.roster[i],
                    &mut self.player,
                    &self.buffs,
                    &mut self.last_stand_ready,
                    &mut self.rng,
                    &mut self.events,
                ));
            }
        }

        self.roster.retain(|e| e.alive);
        reports
    }

    /// Decide every enemy's move against the positions fixed at the start
    /// of the pass, then commit moves one by one, rejecting any destination
    /// that has become occupied. This keeps AI behavior independent of
    /// roster iteration order.
    fn run_ai_pass(&mut self) {
        let player_pos = self.player.pos();
        let turn = self.turn;

        let mut decisions: Vec<(usize, (i32, i32))> = Vec::new();
        for i in 0..self.roster.len() {
            if !self.roster[i].alive {
                continue;
            }
            let mut occupied = queries::occupied_positions(&self.roster, Some(self.roster[i].id));
            occupied.insert(player_pos);

            let decision = ai::decide(
                &mut self.roster[i],
                &self.grid,
                &occupied,
                player_pos,
                turn,
                &mut self.rng,
                &mut self.events,
            );
            if let Some(dest) = decision {
                decisions.push((i, dest));
            }
        }

        for (i, dest) in decisions {
            let occupied_now = queries::occupied_positions(&self.roster, Some(self.roster[i].id));
            if dest != player_pos
                && !occupied_now.contains(&dest)
                && self.grid.is_walkable(dest.0, dest.1)
            {
                self.roster[i].x = dest.0;
                self.roster[i].y = dest.1;
            }
        }
    }

    fn collect_rewards(&mut self, report: &CombatReport) {
        if let (Some(xp), Some(gold)) = (report.experience, report.gold) {
            let level_ups = apply_rewards(
                &mut self.player,
                &mut self.progression,
                xp,
                gold,
                &mut self.events,
            );
            self.level_ups.extend(level_ups);
        }
    }

    // ------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------

    pub fn grid_snapshot(&self) -> Vec<Vec<Tile>> {
        self.grid.snapshot()
    }

    pub fn roster_snapshot(&self) -> Vec<EnemyView> {
        self.roster
            .iter()
            .map(|e| EnemyView {
                id: e.id,
                name: e.name,
                x: e.x,
                y: e.y,
                health: e.health,
                max_health: e.max_health,
                alive: e.alive,
            })
            .collect()
    }

    pub fn player_view(&self) -> PlayerView {
        PlayerView {
            x: self.player.x,
            y: self.player.y,
            health: self.player.health,
            max_health: self.player.max_health,
            level: self.progression.level,
            experience: self.progression.experience,
            skill_points: self.progression.skill_points,
            gold: self.progression.gold,
        }
    }

    /// Level-up records accumulated since the last call.
    pub fn take_level_ups(&mut self) -> Vec<LevelUpReport> {
        std::mem::take(&mut self.level_ups)
    }

    /// Drain pending events for the presentation layer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        !self.player.alive
    }

    pub fn add_item(&mut self, item: ItemKind) {
        self.inventory.push(item);
    }

    pub fn inventory(&self) -> &[ItemKind] {
        &self.inventory
    }
}
