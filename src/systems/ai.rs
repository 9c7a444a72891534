//! Enemy AI decision-making.
//!
//! Each archetype maps (grid, roster occupancy, player, turn counter) to a
//! destination tile or None to hold position. Decisions are pure apart from
//! the boss tactical counters stored on the combatant itself.

use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::combatant::{Archetype, Combatant};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::grid::GridMap;
use crate::pathfinding::{can_see, manhattan_distance, valid_moves};

/// Whether an entity with the given speed acts on this turn.
/// Lower speed means longer intervals between actions.
pub fn acts_this_turn(speed: f64, turn: u32) -> bool {
    let interval = (2.0 / speed.max(0.1)).ceil() as u32;
    turn % interval.max(1) == 0
}

/// Decide the tile `enemy` moves to this turn, or None to stay in place.
///
/// Boss tactical state (turn counter, enrage) advances on every call, before
/// the movement throttle is applied, so an enrage threshold crossed between
/// turns takes effect on the very next decision.
pub fn decide(
    enemy: &mut Combatant,
    grid: &GridMap,
    occupied: &HashSet<(i32, i32)>,
    player_pos: (i32, i32),
    turn: u32,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) -> Option<(i32, i32)> {
    let archetype = enemy.archetype?;

    if archetype == Archetype::Boss {
        advance_boss_state(enemy, events);
    }

    if !acts_this_turn(enemy.speed, turn) {
        return None;
    }

    let moves = valid_moves(enemy.pos(), grid, occupied);
    if moves.is_empty() {
        return None;
    }

    let visible = can_see(enemy.pos(), player_pos, grid);
    let distance = manhattan_distance(enemy.pos(), player_pos);
    trace!(id = enemy.id, %archetype, distance, visible, "ai decision");

    match archetype {
        Archetype::Aggressive => {
            if visible && distance <= AGGRESSIVE_RANGE {
                greedy_toward(player_pos, &moves)
            } else {
                random_move(&moves, rng)
            }
        }
        Archetype::Ranged => {
            if visible {
                if distance < RANGED_RETREAT_DISTANCE {
                    greedy_away(player_pos, &moves)
                } else if distance > RANGED_APPROACH_DISTANCE {
                    greedy_toward(player_pos, &moves)
                } else {
                    None
                }
            } else {
                random_move(&moves, rng)
            }
        }
        Archetype::Defensive => {
            if visible && distance <= DEFENSIVE_ENGAGE_DISTANCE {
                greedy_toward(player_pos, &moves)
            } else {
                None
            }
        }
        Archetype::Magical => {
            if visible && distance <= MAGICAL_RANGE {
                greedy_toward(player_pos, &moves)
            } else {
                random_move(&moves, rng)
            }
        }
        Archetype::Boss => decide_boss(enemy, player_pos, distance, &moves),
    }
}

/// Increment the boss turn counter and fire the one-time enrage trigger
/// once health drops below the threshold.
fn advance_boss_state(boss: &mut Combatant, events: &mut EventQueue) {
    let Some(mut state) = boss.boss_state else {
        // A boss without tactical state simply never maneuvers
        return;
    };
    state.turn_count += 1;

    if !state.enrage_triggered
        && (boss.health as f64) < boss.max_health as f64 * BOSS_ENRAGE_THRESHOLD
    {
        state.enrage_triggered = true;
        boss.attack = (boss.attack as f64 * BOSS_ENRAGE_MULTIPLIER) as i32;
        boss.speed *= BOSS_ENRAGE_MULTIPLIER;
        events.push(GameEvent::BossEnraged { id: boss.id });
    }

    boss.boss_state = Some(state);
}

/// Boss movement: hold beyond the active range; every third boss-turn try a
/// circling step perpendicular to the player vector, otherwise close in.
fn decide_boss(
    boss: &Combatant,
    player_pos: (i32, i32),
    distance: i32,
    moves: &[(i32, i32)],
) -> Option<(i32, i32)> {
    if distance > BOSS_ACTIVE_RANGE {
        return None;
    }

    let circling = boss
        .boss_state
        .map(|s| s.turn_count % BOSS_CIRCLE_INTERVAL == 0)
        .unwrap_or(false);

    if circling {
        let dx = player_pos.0 - boss.x;
        let dy = player_pos.1 - boss.y;
        let candidates = [(boss.x - dy, boss.y + dx), (boss.x + dy, boss.y - dx)];
        for candidate in candidates {
            if moves.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    greedy_toward(player_pos, moves)
}

/// First valid move with the strictly lowest Manhattan distance to target.
pub(crate) fn greedy_toward(target: (i32, i32), moves: &[(i32, i32)]) -> Option<(i32, i32)> {
    let mut best: Option<((i32, i32), i32)> = None;
    for &m in moves {
        let d = manhattan_distance(m, target);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((m, d));
        }
    }
    best.map(|(m, _)| m)
}

/// First valid move with the strictly highest Manhattan distance to target.
pub(crate) fn greedy_away(target: (i32, i32), moves: &[(i32, i32)]) -> Option<(i32, i32)> {
    let mut best: Option<((i32, i32), i32)> = None;
    for &m in moves {
        let d = manhattan_distance(m, target);
        if best.map_or(true, |(_, bd)| d > bd) {
            best = Some((m, d));
        }
    }
    best.map(|(m, _)| m)
}

fn random_move(moves: &[(i32, i32)], rng: &mut impl Rng) -> Option<(i32, i32)> {
    Some(moves[rng.gen_range(0..moves.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_grid(size: usize) -> GridMap {
        let mut grid = GridMap::filled_with_walls(size, size);
        for y in 1..size as i32 - 1 {
            for x in 1..size as i32 - 1 {
                grid.set(x, y, Tile::Floor);
            }
        }
        grid
    }

    fn enemy(archetype: Archetype, x: i32, y: i32) -> Combatant {
        Combatant::enemy(1, "test", archetype, x, y, 30, 8, 2, 1.0, 20, 10)
    }

    fn decide_on_acting_turn(
        e: &mut Combatant,
        grid: &GridMap,
        player_pos: (i32, i32),
        rng: &mut ChaCha8Rng,
    ) -> Option<(i32, i32)> {
        // Turn 2 satisfies the throttle for speed 1.0
        let mut events = EventQueue::new();
        decide(e, grid, &HashSet::new(), player_pos, 2, rng, &mut events)
    }

    #[test]
    fn test_speed_throttling() {
        // speed 1.0 -> acts every 2nd turn
        assert!(!acts_this_turn(1.0, 1));
        assert!(acts_this_turn(1.0, 2));
        // speed 2.0 -> acts every turn
        assert!(acts_this_turn(2.0, 1));
        assert!(acts_this_turn(2.0, 3));
        // speed 0.5 -> acts every 4th turn
        assert!(!acts_this_turn(0.5, 2));
        assert!(acts_this_turn(0.5, 4));
        // degenerate speed clamps instead of dividing by zero
        assert!(acts_this_turn(0.0, 20));
    }

    #[test]
    fn test_aggressive_steps_toward_visible_player() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Aggressive, 3, 5);
        let dest = decide_on_acting_turn(&mut e, &grid, (7, 5), &mut rng);
        assert_eq!(dest, Some((4, 5)));
    }

    #[test]
    fn test_aggressive_wanders_when_player_out_of_range() {
        let grid = open_grid(20);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Aggressive, 2, 2);
        // Distance 16, beyond pursuit range: still moves, but randomly
        let dest = decide_on_acting_turn(&mut e, &grid, (18, 2), &mut rng);
        let dest = dest.expect("wandering picks some valid move");
        assert_eq!(manhattan_distance(dest, (2, 2)), 1);
    }

    #[test]
    fn test_ranged_retreats_when_player_close() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Ranged, 5, 5);
        let dest = decide_on_acting_turn(&mut e, &grid, (6, 5), &mut rng);
        let dest = dest.expect("retreat move");
        assert!(manhattan_distance(dest, (6, 5)) > 1);
    }

    #[test]
    fn test_ranged_holds_at_preferred_distance() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Ranged, 5, 5);
        // Distance 3 is inside the hold band [2, 4]
        assert_eq!(decide_on_acting_turn(&mut e, &grid, (8, 5), &mut rng), None);
    }

    #[test]
    fn test_defensive_holds_until_player_is_close() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Defensive, 5, 5);
        assert_eq!(decide_on_acting_turn(&mut e, &grid, (9, 5), &mut rng), None);
        let dest = decide_on_acting_turn(&mut e, &grid, (7, 5), &mut rng);
        assert_eq!(dest, Some((6, 5)));
    }

    #[test]
    fn test_magical_pursues_at_extended_range() {
        let grid = open_grid(14);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Magical, 3, 5);
        // Distance 8: outside aggressive range but inside magical range
        let dest = decide_on_acting_turn(&mut e, &grid, (11, 5), &mut rng);
        assert_eq!(dest, Some((4, 5)));
    }

    #[test]
    fn test_occupied_tiles_are_never_chosen() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut e = enemy(Archetype::Aggressive, 3, 5);
        let occupied: HashSet<_> = [(4, 5)].into_iter().collect();
        let mut events = EventQueue::new();
        let dest = decide(&mut e, &grid, &occupied, (7, 5), 2, &mut rng, &mut events);
        assert_ne!(dest, Some((4, 5)));
    }

    #[test]
    fn test_boss_enrage_triggers_exactly_once() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = EventQueue::new();
        let mut boss = Combatant::enemy(9, "warden", Archetype::Boss, 3, 3, 120, 14, 4, 1.0, 150, 100);
        boss.health = 47; // 39.2% of max

        decide(&mut boss, &grid, &HashSet::new(), (8, 3), 1, &mut rng, &mut events);
        assert!(boss.boss_state.unwrap().enrage_triggered);
        assert_eq!(boss.attack, 21); // 14 * 1.5
        assert_eq!(boss.speed, 1.5);
        assert_eq!(events.drain().count(), 1);

        // Further calls must not stack the multiplier
        decide(&mut boss, &grid, &HashSet::new(), (8, 3), 2, &mut rng, &mut events);
        assert_eq!(boss.attack, 21);
        assert!(events.is_empty());
    }

    #[test]
    fn test_boss_holds_beyond_active_range() {
        let grid = open_grid(30);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = EventQueue::new();
        let mut boss = Combatant::enemy(9, "warden", Archetype::Boss, 2, 2, 120, 14, 4, 1.0, 150, 100);
        let dest = decide(&mut boss, &grid, &HashSet::new(), (20, 20), 2, &mut rng, &mut events);
        assert_eq!(dest, None);
        // The counter still advances while holding
        assert_eq!(boss.boss_state.unwrap().turn_count, 1);
    }

    #[test]
    fn test_boss_circles_on_third_turn() {
        let grid = open_grid(12);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = EventQueue::new();
        // Speed 2.0 so the boss acts every turn
        let mut boss = Combatant::enemy(9, "warden", Archetype::Boss, 5, 5, 120, 14, 4, 2.0, 150, 100);

        // Player cardinally adjacent at (6,5), its tile occupied: the
        // perpendicular candidates are (5,6) then (5,4).
        let occupied: HashSet<_> = [(6, 5)].into_iter().collect();
        for turn in 1..=2 {
            decide(&mut boss, &grid, &occupied, (6, 5), turn, &mut rng, &mut events);
            boss.x = 5;
            boss.y = 5;
        }
        assert_eq!(boss.boss_state.unwrap().turn_count, 2);

        // Third boss-turn: first perpendicular candidate wins
        let d3 = decide(&mut boss, &grid, &occupied, (6, 5), 3, &mut rng, &mut events);
        assert_eq!(d3, Some((5, 6)));

        // With the first candidate walled off, the second is taken
        let mut walled = open_grid(12);
        walled.set(5, 6, Tile::Wall);
        boss.x = 5;
        boss.y = 5;
        let mut state = boss.boss_state.unwrap();
        state.turn_count = 5; // next call makes it 6, a circling turn
        boss.boss_state = Some(state);
        let d6 = decide(&mut boss, &walled, &occupied, (6, 5), 4, &mut rng, &mut events);
        assert_eq!(d6, Some((5, 4)));
    }

    #[test]
    fn test_greedy_tie_break_takes_first_best() {
        // (5,4) and (4,5) are equidistant from (7,7); enumeration order is
        // south, north, east, west from (5,5): (5,6), (5,4), (6,5), (4,5).
        // (5,6) and (6,5) tie at distance 3; first encountered wins.
        let moves = vec![(5, 6), (5, 4), (6, 5), (4, 5)];
        assert_eq!(greedy_toward((7, 7), &moves), Some((5, 6)));
        // Away from (7,7): (5,4) and (4,5) tie at distance 5; first wins.
        assert_eq!(greedy_away((7, 7), &moves), Some((5, 4)));
    }
}
