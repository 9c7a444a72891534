//! Read-only roster query helpers.
//!
//! Reusable queries shared by the AI pass, combat resolution and the
//! command layer. None of these mutate state.

use std::collections::HashSet;

use crate::combatant::Combatant;
use crate::pathfinding::manhattan_distance;

/// Positions of living roster members, optionally excluding one id
/// (usually the moving entity itself).
pub fn occupied_positions(roster: &[Combatant], exclude: Option<u32>) -> HashSet<(i32, i32)> {
    roster
        .iter()
        .filter(|c| c.alive && exclude.map_or(true, |ex| c.id != ex))
        .map(|c| c.pos())
        .collect()
}

/// Indices of living enemies on a cardinally adjacent tile.
/// Diagonal neighbors and same-tile overlaps do not count.
pub fn adjacent_enemies(player: &Combatant, roster: &[Combatant]) -> Vec<usize> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive && manhattan_distance(player.pos(), e.pos()) == 1)
        .map(|(i, _)| i)
        .collect()
}

/// Index of the living enemy standing at a position, if any.
pub fn enemy_at(roster: &[Combatant], pos: (i32, i32)) -> Option<usize> {
    roster
        .iter()
        .position(|e| e.alive && e.pos() == pos)
}

/// Index of the living enemy nearest to the player (Manhattan),
/// first-found wins on ties.
pub fn nearest_enemy(player: &Combatant, roster: &[Combatant]) -> Option<usize> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive)
        .min_by_key(|(_, e)| manhattan_distance(player.pos(), e.pos()))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Archetype;

    fn enemy_at_pos(id: u32, x: i32, y: i32) -> Combatant {
        Combatant::enemy(id, "rat", Archetype::Aggressive, x, y, 10, 3, 0, 1.0, 5, 2)
    }

    #[test]
    fn test_adjacent_detection_is_cardinal_only() {
        let player = Combatant::player(5, 5);
        let roster = vec![
            enemy_at_pos(1, 6, 5), // cardinal
            enemy_at_pos(2, 6, 6), // diagonal
            enemy_at_pos(3, 5, 5), // same tile (invalid state, must not count)
        ];
        let adjacent = adjacent_enemies(&player, &roster);
        assert_eq!(adjacent, vec![0]);
    }

    #[test]
    fn test_dead_enemies_are_ignored() {
        let player = Combatant::player(5, 5);
        let mut dead = enemy_at_pos(1, 6, 5);
        dead.apply_damage(100);
        let roster = vec![dead];
        assert!(adjacent_enemies(&player, &roster).is_empty());
        assert!(occupied_positions(&roster, None).is_empty());
        assert_eq!(nearest_enemy(&player, &roster), None);
    }

    #[test]
    fn test_occupied_positions_excludes_self() {
        let roster = vec![enemy_at_pos(1, 2, 2), enemy_at_pos(2, 3, 3)];
        let occupied = occupied_positions(&roster, Some(1));
        assert!(!occupied.contains(&(2, 2)));
        assert!(occupied.contains(&(3, 3)));
    }

    #[test]
    fn test_nearest_enemy() {
        let player = Combatant::player(0, 0);
        let roster = vec![enemy_at_pos(1, 5, 5), enemy_at_pos(2, 1, 1), enemy_at_pos(3, 8, 0)];
        assert_eq!(nearest_enemy(&player, &roster), Some(1));
    }
}
