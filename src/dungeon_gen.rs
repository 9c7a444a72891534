//! Procedural dungeon generation.
//!
//! Builds a connected floor layout from randomly placed rectangular rooms
//! joined by L-shaped corridors, then verifies and repairs connectivity
//! before placing chests, stairs and enemy spawn points. Generation never
//! fails outright: degenerate random draws fall back to a single large room.

use rand::Rng;
use tracing::debug;

use crate::constants::*;
use crate::grid::GridMap;
use crate::pathfinding::manhattan_distance;
use crate::tile::Tile;

/// A rectangle representing a room during generation.
/// Transient: discarded once the level is committed to the grid.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Axis-aligned overlap test, no padding.
    pub fn intersects(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Result of generating one dungeon floor.
pub struct DungeonResult {
    pub grid: GridMap,
    pub enemy_spawns: Vec<(i32, i32)>,
    pub player_start: (i32, i32),
}

pub struct DungeonGenerator {
    grid: GridMap,
}

impl DungeonGenerator {
    /// Generate a dungeon floor of the given dimensions.
    pub fn generate(width: usize, height: usize, rng: &mut impl Rng) -> DungeonResult {
        let mut gen = Self {
            grid: GridMap::filled_with_walls(width, height),
        };

        let mut rooms = gen.place_rooms(rng);
        gen.reinforce_connectivity(&rooms, rng);

        if rooms.is_empty() {
            // Pathological draws placed nothing - carve one room spanning
            // nearly the entire interior so the floor is always playable.
            debug!("no rooms placed, carving fallback room");
            let fallback = Room::new(
                1,
                1,
                (width as i32 - 2).max(1),
                (height as i32 - 2).max(1),
            );
            gen.carve_room(&fallback);
            rooms.push(fallback);
        }

        gen.carve_safe_zone(&rooms, rng);
        gen.repair_connectivity(rng);

        gen.place_features(rng);

        let enemy_spawns = gen.pick_spawn_points(rng);
        let player_start = gen.resolve_player_start();

        debug!(
            rooms = rooms.len(),
            spawns = enemy_spawns.len(),
            player_start = ?player_start,
            "floor generated"
        );

        DungeonResult {
            grid: gen.grid,
            enemy_spawns,
            player_start,
        }
    }

    /// Attempt to place 4-8 rooms, rejecting candidates that overlap an
    /// already-placed room. Each accepted room is carved and connected to
    /// the previously accepted one with an L-shaped corridor.
    fn place_rooms(&mut self, rng: &mut impl Rng) -> Vec<Room> {
        let target = rng.gen_range(ROOM_COUNT_MIN..=ROOM_COUNT_MAX);
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..target {
            let room_width = rng.gen_range(ROOM_SIZE_MIN..=ROOM_SIZE_MAX);
            let room_height = rng.gen_range(ROOM_SIZE_MIN..=ROOM_SIZE_MAX);

            // Keep a one-tile wall border around the map edge
            let max_x = self.grid.width as i32 - room_width - 1;
            let max_y = self.grid.height as i32 - room_height - 1;
            if max_x < 1 || max_y < 1 {
                continue;
            }

            let candidate = Room::new(
                rng.gen_range(1..=max_x),
                rng.gen_range(1..=max_y),
                room_width,
                room_height,
            );

            if rooms.iter().any(|r| r.intersects(&candidate)) {
                continue;
            }

            self.carve_room(&candidate);
            if let Some(prev) = rooms.last() {
                self.connect_rooms(prev, &candidate, rng);
            }
            rooms.push(candidate);
        }

        debug!(placed = rooms.len(), attempted = target, "room placement");
        rooms
    }

    /// For each room after the first, check for an already-painted path to
    /// some earlier room; if none is found, connect it to a randomly chosen
    /// earlier room.
    fn reinforce_connectivity(&mut self, rooms: &[Room], rng: &mut impl Rng) {
        for i in 1..rooms.len() {
            let connected = rooms[..i]
                .iter()
                .any(|earlier| self.has_painted_path(&rooms[i], earlier));
            if !connected {
                let target = rooms[rng.gen_range(0..i)];
                self.connect_rooms(&rooms[i], &target, rng);
            }
        }
    }

    /// A room counts as path-connected to a target when the straight
    /// horizontal line at its own center-row and the straight vertical line
    /// at the target's center-column are both entirely non-wall.
    fn has_painted_path(&self, room: &Room, target: &Room) -> bool {
        let (rx, ry) = room.center();
        let (tx, ty) = target.center();

        for x in rx.min(tx)..=rx.max(tx) {
            match self.grid.get(x, ry) {
                Some(tile) if tile.is_walkable() => {}
                _ => return false,
            }
        }
        for y in ry.min(ty)..=ry.max(ty) {
            match self.grid.get(tx, y) {
                Some(tile) if tile.is_walkable() => {}
                _ => return false,
            }
        }
        true
    }

    /// Force a 3x3 guaranteed-floor zone at the top-left interior and tie it
    /// into the room network so the player start is never isolated.
    fn carve_safe_zone(&mut self, rooms: &[Room], rng: &mut impl Rng) {
        for y in 1..=SAFE_ZONE_SIZE {
            for x in 1..=SAFE_ZONE_SIZE {
                self.grid.set(x, y, Tile::Floor);
            }
        }

        if let Some(first) = rooms.first() {
            let zone = Room::new(1, 1, SAFE_ZONE_SIZE, SAFE_ZONE_SIZE);
            self.connect_rooms(&zone, first, rng);
        }
    }

    /// Bounded verify-and-repair pass: flood-fill from an arbitrary floor
    /// tile and, when pockets remain, carve a corridor between two random
    /// floor tiles. Large floors skip the flood-fill check entirely.
    fn repair_connectivity(&mut self, rng: &mut impl Rng) {
        for attempt in 0..REPAIR_ATTEMPTS_MAX {
            let floors = self.grid.floor_tiles();
            if floors.is_empty() || floors.len() > REPAIR_FLOOD_FILL_LIMIT {
                break;
            }

            let visited = self.grid.flood_fill(floors[0]);
            if visited.len() == floors.len() {
                break;
            }

            debug!(
                attempt,
                reachable = visited.len(),
                total = floors.len(),
                "repairing disconnected floor region"
            );
            let a = floors[rng.gen_range(0..floors.len())];
            let b = floors[rng.gen_range(0..floors.len())];
            self.carve_h_corridor(a.0, b.0, a.1);
            self.carve_v_corridor(a.1, b.1, b.0);
        }
    }

    /// Place 1-3 chests and exactly one stairs tile on distinct floor tiles.
    fn place_features(&mut self, rng: &mut impl Rng) {
        let mut candidates = self.grid.floor_tiles();

        let chest_count = rng.gen_range(CHEST_COUNT_MIN..=CHEST_COUNT_MAX);
        for _ in 0..chest_count {
            if candidates.is_empty() {
                break;
            }
            let (x, y) = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            self.grid.set(x, y, Tile::Chest);
        }

        if !candidates.is_empty() {
            let (x, y) = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            self.grid.set(x, y, Tile::Stairs);
        }
    }

    /// Draw 3-8 enemy spawn points from the remaining floor tiles, never
    /// within Manhattan distance 3 of the player start corner.
    fn pick_spawn_points(&self, rng: &mut impl Rng) -> Vec<(i32, i32)> {
        let mut eligible: Vec<(i32, i32)> = self
            .grid
            .floor_tiles()
            .into_iter()
            .filter(|&pos| manhattan_distance(pos, (1, 1)) > SPAWN_EXCLUSION_RADIUS)
            .collect();

        let want = rng.gen_range(SPAWN_COUNT_MIN..=SPAWN_COUNT_MAX);
        let mut spawns = Vec::new();
        while spawns.len() < want && !eligible.is_empty() {
            spawns.push(eligible.swap_remove(rng.gen_range(0..eligible.len())));
        }
        spawns
    }

    /// Prefer (1,1); otherwise the first floor tile in row-major order;
    /// as a last resort force (1,1) to floor.
    fn resolve_player_start(&mut self) -> (i32, i32) {
        if self.grid.get(1, 1) == Some(Tile::Floor) {
            return (1, 1);
        }
        if let Some(&first) = self.grid.floor_tiles().first() {
            return first;
        }
        self.grid.set(1, 1, Tile::Floor);
        (1, 1)
    }

    fn carve_room(&mut self, room: &Room) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                self.grid.set(x, y, Tile::Floor);
            }
        }
    }

    /// Connect two rooms with an L-shaped corridor between their centers.
    fn connect_rooms(&mut self, room1: &Room, room2: &Room, rng: &mut impl Rng) {
        let (x1, y1) = room1.center();
        let (x2, y2) = room2.center();

        // Coin flip: horizontal-then-vertical or vertical-then-horizontal
        if rng.gen_bool(0.5) {
            self.carve_h_corridor(x1, x2, y1);
            self.carve_v_corridor(y1, y2, x2);
        } else {
            self.carve_v_corridor(y1, y2, x1);
            self.carve_h_corridor(x1, x2, y2);
        }
    }

    fn carve_h_corridor(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.grid.set(x, y, Tile::Floor);
        }
    }

    fn carve_v_corridor(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.grid.set(x, y, Tile::Floor);
        }
    }
}
