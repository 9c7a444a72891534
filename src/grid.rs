use std::collections::HashSet;

use crate::tile::Tile;

/// The mutable 2D tile grid for one dungeon floor.
///
/// Allocated fresh per floor and fully overwritten by the generator; every
/// read and write is bounds-checked, out-of-range access is a no-op rather
/// than a wraparound or a panic.
pub struct GridMap {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Create a grid filled entirely with walls.
    pub fn filled_with_walls(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set a tile, silently ignoring out-of-range coordinates.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map(|t| t.is_walkable()).unwrap_or(false)
    }

    /// All coordinates currently holding a plain floor tile, row-major order.
    pub fn floor_tiles(&self) -> Vec<(i32, i32)> {
        let mut floors = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.get(x, y) == Some(Tile::Floor) {
                    floors.push((x, y));
                }
            }
        }
        floors
    }

    /// Count of all walkable tiles (floor, door, stairs, chest).
    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    /// Flood-fill over walkable tiles from a starting coordinate using
    /// 4-directional adjacency. Returns the set of visited coordinates.
    /// An unwalkable or out-of-range start yields an empty set.
    pub fn flood_fill(&self, start: (i32, i32)) -> HashSet<(i32, i32)> {
        let mut visited = HashSet::new();
        if !self.is_walkable(start.0, start.1) {
            return visited;
        }

        let mut stack = vec![start];
        visited.insert(start);

        while let Some((x, y)) = stack.pop() {
            for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let next = (x + dx, y + dy);
                if self.is_walkable(next.0, next.1) && visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        visited
    }

    /// Read-only snapshot of the tile grid as rows of tile kinds,
    /// for the presentation layer.
    pub fn snapshot(&self) -> Vec<Vec<Tile>> {
        (0..self.height)
            .map(|y| self.tiles[y * self.width..(y + 1) * self.width].to_vec())
            .collect()
    }
}
