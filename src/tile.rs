use serde::{Deserialize, Serialize};

/// The kinds of tile a dungeon grid can hold.
///
/// Tiles have no identity of their own - they are addressed by (x, y)
/// coordinates into a [`crate::grid::GridMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    Wall,
    Floor,
    Door,
    Stairs,
    Chest,
}

impl Tile {
    /// Whether entities can stand on this tile.
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub fn blocks_vision(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_is_not_walkable() {
        assert!(!Tile::Wall.is_walkable());
    }

    #[test]
    fn test_non_wall_tiles_are_walkable() {
        for tile in [Tile::Floor, Tile::Door, Tile::Stairs, Tile::Chest] {
            assert!(tile.is_walkable(), "{tile:?} should be walkable");
        }
    }

    #[test]
    fn test_only_walls_block_vision() {
        assert!(Tile::Wall.blocks_vision());
        assert!(!Tile::Floor.blocks_vision());
        assert!(!Tile::Chest.blocks_vision());
    }
}
