//! Dungeon generation constants.

/// Minimum number of rooms attempted per floor
pub const ROOM_COUNT_MIN: usize = 4;
/// Maximum number of rooms attempted per floor
pub const ROOM_COUNT_MAX: usize = 8;
/// Minimum room side length
pub const ROOM_SIZE_MIN: i32 = 3;
/// Maximum room side length
pub const ROOM_SIZE_MAX: i32 = 8;
/// Side length of the guaranteed-floor safe zone at the top-left interior
pub const SAFE_ZONE_SIZE: i32 = 3;
/// Maximum connectivity repair attempts before giving up
pub const REPAIR_ATTEMPTS_MAX: usize = 5;
/// Floor-tile count above which the repair flood-fill check is skipped
pub const REPAIR_FLOOD_FILL_LIMIT: usize = 50;
/// Minimum number of chests placed per floor
pub const CHEST_COUNT_MIN: usize = 1;
/// Maximum number of chests placed per floor
pub const CHEST_COUNT_MAX: usize = 3;
/// Minimum enemy spawn points returned per floor
pub const SPAWN_COUNT_MIN: usize = 3;
/// Maximum enemy spawn points returned per floor
pub const SPAWN_COUNT_MAX: usize = 8;
/// Spawn points closer than this (Manhattan) to the player start are rejected
pub const SPAWN_EXCLUSION_RADIUS: i32 = 3;
