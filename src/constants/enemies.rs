//! Enemy stats and AI tuning constants.

/// Maximum enemies instantiated per floor (spawn points beyond this are unused)
pub const ROSTER_CAP: usize = 5;
/// Bounded step count for line-of-sight walks
pub const SIGHT_WALK_LIMIT: usize = 100;

/// Pursuit range for aggressive enemies (Manhattan)
pub const AGGRESSIVE_RANGE: i32 = 6;
/// Ranged enemies retreat when the player is closer than this
pub const RANGED_RETREAT_DISTANCE: i32 = 2;
/// Ranged enemies approach when the player is further than this
pub const RANGED_APPROACH_DISTANCE: i32 = 4;
/// Defensive enemies only engage within this distance
pub const DEFENSIVE_ENGAGE_DISTANCE: i32 = 2;
/// Pursuit range for magical enemies (Manhattan)
pub const MAGICAL_RANGE: i32 = 8;
/// Bosses act only while the player is within this distance
pub const BOSS_ACTIVE_RANGE: i32 = 10;
/// Bosses attempt the circle maneuver every Nth boss-turn
pub const BOSS_CIRCLE_INTERVAL: u32 = 3;
/// Health fraction below which a boss enrages
pub const BOSS_ENRAGE_THRESHOLD: f64 = 0.4;
/// Attack and speed multiplier applied once on enrage
pub const BOSS_ENRAGE_MULTIPLIER: f64 = 1.5;

// Per-archetype base stats. Scaled up by floor number at spawn time.

// AGGRESSIVE (brute melee)
pub const AGGRESSIVE_HEALTH: i32 = 30;
pub const AGGRESSIVE_ATTACK: i32 = 8;
pub const AGGRESSIVE_DEFENSE: i32 = 2;
pub const AGGRESSIVE_SPEED: f64 = 1.0;
pub const AGGRESSIVE_XP: u32 = 20;
pub const AGGRESSIVE_GOLD: u32 = 10;

// RANGED (skirmisher, keeps its distance)
pub const RANGED_HEALTH: i32 = 20;
pub const RANGED_ATTACK: i32 = 6;
pub const RANGED_DEFENSE: i32 = 1;
pub const RANGED_SPEED: f64 = 1.0;
pub const RANGED_XP: u32 = 25;
pub const RANGED_GOLD: u32 = 12;

// DEFENSIVE (slow guardian)
pub const DEFENSIVE_HEALTH: i32 = 45;
pub const DEFENSIVE_ATTACK: i32 = 5;
pub const DEFENSIVE_DEFENSE: i32 = 5;
pub const DEFENSIVE_SPEED: f64 = 0.5;
pub const DEFENSIVE_XP: u32 = 30;
pub const DEFENSIVE_GOLD: u32 = 15;

// MAGICAL (long pursuit range, fragile)
pub const MAGICAL_HEALTH: i32 = 18;
pub const MAGICAL_ATTACK: i32 = 10;
pub const MAGICAL_DEFENSE: i32 = 0;
pub const MAGICAL_SPEED: f64 = 1.0;
pub const MAGICAL_XP: u32 = 35;
pub const MAGICAL_GOLD: u32 = 18;

// BOSS
pub const BOSS_HEALTH: i32 = 120;
pub const BOSS_ATTACK: i32 = 14;
pub const BOSS_DEFENSE: i32 = 4;
pub const BOSS_SPEED: f64 = 1.0;
pub const BOSS_XP: u32 = 150;
pub const BOSS_GOLD: u32 = 100;

/// Per-floor multiplier applied to enemy health
pub const FLOOR_HEALTH_SCALING: f64 = 0.15;
/// Per-floor multiplier applied to enemy attack
pub const FLOOR_ATTACK_SCALING: f64 = 0.10;
/// Boss floors occur every Nth floor
pub const BOSS_FLOOR_INTERVAL: u32 = 5;
