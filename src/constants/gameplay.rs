//! Player progression and gameplay constants.

/// XP required per level is level * this multiplier
pub const XP_PER_LEVEL_MULTIPLIER: u32 = 100;
/// Every Nth level is a milestone with amplified rewards
pub const MILESTONE_INTERVAL: u32 = 5;

/// Base max-health increase per level
pub const LEVEL_HEALTH_INCREASE: i32 = 20;
/// Extra max health per completed 5-level tier
pub const TIER_HEALTH_BONUS: i32 = 5;
/// Extra max health on milestone levels
pub const MILESTONE_HEALTH_BONUS: i32 = 15;
/// Base attack increase per level
pub const LEVEL_ATTACK_INCREASE: i32 = 2;
/// Extra attack on milestone levels
pub const MILESTONE_ATTACK_BONUS: i32 = 1;
/// Base defense increase per level
pub const LEVEL_DEFENSE_INCREASE: i32 = 1;
/// Extra defense on milestone levels
pub const MILESTONE_DEFENSE_BONUS: i32 = 1;
/// Skill points granted per regular level
pub const LEVEL_SKILL_POINTS: u32 = 1;
/// Skill points granted per milestone level
pub const MILESTONE_SKILL_POINTS: u32 = 2;

// Player starting stats
pub const PLAYER_START_HEALTH: i32 = 100;
pub const PLAYER_START_ATTACK: i32 = 10;
pub const PLAYER_START_DEFENSE: i32 = 2;

/// Health restored by a health potion
pub const HEALTH_POTION_HEAL: i32 = 50;
/// Gold found in an opened chest (inclusive bounds)
pub const CHEST_GOLD_MIN: u32 = 10;
pub const CHEST_GOLD_MAX: u32 = 40;
