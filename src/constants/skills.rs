//! Skill tuning constants.

// Power Strike - heavy single hit
pub const POWER_STRIKE_MULTIPLIER: f64 = 1.5;
pub const POWER_STRIKE_COOLDOWN: u32 = 3;

// Piercing Thrust - ignores defense
pub const PIERCING_THRUST_COOLDOWN: u32 = 4;

// Whirlwind - hits all adjacent enemies
pub const WHIRLWIND_MULTIPLIER: f64 = 0.8;
pub const WHIRLWIND_RADIUS: i32 = 1;
pub const WHIRLWIND_COOLDOWN: u32 = 5;

// Execute - bonus damage below a health threshold
pub const EXECUTE_MULTIPLIER: f64 = 1.2;
pub const EXECUTE_THRESHOLD: f64 = 0.3;
pub const EXECUTE_BONUS_MULTIPLIER: f64 = 2.0;
pub const EXECUTE_COOLDOWN: u32 = 4;

// Chain Lightning - arcs to additional visible enemies
pub const CHAIN_LIGHTNING_MULTIPLIER: f64 = 0.9;
pub const CHAIN_LIGHTNING_TARGETS: usize = 2;
pub const CHAIN_LIGHTNING_COOLDOWN: u32 = 5;

// Shield Block - temporary damage-reduction buff
pub const SHIELD_BLOCK_REDUCTION: f64 = 0.5;
pub const SHIELD_BLOCK_DURATION: u32 = 3;
pub const SHIELD_BLOCK_COOLDOWN: u32 = 6;

// Passive increments
pub const CRITICAL_MASTERY_CRIT_CHANCE: f64 = 0.05;
pub const DEADLY_PRECISION_CRIT_DAMAGE: f64 = 0.2;
pub const IRON_SKIN_DEFENSE: i32 = 2;
pub const VITALITY_MAX_HEALTH: i32 = 20;
pub const VAMPIRISM_LIFESTEAL: f64 = 0.05;
pub const STONE_FORM_DAMAGE_REDUCTION: f64 = 0.10;
pub const REGENERATION_PER_TURN: i32 = 1;
