//! Combat system constants.

/// Fraction of base attack used as the damage variance band
pub const DAMAGE_VARIANCE_FRACTION: f64 = 0.3;
/// Default chance to deal a critical hit (0.0 - 1.0)
pub const DEFAULT_CRIT_CHANCE: f64 = 0.10;
/// Default critical hit damage multiplier
pub const DEFAULT_CRIT_DAMAGE: f64 = 1.8;
/// Minimum damage dealt by any resolved attack
pub const DAMAGE_FLOOR: i32 = 1;
/// Cap on accumulated critical hit chance
pub const CRIT_CHANCE_CAP: f64 = 1.0;
/// Cap on accumulated damage reduction
pub const DAMAGE_REDUCTION_CAP: f64 = 0.9;
/// Cap on accumulated lifesteal
pub const LIFESTEAL_CAP: f64 = 1.0;
