//! Core simulation systems: AI decisions, combat resolution, progression,
//! skills and timed effects.

pub mod ai;
pub mod combat;
pub mod effects;
pub mod experience;
pub mod skills;
