//! Monster templates and combat instances.

pub mod data;
pub mod types;

pub use data::{get_all_monsters, get_monster, MonsterTemplate};
pub use types::{build_boss, damage_after_defense, CombatTimers, Monster};
