//! Area catalog and linear unlock ordering.

pub mod data;

pub use data::{get_all_areas, get_area, next_area, starting_area_id, AreaDef, BossSpec};
