//! Area and boss definitions.
//!
//! Areas form a strict linear order (catalog order); each area gates a
//! monster pool and one mini-boss, and clearing the boss unlocks exactly
//! the next area.

use crate::items::DropEntry;

/// Represents an area in the game world.
#[derive(Debug, Clone)]
pub struct AreaDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Names of monster templates that spawn here
    pub monster_pool: &'static [&'static str],
    pub boss: BossSpec,
}

/// The mini-boss guarding an area, derived from a base monster template.
#[derive(Debug, Clone)]
pub struct BossSpec {
    pub base_monster: &'static str,
    pub name: &'static str,
    pub hp_multiplier: f64,
    pub atk_multiplier: f64,
    pub xp_multiplier: f64,
    pub gold_multiplier: f64,
    pub drops: &'static [DropEntry],
}

/// Returns all areas in unlock order.
pub fn get_all_areas() -> Vec<AreaDef> {
    vec![
        AreaDef {
            id: "forest",
            name: "Forest",
            monster_pool: &["Slime", "Goblin"],
            boss: BossSpec {
                base_monster: "Slime",
                name: "Giant Slime",
                hp_multiplier: 3.0,   // 60 HP
                atk_multiplier: 2.0,  // 4 ATK
                xp_multiplier: 5.0,   // 50 XP
                gold_multiplier: 10.0, // 50 gold
                drops: &[DropEntry {
                    item_id: "health_ring",
                    chance: 0.50,
                }],
            },
        },
        AreaDef {
            id: "dark_caves",
            name: "Dark Caves",
            monster_pool: &["Slime", "Goblin", "Orc"],
            boss: BossSpec {
                base_monster: "Goblin",
                name: "Goblin Chief",
                hp_multiplier: 3.0,   // 105 HP
                atk_multiplier: 2.5,  // 10 ATK
                xp_multiplier: 5.0,   // 100 XP
                gold_multiplier: 10.0, // 100 gold
                drops: &[DropEntry {
                    item_id: "power_amulet",
                    chance: 0.50,
                }],
            },
        },
        AreaDef {
            id: "troll_mountains",
            name: "Troll Mountains",
            monster_pool: &["Slime", "Goblin", "Orc", "Troll"],
            boss: BossSpec {
                base_monster: "Troll",
                name: "Troll King",
                hp_multiplier: 4.0,   // 200 HP
                atk_multiplier: 3.0,  // 18 ATK
                xp_multiplier: 10.0,  // 800 XP
                gold_multiplier: 20.0, // 1000 gold
                drops: &[DropEntry {
                    item_id: "regen_charm",
                    chance: 0.75,
                }],
            },
        },
    ]
}

/// Looks up an area by id.
pub fn get_area(area_id: &str) -> Option<AreaDef> {
    get_all_areas().into_iter().find(|area| area.id == area_id)
}

/// Returns the area that follows the given one in unlock order, or `None`
/// for the last area (or an unknown id).
pub fn next_area(area_id: &str) -> Option<AreaDef> {
    let areas = get_all_areas();
    let index = areas.iter().position(|area| area.id == area_id)?;
    areas.into_iter().nth(index + 1)
}

/// Id of the area every new player starts in.
pub fn starting_area_id() -> &'static str {
    "forest"
}
