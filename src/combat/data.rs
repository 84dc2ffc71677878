//! Monster template catalog.

use crate::items::DropEntry;

/// Immutable monster definition. Instances are built per encounter.
#[derive(Debug, Clone)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub hp: u32,
    pub atk: u32,
    pub hp_regen: u32,
    pub xp_reward: u64,
    pub gold_reward: u64,
    pub drops: &'static [DropEntry],
}

/// Returns every monster template in the game.
pub fn get_all_monsters() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate {
            name: "Slime",
            hp: 20,
            atk: 2,
            hp_regen: 0,
            xp_reward: 10,
            gold_reward: 5,
            drops: &[
                DropEntry {
                    item_id: "wooden_sword_common",
                    chance: 0.10,
                },
                DropEntry {
                    item_id: "leather_vest_common",
                    chance: 0.10,
                },
            ],
        },
        MonsterTemplate {
            name: "Goblin",
            hp: 35,
            atk: 4,
            hp_regen: 1,
            xp_reward: 20,
            gold_reward: 10,
            drops: &[
                DropEntry {
                    item_id: "wooden_sword_common",
                    chance: 0.08,
                },
                DropEntry {
                    item_id: "iron_sword_common",
                    chance: 0.05,
                },
                DropEntry {
                    item_id: "health_ring",
                    chance: 0.08,
                },
            ],
        },
        MonsterTemplate {
            name: "Orc",
            hp: 60,
            atk: 7,
            hp_regen: 2,
            xp_reward: 40,
            gold_reward: 20,
            drops: &[
                DropEntry {
                    item_id: "iron_sword_common",
                    chance: 0.10,
                },
                DropEntry {
                    item_id: "chainmail_common",
                    chance: 0.08,
                },
                DropEntry {
                    item_id: "power_amulet",
                    chance: 0.06,
                },
            ],
        },
        MonsterTemplate {
            name: "Troll",
            hp: 50,
            atk: 6,
            hp_regen: 3,
            xp_reward: 80,
            gold_reward: 50,
            drops: &[
                DropEntry {
                    item_id: "steel_blade_common",
                    chance: 0.10,
                },
                DropEntry {
                    item_id: "plate_armor_common",
                    chance: 0.08,
                },
                DropEntry {
                    item_id: "regen_charm",
                    chance: 0.10,
                },
            ],
        },
    ]
}

/// Looks up a monster template by name.
pub fn get_monster(name: &str) -> Option<MonsterTemplate> {
    get_all_monsters().into_iter().find(|m| m.name == name)
}
