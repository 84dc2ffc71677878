//! Static item catalog.
//!
//! Weapons and armor come in three rarity tiers linked by upgrade chains;
//! accessories are single-tier. Lookups return `None` for unknown ids so
//! callers can treat missing data as a no-op.

use super::types::{EquipSlot, ItemDef, Rarity, StatBonuses};

/// Returns every item definition in the game.
pub fn get_all_items() -> Vec<ItemDef> {
    vec![
        // Weapons - Wooden Sword
        ItemDef {
            id: "wooden_sword_common",
            name: "Wooden Sword",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 2,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Common),
            upgrades_to: Some("wooden_sword_uncommon"),
        },
        ItemDef {
            id: "wooden_sword_uncommon",
            name: "Wooden Sword",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 5,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Uncommon),
            upgrades_to: Some("wooden_sword_rare"),
        },
        ItemDef {
            id: "wooden_sword_rare",
            name: "Wooden Sword",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 8,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Rare),
            upgrades_to: None,
        },
        // Weapons - Iron Sword
        ItemDef {
            id: "iron_sword_common",
            name: "Iron Sword",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 4,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Common),
            upgrades_to: Some("iron_sword_uncommon"),
        },
        ItemDef {
            id: "iron_sword_uncommon",
            name: "Iron Sword",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 8,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Uncommon),
            upgrades_to: Some("iron_sword_rare"),
        },
        ItemDef {
            id: "iron_sword_rare",
            name: "Iron Sword",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 13,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Rare),
            upgrades_to: None,
        },
        // Weapons - Steel Blade
        ItemDef {
            id: "steel_blade_common",
            name: "Steel Blade",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 7,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Common),
            upgrades_to: Some("steel_blade_uncommon"),
        },
        ItemDef {
            id: "steel_blade_uncommon",
            name: "Steel Blade",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 12,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Uncommon),
            upgrades_to: Some("steel_blade_rare"),
        },
        ItemDef {
            id: "steel_blade_rare",
            name: "Steel Blade",
            slot: EquipSlot::Weapon,
            stats: StatBonuses {
                atk: 18,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Rare),
            upgrades_to: None,
        },
        // Armor - Leather Vest
        ItemDef {
            id: "leather_vest_common",
            name: "Leather Vest",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 2,
                max_hp: 10,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Common),
            upgrades_to: Some("leather_vest_uncommon"),
        },
        ItemDef {
            id: "leather_vest_uncommon",
            name: "Leather Vest",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 4,
                max_hp: 20,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Uncommon),
            upgrades_to: Some("leather_vest_rare"),
        },
        ItemDef {
            id: "leather_vest_rare",
            name: "Leather Vest",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 7,
                max_hp: 35,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Rare),
            upgrades_to: None,
        },
        // Armor - Chainmail
        ItemDef {
            id: "chainmail_common",
            name: "Chainmail",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 4,
                max_hp: 20,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Common),
            upgrades_to: Some("chainmail_uncommon"),
        },
        ItemDef {
            id: "chainmail_uncommon",
            name: "Chainmail",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 7,
                max_hp: 35,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Uncommon),
            upgrades_to: Some("chainmail_rare"),
        },
        ItemDef {
            id: "chainmail_rare",
            name: "Chainmail",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 11,
                max_hp: 55,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Rare),
            upgrades_to: None,
        },
        // Armor - Plate Armor
        ItemDef {
            id: "plate_armor_common",
            name: "Plate Armor",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 6,
                max_hp: 30,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Common),
            upgrades_to: Some("plate_armor_uncommon"),
        },
        ItemDef {
            id: "plate_armor_uncommon",
            name: "Plate Armor",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 10,
                max_hp: 50,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Uncommon),
            upgrades_to: Some("plate_armor_rare"),
        },
        ItemDef {
            id: "plate_armor_rare",
            name: "Plate Armor",
            slot: EquipSlot::Armor,
            stats: StatBonuses {
                def: 15,
                max_hp: 80,
                ..StatBonuses::new()
            },
            rarity: Some(Rarity::Rare),
            upgrades_to: None,
        },
        // Accessories (no rarity system)
        ItemDef {
            id: "health_ring",
            name: "Health Ring",
            slot: EquipSlot::Accessory,
            stats: StatBonuses {
                max_hp: 25,
                ..StatBonuses::new()
            },
            rarity: None,
            upgrades_to: None,
        },
        ItemDef {
            id: "power_amulet",
            name: "Power Amulet",
            slot: EquipSlot::Accessory,
            stats: StatBonuses {
                atk: 3,
                ..StatBonuses::new()
            },
            rarity: None,
            upgrades_to: None,
        },
        ItemDef {
            id: "regen_charm",
            name: "Regen Charm",
            slot: EquipSlot::Accessory,
            stats: StatBonuses {
                hp_regen: 2,
                ..StatBonuses::new()
            },
            rarity: None,
            upgrades_to: None,
        },
    ]
}

/// Looks up an item definition by id.
pub fn get_item(id: &str) -> Option<ItemDef> {
    get_all_items().into_iter().find(|item| item.id == id)
}

/// Returns the upgrade target item id, or `None` if the item cannot be
/// upgraded (or does not exist).
pub fn upgrade_target(item_id: &str) -> Option<&'static str> {
    get_item(item_id).and_then(|item| item.upgrades_to)
}
