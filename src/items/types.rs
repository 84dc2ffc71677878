use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipSlot {
    pub fn all() -> [EquipSlot; 3] {
        [EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Accessory]
    }

    /// Returns the display name for this slot.
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Armor => "Armor",
            EquipSlot::Accessory => "Accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
        }
    }
}

/// Stat contributions from an item or level bonus.
///
/// The stat set is closed: a bonus can only name these four kinds, so an
/// item cannot carry a stat the pipeline would have to ignore at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    pub atk: u32,
    pub def: u32,
    pub max_hp: u32,
    pub hp_regen: u32,
}

impl StatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.atk + self.def + self.max_hp + self.hp_regen
    }

    pub fn add(&mut self, other: &StatBonuses) {
        self.atk += other.atk;
        self.def += other.def;
        self.max_hp += other.max_hp;
        self.hp_regen += other.hp_regen;
    }
}

/// Immutable item catalog entry.
#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: EquipSlot,
    pub stats: StatBonuses,
    /// Rarity tier; accessories sit outside the rarity system
    pub rarity: Option<Rarity>,
    /// Item id produced by combining COMBINE_COST copies of this item
    pub upgrades_to: Option<&'static str>,
}

/// One entry of a monster or boss drop table.
///
/// Each entry is rolled independently against its own chance; entries do
/// not compete with each other.
#[derive(Debug, Clone, Copy)]
pub struct DropEntry {
    pub item_id: &'static str,
    pub chance: f64,
}
