//! Item catalog and inventory system.

pub mod data;
pub mod inventory;
pub mod types;

pub use data::{get_all_items, get_item, upgrade_target};
pub use inventory::{InvSlot, Inventory, InventoryEvent};
pub use types::{DropEntry, EquipSlot, ItemDef, Rarity, StatBonuses};
