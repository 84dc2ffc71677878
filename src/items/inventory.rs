//! Slot-based inventory with stacking, tier upgrades, and equipment.
//!
//! Storage is a bounded ordered list of `(item id, quantity)` slots plus an
//! equipped mapping of at most one item per slot type. Drops always land in
//! a fresh slot; stacking only happens through an explicit merge, and a
//! merged stack that reaches the combine cost upgrades into the item's next
//! rarity tier.
//!
//! All operations report failure through their return value and never
//! panic. Two documented edge cases lose items outright: an upgrade cascade
//! that cannot find a free slot, and an equip that has to displace an item
//! into a full inventory. Both are logged and accepted.

use super::data::{get_item, upgrade_target};
use super::types::{EquipSlot, StatBonuses};
use crate::core::constants::{COMBINE_COST, INVENTORY_CAPACITY};
use serde::{Deserialize, Serialize};

/// One storage slot holding a quantity of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvSlot {
    pub item_id: String,
    pub quantity: u32,
}

/// Equipped item ids, one per slot type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipped {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub accessory: Option<String>,
}

impl Equipped {
    pub fn get(&self, slot: EquipSlot) -> &Option<String> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Accessory => &self.accessory,
        }
    }

    fn set(&mut self, slot: EquipSlot, item_id: Option<String>) {
        match slot {
            EquipSlot::Weapon => self.weapon = item_id,
            EquipSlot::Armor => self.armor = item_id,
            EquipSlot::Accessory => self.accessory = item_id,
        }
    }
}

/// Notification produced by an inventory operation, for the owner to relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    /// A combine completed and granted one unit of the upgraded item.
    ItemUpgraded { item_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    capacity: usize,
    slots: Vec<InvSlot>,
    equipped: Equipped,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(INVENTORY_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::new(),
            equipped: Equipped::default(),
        }
    }

    pub fn slots(&self) -> &[InvSlot] {
        &self.slots
    }

    pub fn equipped(&self) -> &Equipped {
        &self.equipped
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Adds one unit of an item in a fresh slot. Fails when the inventory
    /// is at capacity. Never stacks; stacking is an explicit merge.
    pub fn add_item(&mut self, item_id: &str) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(InvSlot {
            item_id: item_id.to_string(),
            quantity: 1,
        });
        true
    }

    /// Merges the source slot into the target slot. Valid only for two
    /// distinct existing slots holding the same item. The source slot is
    /// removed (later indices shift down) and the merged target is checked
    /// for tier upgrades. Returns `None` when the merge is invalid.
    pub fn merge_items(&mut self, source: usize, target: usize) -> Option<Vec<InventoryEvent>> {
        if source == target || source >= self.slots.len() || target >= self.slots.len() {
            return None;
        }
        if self.slots[source].item_id != self.slots[target].item_id {
            return None;
        }

        let moved = self.slots[source].quantity;
        self.slots[target].quantity += moved;
        self.slots.remove(source);

        // Removing the source shifts the target down when it came after
        let target = if source < target { target - 1 } else { target };

        let mut events = Vec::new();
        self.check_upgrade(target, &mut events);
        Some(events)
    }

    /// Consumes COMBINE_COST units per upgrade while the slot can afford it
    /// and the item has a next tier. A stack emptied exactly becomes the
    /// upgraded item in place; otherwise the upgraded unit stacks into a
    /// matching slot (re-checked recursively) or a new slot. With no slot
    /// available the upgraded unit is lost.
    fn check_upgrade(&mut self, index: usize, events: &mut Vec<InventoryEvent>) {
        loop {
            if index >= self.slots.len() {
                return;
            }
            let item_id = self.slots[index].item_id.clone();
            let Some(target_id) = upgrade_target(&item_id) else {
                return;
            };
            if self.slots[index].quantity < COMBINE_COST {
                return;
            }

            self.slots[index].quantity -= COMBINE_COST;

            if self.slots[index].quantity == 0 {
                // Replace in place; a quantity-1 stack cannot upgrade again
                self.slots[index].item_id = target_id.to_string();
                self.slots[index].quantity = 1;
                events.push(InventoryEvent::ItemUpgraded {
                    item_id: target_id.to_string(),
                });
                return;
            }

            let existing = self
                .slots
                .iter()
                .position(|slot| slot.item_id == target_id);
            match existing {
                Some(other) => {
                    self.slots[other].quantity += 1;
                    events.push(InventoryEvent::ItemUpgraded {
                        item_id: target_id.to_string(),
                    });
                    self.check_upgrade(other, events);
                }
                None => {
                    if self.is_full() {
                        // Documented lossy path: nowhere to put the upgrade
                        log::warn!("inventory full, upgraded item {} lost", target_id);
                    } else {
                        self.slots.push(InvSlot {
                            item_id: target_id.to_string(),
                            quantity: 1,
                        });
                        events.push(InventoryEvent::ItemUpgraded {
                            item_id: target_id.to_string(),
                        });
                    }
                }
            }
            // The source stack may still afford another combine
        }
    }

    /// Equips one unit from the given slot index into the item's slot type.
    /// Any previously equipped item of that type returns to the inventory.
    pub fn equip_item(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        let item_id = self.slots[index].item_id.clone();
        let Some(def) = get_item(&item_id) else {
            return false;
        };

        let previous = self.equipped.get(def.slot).clone();

        if self.slots[index].quantity > 1 {
            self.slots[index].quantity -= 1;
            if let Some(prev_id) = previous {
                self.return_to_inventory(&prev_id);
            }
        } else if let Some(prev_id) = previous {
            // Swap the single unit for the displaced item in place
            self.slots[index].item_id = prev_id;
        } else {
            self.slots.remove(index);
        }

        self.equipped.set(def.slot, Some(item_id));
        true
    }

    /// Moves an equipped item back into a new inventory slot. Fails when
    /// nothing is equipped in that slot type or the inventory is full.
    pub fn unequip_item(&mut self, slot: EquipSlot) -> bool {
        let Some(item_id) = self.equipped.get(slot).clone() else {
            return false;
        };
        if self.is_full() {
            return false;
        }
        self.slots.push(InvSlot {
            item_id,
            quantity: 1,
        });
        self.equipped.set(slot, None);
        true
    }

    /// Sums the stat contributions of all equipped items. Ids missing from
    /// the catalog contribute nothing.
    pub fn equipment_bonuses(&self) -> StatBonuses {
        let mut bonuses = StatBonuses::new();
        for slot in EquipSlot::all() {
            if let Some(item_id) = self.equipped.get(slot) {
                if let Some(def) = get_item(item_id) {
                    bonuses.add(&def.stats);
                }
            }
        }
        bonuses
    }

    /// Puts a displaced item back: stacks into a matching slot, else opens
    /// a new slot, else drops it (documented lossy path).
    fn return_to_inventory(&mut self, item_id: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.item_id == item_id) {
            slot.quantity += 1;
        } else if !self.is_full() {
            self.slots.push(InvSlot {
                item_id: item_id.to_string(),
                quantity: 1,
            });
        } else {
            log::warn!("inventory full, unequipped item {} lost", item_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(inv: &mut Inventory, item_id: &str, quantity: u32) -> usize {
        assert!(inv.add_item(item_id));
        let index = inv.slots().len() - 1;
        inv.slots[index].quantity = quantity;
        index
    }

    #[test]
    fn test_add_item_appends_fresh_slot() {
        let mut inv = Inventory::default();
        assert!(inv.add_item("wooden_sword_common"));
        assert!(inv.add_item("wooden_sword_common"));

        // No auto-stacking on add
        assert_eq!(inv.slots().len(), 2);
        assert_eq!(inv.slots()[0].quantity, 1);
        assert_eq!(inv.slots()[1].quantity, 1);
    }

    #[test]
    fn test_add_item_fails_at_capacity() {
        let mut inv = Inventory::new(2);
        assert!(inv.add_item("health_ring"));
        assert!(inv.add_item("health_ring"));
        assert!(!inv.add_item("health_ring"));
        assert_eq!(inv.slots().len(), 2);
    }

    #[test]
    fn test_merge_sums_quantities_and_removes_source() {
        let mut inv = Inventory::default();
        filled(&mut inv, "health_ring", 3);
        filled(&mut inv, "health_ring", 4);

        let events = inv.merge_items(0, 1).unwrap();
        assert!(events.is_empty());
        assert_eq!(inv.slots().len(), 1);
        assert_eq!(inv.slots()[0].quantity, 7);
    }

    #[test]
    fn test_merge_rejects_mismatched_items() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");
        inv.add_item("leather_vest_common");
        assert!(inv.merge_items(0, 1).is_none());
        assert_eq!(inv.slots().len(), 2);
    }

    #[test]
    fn test_merge_rejects_same_or_out_of_range_index() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");
        assert!(inv.merge_items(0, 0).is_none());
        assert!(inv.merge_items(0, 5).is_none());
        assert!(inv.merge_items(5, 0).is_none());
    }

    #[test]
    fn test_merge_index_shift_when_source_before_target() {
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 2);
        inv.add_item("health_ring");
        filled(&mut inv, "wooden_sword_common", 3);

        // Source 0 removed; target index 2 becomes 1 after compaction
        let events = inv.merge_items(0, 2).unwrap();
        assert!(events.is_empty());
        assert_eq!(inv.slots().len(), 2);
        assert_eq!(inv.slots()[0].item_id, "health_ring");
        assert_eq!(inv.slots()[1].item_id, "wooden_sword_common");
        assert_eq!(inv.slots()[1].quantity, 5);
    }

    #[test]
    fn test_merge_to_exact_combine_cost_upgrades_in_place() {
        // 9 common swords + 1 more -> exactly 10 -> one uncommon sword
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 9);
        inv.add_item("wooden_sword_common");

        let events = inv.merge_items(1, 0).unwrap();
        assert_eq!(
            events,
            vec![InventoryEvent::ItemUpgraded {
                item_id: "wooden_sword_uncommon".to_string()
            }]
        );
        assert_eq!(inv.slots().len(), 1);
        assert_eq!(inv.slots()[0].item_id, "wooden_sword_uncommon");
        assert_eq!(inv.slots()[0].quantity, 1);
    }

    #[test]
    fn test_upgrade_with_remainder_opens_new_slot() {
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 11);
        inv.add_item("wooden_sword_common");

        let events = inv.merge_items(1, 0).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(inv.slots().len(), 2);
        assert_eq!(inv.slots()[0].item_id, "wooden_sword_common");
        assert_eq!(inv.slots()[0].quantity, 2);
        assert_eq!(inv.slots()[1].item_id, "wooden_sword_uncommon");
        assert_eq!(inv.slots()[1].quantity, 1);
    }

    #[test]
    fn test_upgrade_stacks_into_existing_target_slot() {
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 11);
        filled(&mut inv, "wooden_sword_uncommon", 2);
        inv.add_item("wooden_sword_common");

        let events = inv.merge_items(2, 0).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(inv.slots().len(), 2);
        assert_eq!(inv.slots()[1].item_id, "wooden_sword_uncommon");
        assert_eq!(inv.slots()[1].quantity, 3);
    }

    #[test]
    fn test_upgrade_cascades_into_next_tier() {
        // The produced uncommon lands on a 9-stack, pushing it to 10, which
        // in turn combines into one rare sword.
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 11);
        filled(&mut inv, "wooden_sword_uncommon", 9);
        inv.add_item("wooden_sword_common");

        let events = inv.merge_items(2, 0).unwrap();
        assert_eq!(
            events,
            vec![
                InventoryEvent::ItemUpgraded {
                    item_id: "wooden_sword_uncommon".to_string()
                },
                InventoryEvent::ItemUpgraded {
                    item_id: "wooden_sword_rare".to_string()
                },
            ]
        );
        assert_eq!(inv.slots().len(), 2);
        assert_eq!(inv.slots()[0].item_id, "wooden_sword_common");
        assert_eq!(inv.slots()[0].quantity, 2);
        assert_eq!(inv.slots()[1].item_id, "wooden_sword_rare");
        assert_eq!(inv.slots()[1].quantity, 1);
    }

    #[test]
    fn test_large_stack_keeps_combining() {
        // 25 after merge: two combines fire, leaving 5 commons + 2 uncommons
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 20);
        filled(&mut inv, "wooden_sword_common", 5);

        let events = inv.merge_items(1, 0).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(inv.slots().len(), 2);
        assert_eq!(inv.slots()[0].quantity, 5);
        assert_eq!(inv.slots()[1].item_id, "wooden_sword_uncommon");
        assert_eq!(inv.slots()[1].quantity, 2);
    }

    #[test]
    fn test_upgrade_overflow_loses_item() {
        // The cascade consumes the slot the merge freed (a rare is pushed
        // mid-chain), so the second produced uncommon has nowhere to go.
        let mut inv = Inventory::new(5);
        filled(&mut inv, "wooden_sword_common", 21);
        filled(&mut inv, "wooden_sword_uncommon", 19);
        inv.add_item("health_ring");
        inv.add_item("power_amulet");
        inv.add_item("wooden_sword_common");
        assert!(inv.is_full());

        let events = inv.merge_items(4, 0).unwrap();
        // Three upgrades granted; the fourth produced unit was lost
        assert_eq!(events.len(), 3);
        assert_eq!(inv.slots().len(), 5);
        assert_eq!(inv.slots()[0].item_id, "wooden_sword_common");
        assert_eq!(inv.slots()[0].quantity, 2);
        // Both rares survive; no uncommon slot remains to hold the loss
        let rares = inv
            .slots()
            .iter()
            .filter(|s| s.item_id == "wooden_sword_rare")
            .count();
        assert_eq!(rares, 2);
        assert!(inv
            .slots()
            .iter()
            .all(|s| s.item_id != "wooden_sword_uncommon"));
    }

    #[test]
    fn test_max_tier_item_never_upgrades() {
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_rare", 15);
        inv.add_item("wooden_sword_rare");

        let events = inv.merge_items(1, 0).unwrap();
        assert!(events.is_empty());
        assert_eq!(inv.slots()[0].quantity, 16);
    }

    #[test]
    fn test_equip_single_unit_removes_slot() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");

        assert!(inv.equip_item(0));
        assert!(inv.slots().is_empty());
        assert_eq!(
            inv.equipped().weapon.as_deref(),
            Some("wooden_sword_common")
        );
    }

    #[test]
    fn test_equip_swaps_with_previous_item() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");
        assert!(inv.equip_item(0));
        inv.add_item("iron_sword_common");

        assert!(inv.equip_item(0));
        assert_eq!(inv.equipped().weapon.as_deref(), Some("iron_sword_common"));
        assert_eq!(inv.slots().len(), 1);
        assert_eq!(inv.slots()[0].item_id, "wooden_sword_common");
    }

    #[test]
    fn test_equip_from_stack_decrements_quantity() {
        let mut inv = Inventory::default();
        filled(&mut inv, "wooden_sword_common", 5);

        assert!(inv.equip_item(0));
        assert_eq!(inv.slots()[0].quantity, 4);
        assert_eq!(
            inv.equipped().weapon.as_deref(),
            Some("wooden_sword_common")
        );
    }

    #[test]
    fn test_equip_from_stack_returns_previous_to_matching_slot() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");
        assert!(inv.equip_item(0));
        filled(&mut inv, "iron_sword_common", 3);
        filled(&mut inv, "wooden_sword_common", 2);

        assert!(inv.equip_item(0));
        assert_eq!(inv.equipped().weapon.as_deref(), Some("iron_sword_common"));
        assert_eq!(inv.slots()[0].quantity, 2);
        // Displaced wooden sword stacked onto the existing wooden slot
        assert_eq!(inv.slots()[1].item_id, "wooden_sword_common");
        assert_eq!(inv.slots()[1].quantity, 3);
    }

    #[test]
    fn test_equip_overflow_loses_displaced_item() {
        let mut inv = Inventory::new(2);
        inv.add_item("wooden_sword_common");
        assert!(inv.equip_item(0));
        filled(&mut inv, "iron_sword_common", 2);
        inv.add_item("health_ring");
        assert!(inv.is_full());

        // Equipping from the stack leaves no room for the wooden sword
        assert!(inv.equip_item(0));
        assert_eq!(inv.equipped().weapon.as_deref(), Some("iron_sword_common"));
        assert_eq!(inv.slots().len(), 2);
        assert!(inv.slots().iter().all(|s| s.item_id != "wooden_sword_common"));
    }

    #[test]
    fn test_equip_rejects_bad_index() {
        let mut inv = Inventory::default();
        assert!(!inv.equip_item(0));
        inv.add_item("wooden_sword_common");
        assert!(!inv.equip_item(1));
    }

    #[test]
    fn test_equip_slot_types_are_independent() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");
        inv.add_item("leather_vest_common");
        inv.add_item("health_ring");

        assert!(inv.equip_item(0));
        assert!(inv.equip_item(0));
        assert!(inv.equip_item(0));
        assert!(inv.slots().is_empty());
        assert!(inv.equipped().weapon.is_some());
        assert!(inv.equipped().armor.is_some());
        assert!(inv.equipped().accessory.is_some());
    }

    #[test]
    fn test_unequip_moves_item_back() {
        let mut inv = Inventory::default();
        inv.add_item("leather_vest_common");
        assert!(inv.equip_item(0));

        assert!(inv.unequip_item(EquipSlot::Armor));
        assert!(inv.equipped().armor.is_none());
        assert_eq!(inv.slots().len(), 1);
        assert_eq!(inv.slots()[0].item_id, "leather_vest_common");
        assert_eq!(inv.slots()[0].quantity, 1);
    }

    #[test]
    fn test_unequip_fails_when_empty_or_full() {
        let mut inv = Inventory::new(1);
        assert!(!inv.unequip_item(EquipSlot::Weapon));

        inv.add_item("wooden_sword_common");
        assert!(inv.equip_item(0));
        inv.add_item("health_ring");
        assert!(inv.is_full());
        assert!(!inv.unequip_item(EquipSlot::Weapon));
        assert_eq!(inv.equipped().weapon.as_deref(), Some("wooden_sword_common"));
    }

    #[test]
    fn test_equipment_bonuses_sum_across_slots() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common"); // +2 atk
        inv.add_item("leather_vest_common"); // +2 def, +10 max_hp
        inv.add_item("regen_charm"); // +2 hp_regen
        assert!(inv.equip_item(0));
        assert!(inv.equip_item(0));
        assert!(inv.equip_item(0));

        let bonuses = inv.equipment_bonuses();
        assert_eq!(bonuses.atk, 2);
        assert_eq!(bonuses.def, 2);
        assert_eq!(bonuses.max_hp, 10);
        assert_eq!(bonuses.hp_regen, 2);
    }

    #[test]
    fn test_equipment_bonuses_empty_when_nothing_equipped() {
        let inv = Inventory::default();
        assert_eq!(inv.equipment_bonuses(), StatBonuses::new());
    }

    #[test]
    fn test_capacity_invariant_over_operation_sequence() {
        let mut inv = Inventory::new(4);
        for _ in 0..10 {
            inv.add_item("wooden_sword_common");
            assert!(inv.slots().len() <= 4);
        }
        inv.merge_items(0, 1);
        inv.equip_item(0);
        inv.unequip_item(EquipSlot::Weapon);
        inv.merge_items(1, 2);
        assert!(inv.slots().len() <= 4);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut inv = Inventory::default();
        inv.add_item("wooden_sword_common");
        inv.add_item("health_ring");
        assert!(inv.equip_item(1));

        let json = serde_json::to_string(&inv).unwrap();
        let loaded: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.slots(), inv.slots());
        assert_eq!(loaded.equipped(), inv.equipped());
    }
}
