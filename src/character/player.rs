//! Player state and the derived-stat pipeline.
//!
//! Combat stats are never stored independently of their inputs: every
//! recompute rebuilds them from base values, level bonuses, and equipment,
//! then rescales current HP to preserve the health fraction. Recomputation
//! runs only when equipment or level changes.

use crate::areas::data::starting_area_id;
use crate::combat::types::{damage_after_defense, CombatTimers};
use crate::core::constants::*;
use crate::items::inventory::InventoryEvent;
use crate::items::{EquipSlot, Inventory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    // Base combat stats (without level or equipment bonuses)
    base_max_hp: u32,
    base_atk: u32,
    base_def: u32,
    base_hp_regen: u32,

    // Derived stats (base + level bonuses + equipment)
    pub max_hp: u32,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub hp_regen: u32,

    // Progression
    pub level: u32,
    pub xp: u64,
    pub xp_to_level: u64,
    pub gold: u64,

    pub inventory: Inventory,

    // Area progression
    pub current_area: String,
    unlocked_areas: Vec<String>,
    defeated_bosses: Vec<String>,

    pub timers: CombatTimers,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            base_max_hp: BASE_MAX_HP,
            base_atk: BASE_ATK,
            base_def: BASE_DEF,
            base_hp_regen: BASE_HP_REGEN,
            max_hp: BASE_MAX_HP,
            hp: BASE_MAX_HP,
            atk: BASE_ATK,
            def: BASE_DEF,
            hp_regen: BASE_HP_REGEN,
            level: 1,
            xp: 0,
            xp_to_level: XP_TO_FIRST_LEVEL,
            gold: 0,
            inventory: Inventory::default(),
            current_area: starting_area_id().to_string(),
            unlocked_areas: vec![starting_area_id().to_string()],
            defeated_bosses: Vec::new(),
            timers: CombatTimers::new(PLAYER_ATTACK_INTERVAL_MS, REGEN_INTERVAL_MS),
        };
        player.recalculate_stats();
        player
    }

    /// Rebuilds derived stats from base values, level bonuses, and
    /// equipment, rescaling current HP to keep the same health fraction.
    pub fn recalculate_stats(&mut self) {
        let previous_max_hp = self.max_hp;
        let level_bonus = self.level - 1;
        let equipment = self.inventory.equipment_bonuses();

        self.max_hp = self.base_max_hp + level_bonus * MAX_HP_PER_LEVEL + equipment.max_hp;
        self.atk = self.base_atk + level_bonus * ATK_PER_LEVEL + equipment.atk;
        self.def = self.base_def + level_bonus * DEF_PER_LEVEL + equipment.def;
        self.hp_regen =
            self.base_hp_regen + level_bonus / LEVELS_PER_HP_REGEN + equipment.hp_regen;

        if previous_max_hp > 0 && self.max_hp != previous_max_hp {
            let ratio = self.hp as f64 / previous_max_hp as f64;
            self.hp = ((ratio * self.max_hp as f64) as u32).min(self.max_hp);
        }
        self.hp = self.hp.min(self.max_hp);
    }

    /// Applies an incoming attack and returns the damage dealt.
    pub fn take_damage(&mut self, incoming_atk: u32) -> u32 {
        let damage = damage_after_defense(incoming_atk, self.def);
        self.hp = self.hp.saturating_sub(damage);
        damage
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Grants XP and processes every level-up it affords. Each level-up
    /// consumes the threshold, raises the next one by the curve factor,
    /// recomputes stats, and heals to full. Returns the levels gained.
    pub fn gain_xp(&mut self, amount: u64) -> u32 {
        self.xp += amount;
        let mut levelups = 0;
        while self.xp >= self.xp_to_level {
            self.xp -= self.xp_to_level;
            self.level += 1;
            self.xp_to_level = (self.xp_to_level as f64 * XP_CURVE_FACTOR) as u64;
            self.recalculate_stats();
            self.hp = self.max_hp;
            levelups += 1;
        }
        levelups
    }

    pub fn gain_gold(&mut self, amount: u64) {
        self.gold += amount;
    }

    /// Restores HP to full after the defeat pause.
    pub fn respawn(&mut self) {
        self.hp = self.max_hp;
    }

    /// Restores HP by the regen rate, clamped to max, and stamps the timer.
    pub fn regenerate(&mut self, now_ms: u64) {
        if self.hp < self.max_hp {
            self.hp = (self.hp + self.hp_regen).min(self.max_hp);
        }
        self.timers.record_regen(now_ms);
    }

    /// Equips the item held at an inventory index; recomputes stats on
    /// success.
    pub fn equip_item(&mut self, index: usize) -> bool {
        if self.inventory.equip_item(index) {
            self.recalculate_stats();
            return true;
        }
        false
    }

    /// Unequips the given slot type back into the inventory; recomputes
    /// stats on success.
    pub fn unequip_item(&mut self, slot: EquipSlot) -> bool {
        if self.inventory.unequip_item(slot) {
            self.recalculate_stats();
            return true;
        }
        false
    }

    /// Merges two inventory slots. Equipment is untouched, so no stat
    /// recompute is needed.
    pub fn merge_items(&mut self, source: usize, target: usize) -> Option<Vec<InventoryEvent>> {
        self.inventory.merge_items(source, target)
    }

    // Area progression

    pub fn is_area_unlocked(&self, area_id: &str) -> bool {
        self.unlocked_areas.iter().any(|id| id == area_id)
    }

    /// Unlocks an area; returns false when it was already unlocked.
    pub fn unlock_area(&mut self, area_id: &str) -> bool {
        if self.is_area_unlocked(area_id) {
            return false;
        }
        self.unlocked_areas.push(area_id.to_string());
        true
    }

    /// Moves to an unlocked area; fails otherwise.
    pub fn set_area(&mut self, area_id: &str) -> bool {
        if self.is_area_unlocked(area_id) {
            self.current_area = area_id.to_string();
            return true;
        }
        false
    }

    pub fn is_boss_defeated(&self, area_id: &str) -> bool {
        self.defeated_bosses.iter().any(|id| id == area_id)
    }

    pub fn mark_boss_defeated(&mut self, area_id: &str) {
        if !self.is_boss_defeated(area_id) {
            self.defeated_bosses.push(area_id.to_string());
        }
    }

    pub fn unlocked_areas(&self) -> &[String] {
        &self.unlocked_areas
    }

    pub fn defeated_bosses(&self) -> &[String] {
        &self.defeated_bosses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_base_stats() {
        let player = Player::new();
        assert_eq!(player.level, 1);
        assert_eq!(player.max_hp, 50);
        assert_eq!(player.hp, 50);
        assert_eq!(player.atk, 5);
        assert_eq!(player.def, 2);
        assert_eq!(player.hp_regen, 1);
        assert_eq!(player.xp, 0);
        assert_eq!(player.xp_to_level, 50);
        assert_eq!(player.gold, 0);
        assert_eq!(player.current_area, "forest");
        assert!(player.is_area_unlocked("forest"));
        assert!(!player.is_area_unlocked("dark_caves"));
    }

    #[test]
    fn test_equip_and_unequip_adjust_atk() {
        // Level 1 player equips +5 atk, then unequips it again
        let mut player = Player::new();
        player.inventory.add_item("wooden_sword_uncommon"); // +5 atk
        assert!(player.equip_item(0));
        assert_eq!(player.atk, 10);

        assert!(player.unequip_item(EquipSlot::Weapon));
        assert_eq!(player.atk, 5);
    }

    #[test]
    fn test_recalculate_preserves_hp_fraction() {
        let mut player = Player::new();
        player.hp = 25; // half of 50

        player.inventory.add_item("health_ring"); // +25 max_hp
        assert!(player.equip_item(0));
        assert_eq!(player.max_hp, 75);
        // floor(25/50 * 75) = 37
        assert_eq!(player.hp, 37);

        assert!(player.unequip_item(EquipSlot::Accessory));
        assert_eq!(player.max_hp, 50);
        // floor(37/75 * 50) = 24
        assert_eq!(player.hp, 24);
    }

    #[test]
    fn test_recalculate_clamps_hp_to_new_max() {
        let mut player = Player::new();
        player.inventory.add_item("health_ring");
        assert!(player.equip_item(0));
        player.hp = player.max_hp;

        assert!(player.unequip_item(EquipSlot::Accessory));
        assert!(player.hp <= player.max_hp);
        assert_eq!(player.hp, 50);
    }

    #[test]
    fn test_level_bonuses_in_pipeline() {
        let mut player = Player::new();
        // 50 XP reaches exactly level 2
        assert_eq!(player.gain_xp(50), 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.max_hp, 60);
        assert_eq!(player.atk, 7);
        assert_eq!(player.def, 3);
        // Regen rises every second level
        assert_eq!(player.hp_regen, 1);

        assert_eq!(player.gain_xp(75), 1);
        assert_eq!(player.level, 3);
        assert_eq!(player.hp_regen, 2);
    }

    #[test]
    fn test_level_up_heals_to_full_and_raises_threshold() {
        let mut player = Player::new();
        player.hp = 1;
        assert_eq!(player.gain_xp(50), 1);
        assert_eq!(player.hp, player.max_hp);
        // 50 * 1.5 = 75
        assert_eq!(player.xp_to_level, 75);
        assert_eq!(player.xp, 0);
    }

    #[test]
    fn test_cascading_level_ups_in_one_grant() {
        let mut player = Player::new();
        // Thresholds: 50, 75, 112, 168... 300 XP crosses three of them
        let levelups = player.gain_xp(300);
        assert_eq!(levelups, 3);
        assert_eq!(player.level, 4);
        // 300 - 50 - 75 - 112 = 63, below the next threshold of 168
        assert_eq!(player.xp, 63);
        assert!(player.xp < player.xp_to_level);
        assert_eq!(player.xp_to_level, 168);
    }

    #[test]
    fn test_xp_below_threshold_does_not_level() {
        let mut player = Player::new();
        assert_eq!(player.gain_xp(49), 0);
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 49);
    }

    #[test]
    fn test_take_damage_applies_defense_with_floor() {
        let mut player = Player::new();
        // def 2: incoming 7 deals 5
        assert_eq!(player.take_damage(7), 5);
        assert_eq!(player.hp, 45);
        // incoming at or below def still deals 1
        assert_eq!(player.take_damage(1), 1);
        assert_eq!(player.hp, 44);
    }

    #[test]
    fn test_hp_clamps_at_zero() {
        let mut player = Player::new();
        player.take_damage(1000);
        assert_eq!(player.hp, 0);
        assert!(!player.is_alive());

        player.respawn();
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_regenerate_clamps_at_max() {
        let mut player = Player::new();
        player.hp = 49;
        player.regenerate(1000);
        assert_eq!(player.hp, 50);
        player.regenerate(2000);
        assert_eq!(player.hp, 50);
    }

    #[test]
    fn test_area_progression() {
        let mut player = Player::new();
        assert!(!player.set_area("dark_caves"));

        assert!(player.unlock_area("dark_caves"));
        // Unlocking twice is a no-op
        assert!(!player.unlock_area("dark_caves"));

        assert!(player.set_area("dark_caves"));
        assert_eq!(player.current_area, "dark_caves");
    }

    #[test]
    fn test_boss_defeat_tracking() {
        let mut player = Player::new();
        assert!(!player.is_boss_defeated("forest"));
        player.mark_boss_defeated("forest");
        assert!(player.is_boss_defeated("forest"));

        // Marking twice leaves a single entry
        player.mark_boss_defeated("forest");
        assert_eq!(player.defeated_bosses().len(), 1);
    }

    #[test]
    fn test_gold_accumulates() {
        let mut player = Player::new();
        player.gain_gold(5);
        player.gain_gold(10);
        assert_eq!(player.gold, 15);
    }
}
