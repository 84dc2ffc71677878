use crate::areas::data::BossSpec;
use crate::combat::data::MonsterTemplate;
use crate::core::constants::{MONSTER_ATTACK_INTERVAL_MS, REGEN_INTERVAL_MS};
use crate::items::DropEntry;
use serde::{Deserialize, Serialize};

/// Interval-gated action timing shared by the player and monsters.
///
/// An action is eligible once the virtual clock has moved at least one full
/// interval past the last recorded action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatTimers {
    pub attack_interval_ms: u64,
    pub regen_interval_ms: u64,
    pub last_attack_ms: u64,
    pub last_regen_ms: u64,
}

impl CombatTimers {
    pub fn new(attack_interval_ms: u64, regen_interval_ms: u64) -> Self {
        Self {
            attack_interval_ms,
            regen_interval_ms,
            last_attack_ms: 0,
            last_regen_ms: 0,
        }
    }

    pub fn can_attack(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_attack_ms) >= self.attack_interval_ms
    }

    pub fn record_attack(&mut self, now_ms: u64) {
        self.last_attack_ms = now_ms;
    }

    pub fn can_regen(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_regen_ms) >= self.regen_interval_ms
    }

    pub fn record_regen(&mut self, now_ms: u64) {
        self.last_regen_ms = now_ms;
    }
}

/// Damage that lands after defense. Every attack deals at least 1.
pub fn damage_after_defense(atk: u32, def: u32) -> u32 {
    atk.saturating_sub(def).max(1)
}

/// A monster encounter instance. Built from a template (or a template plus
/// an area's boss spec) and destroyed on death or area change.
#[derive(Debug, Clone)]
pub struct Monster {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub hp_regen: u32,
    pub xp_reward: u64,
    pub gold_reward: u64,
    pub drops: Vec<DropEntry>,
    pub is_boss: bool,
    /// Area whose boss this is; `None` for regular spawns
    pub area_id: Option<String>,
    pub timers: CombatTimers,
}

impl Monster {
    pub fn from_template(template: &MonsterTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            max_hp: template.hp,
            hp: template.hp,
            atk: template.atk,
            // Monsters have no defense
            def: 0,
            hp_regen: template.hp_regen,
            xp_reward: template.xp_reward,
            gold_reward: template.gold_reward,
            drops: template.drops.to_vec(),
            is_boss: false,
            area_id: None,
            timers: CombatTimers::new(MONSTER_ATTACK_INTERVAL_MS, REGEN_INTERVAL_MS),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies an incoming attack and returns the damage dealt.
    pub fn take_damage(&mut self, incoming_atk: u32) -> u32 {
        let damage = damage_after_defense(incoming_atk, self.def);
        self.hp = self.hp.saturating_sub(damage);
        damage
    }

    /// Restores HP by the regen rate, clamped to max, and stamps the timer.
    pub fn regenerate(&mut self, now_ms: u64) {
        if self.hp_regen > 0 && self.hp < self.max_hp {
            self.hp = (self.hp + self.hp_regen).min(self.max_hp);
        }
        self.timers.record_regen(now_ms);
    }
}

/// Builds an area's boss from its base monster template and boss spec.
/// Each stat is multiplied independently and floored; the catalogs stay
/// immutable. The boss carries the spec's own drop table.
pub fn build_boss(template: &MonsterTemplate, spec: &BossSpec, area_id: &str) -> Monster {
    Monster {
        name: spec.name.to_string(),
        max_hp: (template.hp as f64 * spec.hp_multiplier) as u32,
        hp: (template.hp as f64 * spec.hp_multiplier) as u32,
        atk: (template.atk as f64 * spec.atk_multiplier) as u32,
        def: 0,
        hp_regen: template.hp_regen,
        xp_reward: (template.xp_reward as f64 * spec.xp_multiplier) as u64,
        gold_reward: (template.gold_reward as f64 * spec.gold_multiplier) as u64,
        drops: spec.drops.to_vec(),
        is_boss: true,
        area_id: Some(area_id.to_string()),
        timers: CombatTimers::new(MONSTER_ATTACK_INTERVAL_MS, REGEN_INTERVAL_MS),
    }
}
