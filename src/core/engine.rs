//! The combat/progression engine.
//!
//! Owns the player, the active monster, and virtual time, and runs the
//! tick-driven combat state machine: interval-gated attacks and regen,
//! death handling with reward and drop rolls, deferred respawns, area and
//! boss gating, and the global speed multiplier. One external driver calls
//! `on_tick` with elapsed wall time; every operation reports what happened
//! as a list of [`GameEvent`]s and all randomness comes from the injected
//! `Rng`.

use crate::areas::data::{get_area, next_area};
use crate::character::Player;
use crate::combat::data::get_monster;
use crate::combat::types::{build_boss, Monster};
use crate::core::clock::{PendingAction, Scheduler, VirtualClock};
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::items::inventory::InventoryEvent;
use crate::items::{get_item, EquipSlot};
use crate::shop::offer_for;
use rand::Rng;

pub struct GameEngine {
    player: Player,
    monster: Option<Monster>,
    clock: VirtualClock,
    scheduler: Scheduler,
    speed: f64,
    in_combat: bool,
    game_completed: bool,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            monster: None,
            clock: VirtualClock::new(),
            scheduler: Scheduler::new(),
            speed: 1.0,
            in_combat: true,
            game_completed: false,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_in_combat(&self) -> bool {
        self.in_combat
    }

    pub fn is_fighting_boss(&self) -> bool {
        self.monster.as_ref().is_some_and(|m| m.is_boss)
    }

    pub fn is_game_completed(&self) -> bool {
        self.game_completed
    }

    /// Scales the passage of simulated time. 0 freezes every timer.
    pub fn set_speed(&mut self, multiplier: f64) {
        self.speed = multiplier.max(0.0);
    }

    /// Advances the simulation by one tick of elapsed wall time.
    pub fn on_tick(&mut self, elapsed_ms: u64, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.speed <= 0.0 {
            return events;
        }
        self.clock.advance((elapsed_ms as f64 * self.speed) as u64);
        let now = self.clock.now_ms();

        for action in self.scheduler.drain_due(now) {
            match action {
                PendingAction::RevivePlayer => {
                    self.player.respawn();
                    self.in_combat = true;
                    events.push(GameEvent::PlayerRespawned);
                }
                // Draining clears the pending entry; the spawn check below
                // does the actual work
                PendingAction::RespawnMonster => {}
            }
        }

        if let Some(event) = self.spawn_monster_if_needed(rng) {
            events.push(event);
        }

        if !self.in_combat {
            return events;
        }

        // Player auto-attack
        let mut monster_died = false;
        if let Some(monster) = self.monster.as_mut() {
            if self.player.timers.can_attack(now) {
                let damage = monster.take_damage(self.player.atk);
                self.player.timers.record_attack(now);
                events.push(GameEvent::PlayerAttack { damage });
                monster_died = !monster.is_alive();
            }
        }
        if monster_died {
            self.handle_monster_death(now, rng, &mut events);
        }

        // Monster auto-attack, only while one is still alive
        if let Some(monster) = self.monster.as_mut() {
            if monster.timers.can_attack(now) {
                let damage = self.player.take_damage(monster.atk);
                monster.timers.record_attack(now);
                events.push(GameEvent::MonsterAttack { damage });
            }
        }
        if !self.player.is_alive() {
            self.in_combat = false;
            events.push(GameEvent::PlayerDefeated);
            self.scheduler
                .schedule(now + PLAYER_RESPAWN_DELAY_MS, PendingAction::RevivePlayer);
            return events;
        }

        // Regeneration, independent of the attack checks
        if self.player.timers.can_regen(now) {
            self.player.regenerate(now);
        }
        if let Some(monster) = self.monster.as_mut() {
            if monster.timers.can_regen(now) {
                monster.regenerate(now);
            }
        }

        events
    }

    /// Player-initiated bonus hit at a fraction of ATK. Blocked while
    /// paused, defeated, or between encounters.
    pub fn on_manual_strike(&mut self, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.speed <= 0.0 || !self.in_combat {
            return events;
        }
        let Some(monster) = self.monster.as_mut() else {
            return events;
        };

        let bonus_atk = ((self.player.atk as f64 * MANUAL_STRIKE_ATK_FRACTION) as u32).max(1);
        let damage = monster.take_damage(bonus_atk);
        events.push(GameEvent::PlayerAttack { damage });

        if !monster.is_alive() {
            let now = self.clock.now_ms();
            self.handle_monster_death(now, rng, &mut events);
        }
        events
    }

    /// Switches to an already-unlocked area. Destroys the current
    /// encounter, voids any pending respawn, and starts a fresh one.
    pub fn toggle_area(&mut self, area_id: &str, rng: &mut impl Rng) -> bool {
        if area_id == self.player.current_area {
            return false;
        }
        if get_area(area_id).is_none() || !self.player.set_area(area_id) {
            return false;
        }

        self.monster = None;
        self.scheduler.cancel(PendingAction::RespawnMonster);
        if self.in_combat {
            // Presentation reads the fresh encounter from state
            let _ = self.spawn_monster_if_needed(rng);
        }
        true
    }

    /// Starts the boss fight of the player's current area. Blocked while a
    /// boss fight is active, once the boss is defeated, and for any area
    /// that is not the current one.
    pub fn request_boss_fight(&mut self, area_id: &str) -> bool {
        if self.is_fighting_boss()
            || area_id != self.player.current_area
            || self.player.is_boss_defeated(area_id)
        {
            return false;
        }
        let Some(area) = get_area(area_id) else {
            return false;
        };
        let Some(template) = get_monster(area.boss.base_monster) else {
            log::warn!(
                "boss of area {} derives from unknown monster {}",
                area_id,
                area.boss.base_monster
            );
            return false;
        };

        let now = self.clock.now_ms();
        let mut boss = build_boss(&template, &area.boss, area_id);
        boss.timers.record_attack(now);
        boss.timers.record_regen(now);
        self.scheduler.cancel(PendingAction::RespawnMonster);
        self.monster = Some(boss);
        true
    }

    /// Buys a shop offer: debits gold and adds the item. Fails on an
    /// unknown offer, insufficient gold, or a full inventory.
    pub fn buy_item(&mut self, item_id: &str) -> bool {
        let Some(offer) = offer_for(item_id) else {
            return false;
        };
        if self.player.gold < offer.price || !self.player.inventory.add_item(item_id) {
            return false;
        }
        self.player.gold -= offer.price;
        true
    }

    /// Equips the item held at an inventory index.
    pub fn equip_item(&mut self, index: usize) -> bool {
        self.player.equip_item(index)
    }

    /// Unequips the given slot type.
    pub fn unequip_item(&mut self, slot: EquipSlot) -> bool {
        self.player.unequip_item(slot)
    }

    /// Merges two inventory slots; reports any tier upgrades that fired.
    pub fn merge_items(&mut self, source: usize, target: usize) -> Option<Vec<GameEvent>> {
        self.player.merge_items(source, target).map(|events| {
            events
                .into_iter()
                .map(|event| match event {
                    InventoryEvent::ItemUpgraded { item_id } => {
                        GameEvent::ItemUpgraded { item_id }
                    }
                })
                .collect()
        })
    }

    /// Spawns a regular monster from the current area's pool when combat
    /// is active, no encounter exists, and no respawn is pending.
    fn spawn_monster_if_needed(&mut self, rng: &mut impl Rng) -> Option<GameEvent> {
        if !self.in_combat
            || self.monster.is_some()
            || self.scheduler.is_scheduled(PendingAction::RespawnMonster)
        {
            return None;
        }

        let area = match get_area(&self.player.current_area) {
            Some(area) => area,
            None => {
                log::warn!("player is in unknown area {}", self.player.current_area);
                return None;
            }
        };
        if area.monster_pool.is_empty() {
            return None;
        }
        let name = area.monster_pool[rng.gen_range(0..area.monster_pool.len())];
        let template = match get_monster(name) {
            Some(template) => template,
            None => {
                log::warn!("area {} pools unknown monster {}", area.id, name);
                return None;
            }
        };

        let now = self.clock.now_ms();
        let mut monster = Monster::from_template(&template);
        // A fresh encounter starts its intervals from the spawn instant
        monster.timers.record_attack(now);
        monster.timers.record_regen(now);
        let event = GameEvent::MonsterSpawned {
            name: monster.name.clone(),
            is_boss: false,
        };
        self.monster = Some(monster);
        Some(event)
    }

    /// Grants rewards, rolls drops, advances progression, and schedules
    /// the replacement spawn after a monster dies.
    fn handle_monster_death(&mut self, now: u64, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
        let Some(monster) = self.monster.take() else {
            return;
        };

        let levelups = self.player.gain_xp(monster.xp_reward);
        self.player.gain_gold(monster.gold_reward);
        events.push(GameEvent::MonsterDefeated {
            name: monster.name.clone(),
            xp_reward: monster.xp_reward,
            gold_reward: monster.gold_reward,
        });
        if levelups > 0 {
            events.push(GameEvent::LeveledUp {
                new_level: self.player.level,
            });
        }

        // Each entry rolls against its own chance; a failed add never rolls
        // back drops that already landed
        for drop in &monster.drops {
            if rng.gen::<f64>() >= drop.chance {
                continue;
            }
            if get_item(drop.item_id).is_none() {
                log::warn!("drop table references unknown item {}", drop.item_id);
                continue;
            }
            if self.player.inventory.add_item(drop.item_id) {
                events.push(GameEvent::ItemDropped {
                    item_id: drop.item_id.to_string(),
                });
            } else {
                events.push(GameEvent::InventoryFull {
                    item_id: drop.item_id.to_string(),
                });
            }
        }

        if monster.is_boss {
            if let Some(area_id) = monster.area_id.as_deref() {
                self.player.mark_boss_defeated(area_id);
                events.push(GameEvent::BossDefeated {
                    area_id: area_id.to_string(),
                });
                match next_area(area_id) {
                    Some(next) => {
                        if self.player.unlock_area(next.id) {
                            log::info!("area {} unlocked", next.id);
                            events.push(GameEvent::AreaUnlocked {
                                area_id: next.id.to_string(),
                            });
                        }
                    }
                    None => {
                        self.game_completed = true;
                        events.push(GameEvent::GameCompleted);
                    }
                }
            }
        }

        self.scheduler
            .schedule(now + MONSTER_RESPAWN_DELAY_MS, PendingAction::RespawnMonster);
    }
}
