//! Events the engine reports to the presentation layer.
//!
//! The presentation layer maps these to floating text, log lines, and UI
//! refreshes. The simulation never touches presentation types; it only
//! returns event values from its operations.

/// A single observable event produced by an engine operation.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player hit the active monster (auto-attack or manual strike).
    PlayerAttack { damage: u32 },

    /// The active monster hit the player.
    MonsterAttack { damage: u32 },

    /// A new monster entered combat.
    MonsterSpawned { name: String, is_boss: bool },

    /// The active monster died and rewards were granted.
    MonsterDefeated {
        name: String,
        xp_reward: u64,
        gold_reward: u64,
    },

    /// A rolled drop landed in the inventory.
    ItemDropped { item_id: String },

    /// A rolled drop was forfeited because the inventory was full.
    InventoryFull { item_id: String },

    /// The player reached a new level (one event per grant, carrying the
    /// final level after any cascade).
    LeveledUp { new_level: u32 },

    /// A combine produced the next rarity tier of an item.
    ItemUpgraded { item_id: String },

    /// Defeating a boss opened the next area.
    AreaUnlocked { area_id: String },

    /// An area's boss went down for the first time or again.
    BossDefeated { area_id: String },

    /// The last area's boss fell; there is nothing left to unlock.
    GameCompleted,

    /// The player's HP reached zero; combat pauses for the respawn delay.
    PlayerDefeated,

    /// The defeat pause elapsed and combat resumed at full HP.
    PlayerRespawned,
}
