// Combat timing (virtual milliseconds)
pub const PLAYER_ATTACK_INTERVAL_MS: u64 = 1500;
pub const MONSTER_ATTACK_INTERVAL_MS: u64 = 2000;
pub const REGEN_INTERVAL_MS: u64 = 1000;

// Deferred-action delays
pub const PLAYER_RESPAWN_DELAY_MS: u64 = 3000;
pub const MONSTER_RESPAWN_DELAY_MS: u64 = 500;

// Player base stats
pub const BASE_MAX_HP: u32 = 50;
pub const BASE_ATK: u32 = 5;
pub const BASE_DEF: u32 = 2;
pub const BASE_HP_REGEN: u32 = 1;

// Per-level stat gains (applied per level above 1)
pub const MAX_HP_PER_LEVEL: u32 = 10;
pub const ATK_PER_LEVEL: u32 = 2;
pub const DEF_PER_LEVEL: u32 = 1;
// Regen rises one point every LEVELS_PER_HP_REGEN levels above 1
pub const LEVELS_PER_HP_REGEN: u32 = 2;

// XP and leveling
pub const XP_TO_FIRST_LEVEL: u64 = 50;
pub const XP_CURVE_FACTOR: f64 = 1.5;

// Inventory
pub const INVENTORY_CAPACITY: usize = 20;
pub const COMBINE_COST: u32 = 10;

// Manual strike deals this fraction of ATK as bonus damage
pub const MANUAL_STRIKE_ATK_FRACTION: f64 = 0.5;
