//! Overlord Rising — simulation core of an idle-clicker RPG.
//!
//! The player character automatically fights a stream of monsters, gains
//! experience, gold, and equipment, and clears boss-gated areas. This crate
//! is the pure simulation: timed combat, the derived-stat pipeline, the
//! inventory/upgrade state machine, and area progression. It has no
//! rendering dependency; a presentation layer drives [`core::GameEngine`]
//! with elapsed time and renders the [`core::GameEvent`]s it returns.

pub mod areas;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod shop;

pub use crate::character::Player;
pub use crate::core::{GameEngine, GameEvent};
