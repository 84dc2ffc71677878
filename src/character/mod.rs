//! Player character state and progression.

pub mod player;

pub use player::Player;
