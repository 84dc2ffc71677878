//! Engine internals: virtual time, balance constants, events, and the
//! tick-driven controller.

pub mod clock;
pub mod constants;
pub mod engine;
pub mod events;

pub use clock::{PendingAction, Scheduler, VirtualClock};
pub use constants::*;
pub use engine::GameEngine;
pub use events::GameEvent;
