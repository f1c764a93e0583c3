//! Outbound notifications: fire-and-forget, consumed off the hot path.
//!
//! The scheduler and attack workflow publish here and move on; presentation
//! collaborators (health bars, removal animations, sound) subscribe and
//! react on their own schedule. Nothing in this crate ever awaits a
//! consumer.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{CombatEvent, TurnEvent};
