//! Deterministic turn-order scheduling core.
//!
//! `tactics-core` defines the canonical scheduling rules (time values, action
//! costs, the turn queue) and exposes pure APIs reused by the runtime and
//! offline tools. Everything here is synchronous, integer-only, and
//! bit-identical across platforms; the runtime crate layers ports, events,
//! and the attack workflow on top of the types re-exported here.
pub mod action;
pub mod config;
pub mod error;
pub mod queue;
pub mod state;
pub mod timing;

pub use action::{ActionKind, CombatAction};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError, ValidationError};
pub use queue::{QueueError, QueueMode, ScheduledEntry, TurnQueue};
pub use state::{ActorId, Position, ResourceMeter, TimeValue};
pub use timing::calculate_action_time;
