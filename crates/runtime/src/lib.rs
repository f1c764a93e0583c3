//! Orchestration around the deterministic scheduling core.
//!
//! `tactics-runtime` wires the turn queue, world ports, and outcome
//! notifications into a cohesive API. Consumers embed [`CombatScheduler`]
//! to drive turns and [`AttackExecutor`] to resolve attacks, and subscribe
//! to the [`EventBus`] for presentation feedback.
//!
//! Modules are organized by responsibility:
//! - [`scheduler`] hosts the service façade owning the turn queue
//! - [`attack`] hosts the validated attack workflow
//! - [`oracle`] provides the port traits and an in-memory world adapter
//! - [`events`] provides the topic-based event bus for outcome routing
//!
//! Everything here is synchronous and single-threaded; the only async
//! machinery is the broadcast channel consumers drain on their own time.
pub mod attack;
pub mod events;
pub mod oracle;
pub mod scheduler;

pub use attack::{AttackError, AttackExecutor, AttackOutcome};
pub use events::{CombatEvent, Event, EventBus, Topic, TurnEvent};
pub use oracle::{
    ActorOracle, ActorSnapshot, DamagePort, GridOracle, InMemoryWorld, PortError, WorldActor,
    WorldPort,
};
pub use scheduler::{CombatScheduler, SchedulerError};
