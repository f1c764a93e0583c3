//! Shared state primitives: identities, positions, time, resource meters.
mod common;

pub use common::{ActorId, Position, ResourceMeter, TimeValue};
