//! Port traits for world data the combat runtime reads and mutates.
//!
//! The scheduler and attack workflow never own actor records or grid
//! layout; they reach them through these seams so the surrounding game can
//! back them with whatever store it likes. Read ports hand out snapshots,
//! the single mutation port applies damage.
mod world;

pub use world::{InMemoryWorld, WorldActor};

use tactics_core::{ActorId, ErrorSeverity, GameError, Position, ResourceMeter};

/// Read port for actor placement on the grid.
pub trait GridOracle {
    /// Returns the actor's current position, if it is on the grid.
    fn actor_position(&self, actor: ActorId) -> Option<Position>;
}

/// Point-in-time view of an actor's combat-relevant state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorSnapshot {
    pub health: ResourceMeter,
    pub agility: i32,
    pub encumbrance: i32,
}

impl ActorSnapshot {
    /// Alive is derived from health, never stored separately.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

/// Read port for actor state snapshots.
pub trait ActorOracle {
    /// Returns a snapshot of the actor, if it exists.
    fn actor(&self, actor: ActorId) -> Option<ActorSnapshot>;
}

/// Failures from the backing world store. These are infrastructure
/// failures, not game-rule rejections, and are propagated verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("actor {0} not present in world state")]
    ActorNotFound(ActorId),
}

impl GameError for PortError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Only reachable after validation resolved the actor, so the
            // store and the oracles disagree.
            Self::ActorNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "PORT_ACTOR_NOT_FOUND",
        }
    }
}

/// Mutation port for actor health.
pub trait DamagePort {
    /// Applies `amount` damage to the actor, clamping health at zero.
    fn apply_damage(&mut self, actor: ActorId, amount: u32) -> Result<(), PortError>;
}

/// Everything the attack workflow needs from the world, as one borrow.
pub trait WorldPort: GridOracle + ActorOracle + DamagePort {}

impl<T: GridOracle + ActorOracle + DamagePort> WorldPort for T {}
