//! Event types for different topics.

use serde::{Deserialize, Serialize};
use tactics_core::{ActorId, Position, TimeValue};

/// Outcome notifications from the attack workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// An actor took damage.
    ActorDamaged {
        actor: ActorId,
        amount: u32,
        hp_before: u32,
        hp_after: u32,
        source: Option<ActorId>,
    },

    /// An actor's health reached zero. Removal from grid and schedule is
    /// the reacting collaborator's responsibility.
    ActorDied {
        actor: ActorId,
        position: Position,
        killer: Option<ActorId>,
    },
}

/// A turn was handed to an actor (lightweight).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Actor that acts in this turn.
    pub actor: ActorId,
    /// Clock value the schedule advanced to.
    pub clock: TimeValue,
    /// Last position the actor was scheduled with, if any. Pass-through
    /// context for presentation collaborators; never a scheduling input.
    pub position: Option<Position>,
}
