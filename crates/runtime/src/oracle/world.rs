//! HashMap-backed world adapter implementing all three ports.

use std::collections::HashMap;

use tactics_core::{ActorId, Position, ResourceMeter};

use super::{ActorOracle, ActorSnapshot, DamagePort, GridOracle, PortError};

/// Full actor record held by [`InMemoryWorld`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldActor {
    pub position: Position,
    pub health: ResourceMeter,
    pub agility: i32,
    pub encumbrance: i32,
}

/// In-memory world state for tests, tools, and small embedders.
///
/// Larger games back the ports with their own entity store; this adapter
/// exists so the runtime is usable (and testable) standalone.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWorld {
    actors: HashMap<ActorId, WorldActor>,
}

impl InMemoryWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            actors: HashMap::new(),
        }
    }

    /// Place an actor at full health.
    pub fn spawn(
        &mut self,
        actor: ActorId,
        position: Position,
        max_health: u32,
        agility: i32,
        encumbrance: i32,
    ) {
        self.actors.insert(
            actor,
            WorldActor {
                position,
                health: ResourceMeter::full(max_health),
                agility,
                encumbrance,
            },
        );
    }

    /// Remove an actor entirely (death cleanup, disengagement).
    pub fn despawn(&mut self, actor: ActorId) -> Option<WorldActor> {
        self.actors.remove(&actor)
    }

    pub fn get(&self, actor: ActorId) -> Option<&WorldActor> {
        self.actors.get(&actor)
    }

    pub fn contains(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl GridOracle for InMemoryWorld {
    fn actor_position(&self, actor: ActorId) -> Option<Position> {
        self.actors.get(&actor).map(|a| a.position)
    }
}

impl ActorOracle for InMemoryWorld {
    fn actor(&self, actor: ActorId) -> Option<ActorSnapshot> {
        self.actors.get(&actor).map(|a| ActorSnapshot {
            health: a.health,
            agility: a.agility,
            encumbrance: a.encumbrance,
        })
    }
}

impl DamagePort for InMemoryWorld {
    fn apply_damage(&mut self, actor: ActorId, amount: u32) -> Result<(), PortError> {
        let record = self
            .actors
            .get_mut(&actor)
            .ok_or(PortError::ActorNotFound(actor))?;
        record.health.apply_damage(amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut world = InMemoryWorld::new();
        world.spawn(ActorId(7), Position::ORIGIN, 5, 50, 0);

        world.apply_damage(ActorId(7), 15).unwrap();

        let snapshot = world.actor(ActorId(7)).unwrap();
        assert_eq!(snapshot.health.current, 0);
        assert!(!snapshot.is_alive());
    }

    #[test]
    fn damaging_a_missing_actor_is_a_port_error() {
        let mut world = InMemoryWorld::new();
        assert_eq!(
            world.apply_damage(ActorId(9), 1),
            Err(PortError::ActorNotFound(ActorId(9)))
        );
    }
}
