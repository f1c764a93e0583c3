//! Attack execution workflow: validate, apply damage, reschedule, notify.
//!
//! The workflow is strictly sequential and fail-fast. Every validation —
//! both positions, adjacency, target alive, attacker ≠ target — plus the
//! attacker's stat snapshot and cost calculation happens before the damage
//! mutation, so a rejected attack leaves the queue and every actor
//! byte-for-byte unchanged. After a successful hit the attacker always
//! re-enters the schedule at `clock + cost`, even if the hit killed the
//! target: the time was spent either way.

use tracing::debug;

use tactics_core::{
    ActorId, CombatAction, ErrorSeverity, GameError, Position, ResourceMeter, TimeValue,
    ValidationError, calculate_action_time,
};

use crate::events::{CombatEvent, Event, EventBus};
use crate::oracle::{PortError, WorldPort};
use crate::scheduler::{CombatScheduler, SchedulerError};

/// Errors that can occur while executing an attack.
///
/// The first four variants are game-rule rejections; the wrapped variants
/// propagate infrastructure failures from the ports and the scheduler.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    /// Attacker or target is missing from the grid or the actor store.
    #[error("actor {0} is not on the grid")]
    NotFound(ActorId),

    /// Melee needs a Chebyshev distance of exactly 1 (diagonals included).
    #[error("target out of reach (distance {distance}, need exactly 1)")]
    NotAdjacent { distance: u32 },

    /// The target is already dead.
    #[error("target {0} is already dead")]
    TargetDead(ActorId),

    /// An actor cannot attack itself.
    #[error("actor {0} cannot target itself")]
    SelfTarget(ActorId),

    #[error(transparent)]
    InvalidStats(#[from] ValidationError),

    #[error(transparent)]
    Damage(#[from] PortError),

    #[error(transparent)]
    Reschedule(#[from] SchedulerError),
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::NotAdjacent { .. } | Self::SelfTarget(_) => {
                ErrorSeverity::Validation
            }
            Self::TargetDead(_) => ErrorSeverity::Recoverable,
            Self::InvalidStats(err) => err.severity(),
            Self::Damage(err) => err.severity(),
            Self::Reschedule(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ATTACK_ACTOR_NOT_FOUND",
            Self::NotAdjacent { .. } => "ATTACK_NOT_ADJACENT",
            Self::TargetDead(_) => "ATTACK_TARGET_DEAD",
            Self::SelfTarget(_) => "ATTACK_SELF_TARGET",
            Self::InvalidStats(err) => err.error_code(),
            Self::Damage(err) => err.error_code(),
            Self::Reschedule(err) => err.error_code(),
        }
    }
}

/// Complete outcome of a successful attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: ActorId,
    pub target: ActorId,
    /// Damage requested of the mutation port (pre-clamp).
    pub damage: u32,
    /// Target health after the hit.
    pub target_health: ResourceMeter,
    pub target_died: bool,
    /// When the attacker acts again.
    pub next_turn_at: TimeValue,
}

/// Executes attacks against a world reached through ports.
///
/// Borrows the scheduler for the duration of a combat exchange; the world
/// ports are passed per call so callers keep ownership of their store.
pub struct AttackExecutor<'a> {
    scheduler: &'a mut CombatScheduler,
    events: EventBus,
}

impl<'a> AttackExecutor<'a> {
    pub fn new(scheduler: &'a mut CombatScheduler, events: EventBus) -> Self {
        Self { scheduler, events }
    }

    /// Runs the full attack workflow.
    ///
    /// # Errors
    ///
    /// Game-rule rejections ([`AttackError::NotFound`],
    /// [`AttackError::NotAdjacent`], [`AttackError::TargetDead`],
    /// [`AttackError::SelfTarget`], [`AttackError::InvalidStats`]) are
    /// returned before anything is mutated. Port and scheduler failures
    /// after the damage step propagate verbatim.
    pub fn execute(
        &mut self,
        world: &mut dyn WorldPort,
        attacker: ActorId,
        target: ActorId,
        action: &CombatAction,
    ) -> Result<AttackOutcome, AttackError> {
        let (target_pos, hp_before, cost) =
            Self::validate(world, attacker, target, action)?;

        world.apply_damage(target, action.base_damage())?;

        // The attacker spent its turn no matter what the hit did.
        let next_turn_at = self.scheduler.clock().saturating_add(cost);
        self.scheduler.reschedule_actor(attacker, next_turn_at)?;

        let after = world.actor(target).ok_or(AttackError::NotFound(target))?;
        let target_died = !after.is_alive();

        debug!(
            %attacker, %target,
            damage = action.base_damage(),
            hp_after = after.health.current,
            %next_turn_at,
            "attack lands"
        );
        self.events.publish(Event::Combat(CombatEvent::ActorDamaged {
            actor: target,
            amount: action.base_damage(),
            hp_before,
            hp_after: after.health.current,
            source: Some(attacker),
        }));
        if target_died {
            self.events.publish(Event::Combat(CombatEvent::ActorDied {
                actor: target,
                position: target_pos,
                killer: Some(attacker),
            }));
        }

        Ok(AttackOutcome {
            attacker,
            target,
            damage: action.base_damage(),
            target_health: after.health,
            target_died,
            next_turn_at,
        })
    }

    /// All read-side checks, in order; touches no state. Returns the target
    /// position, its pre-hit health, and the attacker's action cost.
    fn validate(
        world: &dyn WorldPort,
        attacker: ActorId,
        target: ActorId,
        action: &CombatAction,
    ) -> Result<(Position, u32, TimeValue), AttackError> {
        let attacker_pos = world
            .actor_position(attacker)
            .ok_or(AttackError::NotFound(attacker))?;
        let target_pos = world
            .actor_position(target)
            .ok_or(AttackError::NotFound(target))?;

        let distance = attacker_pos.chebyshev_distance(target_pos);
        if distance != 1 {
            return Err(AttackError::NotAdjacent { distance });
        }

        let target_state = world.actor(target).ok_or(AttackError::NotFound(target))?;
        if !target_state.is_alive() {
            return Err(AttackError::TargetDead(target));
        }

        if attacker == target {
            return Err(AttackError::SelfTarget(attacker));
        }

        let attacker_state = world
            .actor(attacker)
            .ok_or(AttackError::NotFound(attacker))?;
        let cost = calculate_action_time(
            action,
            attacker_state.agility,
            attacker_state.encumbrance,
        )?;

        Ok((target_pos, target_state.health.current, cost))
    }
}
