//! Combat scheduler service: the sole owner of the turn queue.
//!
//! Every other component, the attack workflow included, reaches the queue
//! through this façade. That keeps the queue's invariants behind one
//! mutation boundary and gives one place to log and notify.

use std::collections::HashMap;

use tracing::{debug, error, info};

use tactics_core::{
    ActorId, ErrorSeverity, GameError, Position, QueueError, QueueMode, ScheduledEntry, TimeValue,
    TurnQueue,
};

use crate::events::{Event, EventBus, TurnEvent};

/// Errors surfaced by the scheduler service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// A turn was requested from an empty schedule. The player entry should
    /// always exist, so this is an anomaly to report, not a quiet "none".
    #[error("turn requested but the schedule is empty")]
    ScheduleExhausted,

    #[error(transparent)]
    Queue(#[from] QueueError),
}

impl GameError for SchedulerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ScheduleExhausted => ErrorSeverity::Internal,
            Self::Queue(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ScheduleExhausted => "SCHEDULER_EXHAUSTED",
            Self::Queue(err) => err.error_code(),
        }
    }
}

/// Stateful façade over one [`TurnQueue`].
pub struct CombatScheduler {
    queue: TurnQueue,
    /// Last position each actor was scheduled with. Opaque pass-through
    /// context for event consumers; ordering never looks at it.
    positions: HashMap<ActorId, Position>,
    events: EventBus,
    player: ActorId,
}

impl CombatScheduler {
    /// Creates a scheduler in the exploration baseline: the player alone at
    /// time zero.
    pub fn new(player: ActorId, events: EventBus) -> Self {
        Self {
            queue: TurnQueue::with_player(player),
            positions: HashMap::new(),
            events,
            player,
        }
    }

    /// Schedules an actor at the given time.
    ///
    /// Entering the second actor transitions the schedule into combat.
    ///
    /// # Errors
    ///
    /// [`QueueError::AlreadyScheduled`] if the actor holds a live entry.
    pub fn schedule_actor(
        &mut self,
        actor: ActorId,
        position: Position,
        ready_at: TimeValue,
    ) -> Result<(), SchedulerError> {
        let was_in_combat = self.queue.is_in_combat();
        self.queue.schedule(actor, ready_at, actor == self.player)?;
        self.positions.insert(actor, position);

        debug!(%actor, %ready_at, ?position, "actor scheduled");
        if !was_in_combat && self.queue.is_in_combat() {
            info!(%actor, "combat starts");
        }
        Ok(())
    }

    /// Hands the next turn to whoever is due, removing their entry.
    ///
    /// The actor is expected to re-enter the schedule (via
    /// [`CombatScheduler::reschedule_actor`]) once its action cost is known.
    pub fn process_next_turn(&mut self) -> Result<ScheduledEntry, SchedulerError> {
        let entry = match self.queue.pop_next() {
            Ok(entry) => entry,
            Err(QueueError::EmptyQueue) => {
                error!("turn requested but the schedule is empty");
                return Err(SchedulerError::ScheduleExhausted);
            }
            Err(err) => return Err(err.into()),
        };

        let clock = self.queue.clock();
        debug!(actor = %entry.actor, %clock, "turn starts");
        self.events.publish(Event::Turn(TurnEvent {
            actor: entry.actor,
            clock,
            position: self.positions.get(&entry.actor).copied(),
        }));
        Ok(entry)
    }

    /// Ordered read-only snapshot of the schedule, soonest first.
    pub fn get_turn_order(&self) -> Vec<ScheduledEntry> {
        self.queue.scheduled_actors()
    }

    /// Empties the schedule entirely. Used between encounters and levels;
    /// the player must be re-entered before the next turn is requested.
    pub fn clear_schedule(&mut self) {
        self.queue.clear();
        self.positions.clear();
        info!("schedule cleared");
    }

    /// Removes an actor from the schedule (death, disengagement).
    ///
    /// Removing the last non-player entry ends combat and resets the player
    /// entry to time zero.
    pub fn remove_actor(&mut self, actor: ActorId) -> Result<ScheduledEntry, SchedulerError> {
        let was_in_combat = self.queue.is_in_combat();
        let entry = self.queue.remove(actor)?;
        self.positions.remove(&actor);

        debug!(%actor, "actor removed from schedule");
        if was_in_combat && !self.queue.is_in_combat() {
            info!("combat ends, back to exploration");
        }
        Ok(entry)
    }

    /// Re-enters an actor at a new time: moves its entry if one is live,
    /// inserts otherwise. This is how an actor that just acted (and was
    /// popped) rejoins the timeline.
    pub fn reschedule_actor(
        &mut self,
        actor: ActorId,
        ready_at: TimeValue,
    ) -> Result<(), SchedulerError> {
        if self.queue.contains(actor) {
            self.queue.reschedule(actor, ready_at)?;
        } else {
            self.queue.schedule(actor, ready_at, actor == self.player)?;
        }
        debug!(%actor, %ready_at, "actor rescheduled");
        Ok(())
    }

    pub fn clock(&self) -> TimeValue {
        self.queue.clock()
    }

    pub fn mode(&self) -> QueueMode {
        self.queue.mode()
    }

    pub fn is_in_combat(&self) -> bool {
        self.queue.is_in_combat()
    }

    pub fn is_scheduled(&self, actor: ActorId) -> bool {
        self.queue.contains(actor)
    }

    pub fn player(&self) -> ActorId {
        self.player
    }
}
