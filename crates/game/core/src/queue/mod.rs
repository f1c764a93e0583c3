//! Turn queue: ordered scheduling of actors on the shared timeline.
//!
//! The queue is the single authority on "who acts next". Entries are ordered
//! by `(ready_at ascending, player before non-player, insertion order)`; the
//! first two rules are gameplay semantics, the third keeps non-player ties
//! deterministic across runs.
//!
//! The queue doubles as a two-state machine derived from its entry count:
//! exactly one entry (the player) is Exploration, two or more is Combat.
//! Removing the last non-player entry transitions back to Exploration and
//! resets the surviving player entry and the clock to time zero.
//!
//! # Structure
//!
//! Array-backed binary min-heap plus an `ActorId → slot` side map, so
//! `schedule`, `pop_next`, `remove`, and `reschedule` are all O(log n) and
//! any entry is addressable by identity without a scan. `reschedule` always
//! removes and reinserts; keys are never mutated in place.

use std::collections::HashMap;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, TimeValue};

/// Errors that can occur during queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueError {
    /// The actor already holds a live entry; identities are unique.
    #[error("actor {0} is already scheduled")]
    AlreadyScheduled(ActorId),

    /// No live entry for this actor.
    #[error("actor {0} is not scheduled")]
    NotFound(ActorId),

    /// The queue holds no entries at all.
    #[error("turn queue is empty")]
    EmptyQueue,
}

impl GameError for QueueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyScheduled(_) | Self::NotFound(_) => ErrorSeverity::Validation,
            // The player entry should always exist; an empty queue means a
            // collaborator cleared the schedule and never re-entered anyone.
            Self::EmptyQueue => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyScheduled(_) => "QUEUE_ALREADY_SCHEDULED",
            Self::NotFound(_) => "QUEUE_NOT_FOUND",
            Self::EmptyQueue => "QUEUE_EMPTY",
        }
    }
}

/// Queue state derived from the entry count; never stored independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum QueueMode {
    /// Single entry: the player moving freely through the world.
    Exploration,
    /// Two or more entries: turn-based combat.
    Combat,
}

/// A live scheduling entry: who acts, when, and whether they are the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledEntry {
    pub actor: ActorId,
    pub ready_at: TimeValue,
    pub is_player: bool,
    /// Monotone insertion counter; breaks ties among non-player entries.
    #[cfg_attr(feature = "serde", serde(skip))]
    seq: u64,
}

impl ScheduledEntry {
    /// Total ordering key: time, then player-before-non-player, then
    /// insertion order. No two live entries compare equal (`seq` is unique).
    fn sort_key(&self) -> (TimeValue, bool, u64) {
        (self.ready_at, !self.is_player, self.seq)
    }
}

/// Priority scheduler over [`ScheduledEntry`] values.
#[derive(Clone, Debug)]
pub struct TurnQueue {
    /// Binary min-heap ordered by [`ScheduledEntry::sort_key`].
    entries: Vec<ScheduledEntry>,
    /// Actor identity to heap slot. Mirrors `entries` exactly.
    slots: HashMap<ActorId, usize>,
    /// Advanced to the popped entry's time by [`TurnQueue::pop_next`].
    clock: TimeValue,
    next_seq: u64,
}

impl TurnQueue {
    /// Creates a queue in the Exploration baseline: the player alone,
    /// scheduled at time zero.
    pub fn with_player(player: ActorId) -> Self {
        let mut queue = Self {
            entries: Vec::with_capacity(GameConfig::MAX_SCHEDULED_ACTORS),
            slots: HashMap::with_capacity(GameConfig::MAX_SCHEDULED_ACTORS),
            clock: TimeValue::ZERO,
            next_seq: 0,
        };
        queue.insert_entry(player, TimeValue::ZERO, true);
        queue
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// [`QueueError::AlreadyScheduled`] if the actor holds a live entry;
    /// the queue is left unchanged.
    pub fn schedule(
        &mut self,
        actor: ActorId,
        ready_at: TimeValue,
        is_player: bool,
    ) -> Result<(), QueueError> {
        if self.slots.contains_key(&actor) {
            return Err(QueueError::AlreadyScheduled(actor));
        }
        self.insert_entry(actor, ready_at, is_player);
        Ok(())
    }

    /// Returns the entry that acts next without removing it.
    pub fn peek_next(&self) -> Result<&ScheduledEntry, QueueError> {
        self.entries.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the entry that acts next, advancing the clock to
    /// its scheduled time.
    pub fn pop_next(&mut self) -> Result<ScheduledEntry, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let entry = self.remove_at(0);
        self.clock = entry.ready_at;
        Ok(entry)
    }

    /// Removes an actor's entry by identity.
    ///
    /// Removing the last non-player entry ends combat: the surviving player
    /// entry and the clock are reset to time zero.
    pub fn remove(&mut self, actor: ActorId) -> Result<ScheduledEntry, QueueError> {
        let slot = *self.slots.get(&actor).ok_or(QueueError::NotFound(actor))?;
        let entry = self.remove_at(slot);

        if !entry.is_player && self.entries.len() == 1 && self.entries[0].is_player {
            self.entries[0].ready_at = TimeValue::ZERO;
            self.clock = TimeValue::ZERO;
        }

        Ok(entry)
    }

    /// Moves an actor's entry to a new time.
    ///
    /// Always remove-and-reinsert, never an in-place key edit, so the heap
    /// order can't be silently violated. The entry counts as a fresh
    /// insertion for non-player tie-breaking.
    pub fn reschedule(&mut self, actor: ActorId, ready_at: TimeValue) -> Result<(), QueueError> {
        let slot = *self.slots.get(&actor).ok_or(QueueError::NotFound(actor))?;
        let entry = self.remove_at(slot);
        self.insert_entry(entry.actor, ready_at, entry.is_player);
        Ok(())
    }

    pub fn contains(&self, actor: ActorId) -> bool {
        self.slots.contains_key(&actor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current timeline clock: the scheduled time of the last popped entry.
    pub fn clock(&self) -> TimeValue {
        self.clock
    }

    pub fn mode(&self) -> QueueMode {
        if self.entries.len() > 1 {
            QueueMode::Combat
        } else {
            QueueMode::Exploration
        }
    }

    /// True while two or more actors share the timeline.
    pub fn is_in_combat(&self) -> bool {
        self.entries.len() > 1
    }

    /// Owned snapshot of all entries in acting order. Mutating the snapshot
    /// has no effect on the queue.
    pub fn scheduled_actors(&self) -> Vec<ScheduledEntry> {
        let mut snapshot = self.entries.clone();
        snapshot.sort_by_key(ScheduledEntry::sort_key);
        snapshot
    }

    /// Drops every entry (player included) and resets the clock. Used by the
    /// owning service between encounters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
        self.clock = TimeValue::ZERO;
    }

    // ========================================================================
    // Heap internals
    // ========================================================================

    fn insert_entry(&mut self, actor: ActorId, ready_at: TimeValue, is_player: bool) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let slot = self.entries.len();
        self.entries.push(ScheduledEntry {
            actor,
            ready_at,
            is_player,
            seq,
        });
        self.slots.insert(actor, slot);
        self.sift_up(slot);
    }

    /// Removes the entry at `slot`. Caller guarantees `slot` is in bounds
    /// (it always comes from `slots` or a non-empty check).
    fn remove_at(&mut self, slot: usize) -> ScheduledEntry {
        let last = self.entries.len() - 1;
        self.entries.swap(slot, last);
        if slot < last {
            self.slots.insert(self.entries[slot].actor, slot);
        }

        let entry = self.entries.swap_remove(last);
        self.slots.remove(&entry.actor);

        if slot < self.entries.len() {
            self.sift_down(slot);
            self.sift_up(slot);
        }

        debug_assert_eq!(
            self.entries.len(),
            self.slots.len(),
            "heap and identity index must stay in lockstep"
        );
        entry
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].sort_key() < self.entries[parent].sort_key() {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = slot * 2 + 1;
            if left >= self.entries.len() {
                break;
            }

            let right = left + 1;
            let mut smallest = left;
            if right < self.entries.len()
                && self.entries[right].sort_key() < self.entries[left].sort_key()
            {
                smallest = right;
            }

            if self.entries[smallest].sort_key() < self.entries[slot].sort_key() {
                self.swap_slots(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots.insert(self.entries[a].actor, a);
        self.slots.insert(self.entries[b].actor, b);
    }
}
