//! `EmergencyQueue`: ordered backlog of pending emergencies.
//!
//! `BTreeMap` keyed by [`QueueKey`] gives O(log n) push and pop, and an
//! in-order iteration that serves [`peek_all`](EmergencyQueue::peek_all)
//! without cloning or rebuilding a heap.

use std::collections::BTreeMap;

use amb_core::{Emergency, EmergencyId, SimTime};

use crate::{QueueError, QueueResult};

/// Sort key: priority, then intake time, then id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueueKey {
    pub priority: u8,
    pub created_at: SimTime,
    pub id: EmergencyId,
}

impl QueueKey {
    pub fn of(e: &Emergency) -> Self {
        Self {
            priority: e.priority,
            created_at: e.created_at,
            id: e.id,
        }
    }
}

/// Pending emergencies in best-first order.
///
/// Optionally bounded: with a capacity set, [`push`](Self::push) refuses new
/// entries once full.  [`requeue`](Self::requeue) ignores the bound because
/// it only ever returns entries that were drained from this queue.
#[derive(Debug, Default)]
pub struct EmergencyQueue {
    inner: BTreeMap<QueueKey, Emergency>,
    capacity: Option<usize>,
}

impl EmergencyQueue {
    /// An unbounded queue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            inner: BTreeMap::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Add an emergency to the backlog.
    ///
    /// # Errors
    ///
    /// [`QueueError::CapacityExceeded`] if the queue is bounded and full.
    /// The queue is left unchanged.
    pub fn push(&mut self, emergency: Emergency) -> QueueResult<()> {
        if let Some(capacity) = self.capacity {
            if self.inner.len() >= capacity {
                return Err(QueueError::CapacityExceeded {
                    capacity,
                    rejected: emergency.id,
                });
            }
        }
        self.insert(emergency);
        Ok(())
    }

    /// Put back an emergency previously taken out of this queue.
    ///
    /// Its original priority and timestamp are kept, so it lands exactly
    /// where it was before.
    pub fn requeue(&mut self, emergency: Emergency) {
        self.insert(emergency);
    }

    /// Remove and return the best-ranked emergency, or `None` if the backlog
    /// is empty.
    pub fn pop_best(&mut self) -> Option<Emergency> {
        self.inner.pop_first().map(|(_, e)| e)
    }

    /// Remove every pending emergency, best first.
    pub fn drain_ordered(&mut self) -> Vec<Emergency> {
        std::mem::take(&mut self.inner).into_values().collect()
    }

    /// Best-ranked emergency without removing it.
    pub fn peek_best(&self) -> Option<&Emergency> {
        self.inner.values().next()
    }

    /// Copies of all pending emergencies, best first.  Does not modify the
    /// queue.
    pub fn peek_all(&self) -> Vec<Emergency> {
        self.inner.values().cloned().collect()
    }

    /// Borrowing iterator in best-first order.
    pub fn iter(&self) -> impl Iterator<Item = &Emergency> {
        self.inner.values()
    }

    pub fn contains(&self, id: EmergencyId) -> bool {
        self.inner.keys().any(|k| k.id == id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, emergency: Emergency) {
        self.inner.insert(QueueKey::of(&emergency), emergency);
    }
}
