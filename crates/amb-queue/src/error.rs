use thiserror::Error;

use amb_core::EmergencyId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// The queue is bounded and full; the emergency was not enqueued.
    #[error("emergency queue is full (capacity {capacity}); {rejected} was rejected")]
    CapacityExceeded {
        capacity: usize,
        rejected: EmergencyId,
    },
}

pub type QueueResult<T> = Result<T, QueueError>;
