use amb_core::{CoreError, EmergencyId};
use amb_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Intake refused because the bounded queue is full.  The emergency was
    /// not enqueued and will not be served.
    #[error("intake rejected: queue full (capacity {capacity}), {rejected} dropped")]
    CapacityExceeded {
        capacity: usize,
        rejected: EmergencyId,
    },

    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error("no dispatch center at index {0}")]
    UnknownCenter(usize),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<QueueError> for DispatchError {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::CapacityExceeded { capacity, rejected } => {
                DispatchError::CapacityExceeded { capacity, rejected }
            }
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
