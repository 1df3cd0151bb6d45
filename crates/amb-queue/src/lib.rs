//! `amb-queue`: the backlog of emergencies waiting for a vehicle.
//!
//! # Crate layout
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`queue`] | `EmergencyQueue`, `QueueKey`                      |
//! | [`error`] | `QueueError`, `QueueResult<T>`                    |
//!
//! # Ordering
//!
//! Best-first means: lowest `priority` number first, then earliest
//! `created_at`, then lowest id.  Ids are handed out in arrival order, so the
//! last key only separates emergencies received in the same tick and never
//! introduces randomness.

pub mod error;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{QueueError, QueueResult};
pub use queue::{EmergencyQueue, QueueKey};
