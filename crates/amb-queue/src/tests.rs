//! Unit tests for amb-queue.

use amb_core::{Emergency, EmergencyId, PatientInfo, Point, SimTime};

use crate::{EmergencyQueue, QueueError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn em(id: u64, priority: u8, created_at: f64) -> Emergency {
    Emergency {
        id: EmergencyId(id),
        priority,
        created_at: SimTime(created_at),
        location: Point::new(0.0, 0.0),
        patient: PatientInfo::new(format!("patient {id}")),
    }
}

fn ids(v: &[Emergency]) -> Vec<u64> {
    v.iter().map(|e| e.id.0).collect()
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn priority_then_age() {
        let mut q = EmergencyQueue::new();
        q.push(em(1, 3, 0.0)).unwrap();
        q.push(em(2, 2, 1.0)).unwrap();
        q.push(em(3, 1, 2.0)).unwrap();
        q.push(em(4, 2, 0.5)).unwrap();
        q.push(em(5, 1, 3.0)).unwrap();
        assert_eq!(ids(&q.peek_all()), vec![3, 5, 4, 2, 1]);
    }

    #[test]
    fn urgent_arrival_jumps_ahead() {
        let mut q = EmergencyQueue::new();
        for i in 1..=4 {
            q.push(em(i, 3, i as f64)).unwrap();
        }
        q.push(em(5, 1, 10.0)).unwrap();
        assert_eq!(q.peek_best().map(|e| e.id), Some(EmergencyId(5)));
    }

    #[test]
    fn same_timestamp_falls_back_to_arrival_order() {
        let mut q = EmergencyQueue::new();
        q.push(em(7, 2, 1.0)).unwrap();
        q.push(em(6, 2, 1.0)).unwrap();
        q.push(em(8, 2, 1.0)).unwrap();
        assert_eq!(ids(&q.peek_all()), vec![6, 7, 8]);
    }

    #[test]
    fn pop_best_in_order_then_empty() {
        let mut q = EmergencyQueue::new();
        q.push(em(1, 2, 0.0)).unwrap();
        q.push(em(2, 1, 1.0)).unwrap();
        assert_eq!(q.pop_best().map(|e| e.id.0), Some(2));
        assert_eq!(q.pop_best().map(|e| e.id.0), Some(1));
        assert!(q.pop_best().is_none());
        assert!(q.is_empty());
    }
}

// ── Non-destructive views ─────────────────────────────────────────────────────

#[cfg(test)]
mod views {
    use super::*;

    #[test]
    fn peek_all_does_not_mutate() {
        let mut q = EmergencyQueue::new();
        q.push(em(1, 2, 0.0)).unwrap();
        q.push(em(2, 1, 0.0)).unwrap();
        let first = q.peek_all();
        let second = q.peek_all();
        assert_eq!(first, second);
        assert_eq!(q.len(), 2);
        assert!(q.contains(EmergencyId(1)));
    }

    #[test]
    fn drain_then_requeue_restores_order() {
        let mut q = EmergencyQueue::new();
        q.push(em(1, 1, 0.0)).unwrap();
        q.push(em(2, 1, 1.0)).unwrap();
        q.push(em(3, 2, 0.5)).unwrap();
        let before = q.peek_all();

        let drained = q.drain_ordered();
        assert!(q.is_empty());
        assert_eq!(ids(&drained), vec![1, 2, 3]);

        for e in drained.into_iter().rev() {
            q.requeue(e);
        }
        assert_eq!(q.peek_all(), before);
    }
}

// ── Capacity ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use super::*;

    #[test]
    fn unbounded_by_default() {
        let mut q = EmergencyQueue::new();
        assert_eq!(q.capacity(), None);
        for i in 0..1000 {
            q.push(em(i, 3, i as f64)).unwrap();
        }
        assert_eq!(q.len(), 1000);
    }

    #[test]
    fn bounded_push_rejects_when_full() {
        let mut q = EmergencyQueue::with_capacity_limit(2);
        q.push(em(1, 3, 0.0)).unwrap();
        q.push(em(2, 3, 1.0)).unwrap();
        let err = q.push(em(3, 1, 2.0)).unwrap_err();
        assert_eq!(err, QueueError::CapacityExceeded { capacity: 2, rejected: EmergencyId(3) });
        assert_eq!(ids(&q.peek_all()), vec![1, 2]);
    }

    #[test]
    fn requeue_ignores_bound() {
        let mut q = EmergencyQueue::with_capacity_limit(1);
        q.push(em(1, 3, 0.0)).unwrap();
        q.requeue(em(2, 3, 1.0));
        assert_eq!(q.len(), 2);
    }
}
