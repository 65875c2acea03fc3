//! Scene event queue
//!
//! Lifecycle notifications produced during a frame and drained by the host
//! afterwards. The queue is strictly per-frame plumbing: events carry no
//! references, only indices into the creation-ordered lantern collection.

/// Why a spawn request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The click originated on overlay controls, not the interactive surface
    OffSurface,
    /// Spawning is currently paused by the user
    Paused,
    /// The collection is at the current capacity
    AtCapacity,
}

/// Scene lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// A lantern was appended at this index
    LanternSpawned {
        /// Index in creation order
        index: usize,
    },
    /// A spawn request was rejected
    SpawnRejected {
        /// Rejection cause
        reason: RejectReason,
    },
    /// A lantern finished its spawn-in ramp (fires once per lantern)
    LanternSettled {
        /// Index in creation order
        index: usize,
    },
    /// The collection was cleared
    CollectionCleared,
}

/// FIFO queue of pending scene events
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<SceneEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn send(&mut self, event: SceneEvent) {
        self.pending.push(event);
    }

    /// Drain all pending events in send order
    pub fn drain(&mut self) -> std::vec::Drain<'_, SceneEvent> {
        self.pending.drain(..)
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_send_order() {
        let mut queue = EventQueue::new();
        queue.send(SceneEvent::LanternSpawned { index: 0 });
        queue.send(SceneEvent::LanternSettled { index: 0 });
        queue.send(SceneEvent::CollectionCleared);

        let drained: Vec<SceneEvent> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                SceneEvent::LanternSpawned { index: 0 },
                SceneEvent::LanternSettled { index: 0 },
                SceneEvent::CollectionCleared,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_on_empty_queue() {
        let mut queue = EventQueue::new();
        assert_eq!(queue.drain().count(), 0);
    }
}
