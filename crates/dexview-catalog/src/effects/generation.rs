use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter shared by every list-replacing operation of a session.
///
/// Starting a load or search takes a [`GenerationTicket`]; starting a newer one
/// makes every older ticket stale, and results carried by a stale ticket are
/// dropped instead of rendered.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration {
    current: Arc<AtomicU64>,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding all outstanding tickets.
    pub fn begin(&self) -> GenerationTicket {
        let value = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationTicket {
            value,
            current: Arc::clone(&self.current),
        }
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationTicket {
    value: u64,
    current: Arc<AtomicU64>,
}

impl GenerationTicket {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// `false` once a newer generation has begun.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let generation = LoadGeneration::new();

        let first = generation.begin();
        assert!(first.is_current());

        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.value() > first.value());
        assert_eq!(generation.current(), second.value());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();

        generation.clone().begin();
        assert!(!ticket.is_current());
    }
}
