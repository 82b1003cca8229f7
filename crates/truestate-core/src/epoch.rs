//! Generation counter for discarding superseded async results.
//!
//! Every time a new request of some kind is triggered, its [`Epoch`] is
//! advanced and the request carries the returned [`Ticket`]. Whoever applies
//! the result later asks whether the ticket's generation is still current;
//! if not, the result belongs to a request that has been superseded and is
//! dropped. Results are thereby applied in issuance order regardless of the
//! order in which responses arrive.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one triggered request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter shared between the state owner and its spawned tasks.
#[derive(Debug, Clone, Default)]
pub struct Epoch {
    current: Arc<AtomicU64>,
}

impl Epoch {
    /// Creates a counter at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, retiring every earlier ticket.
    pub fn advance(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            generation: Generation(generation),
            current: Arc::clone(&self.current),
        }
    }

    /// Retires every outstanding ticket without issuing a new one.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    /// The newest generation.
    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::Acquire))
    }

    /// Whether `generation` is still the newest one.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}

/// Proof of having been issued at a given generation.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Generation,
    current: Arc<AtomicU64>,
}

impl Ticket {
    /// Generation this ticket was issued at.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether no newer generation has started since issuance.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_retires_older() {
        let epoch = Epoch::new();
        let first = epoch.advance();
        assert!(first.is_current());

        let second = epoch.advance();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
        assert!(epoch.is_current(second.generation()));
    }

    #[test]
    fn invalidate_retires_without_issuing() {
        let epoch = Epoch::new();
        let ticket = epoch.advance();
        epoch.invalidate();
        assert!(!ticket.is_current());
        assert!(!epoch.is_current(ticket.generation()));
    }

    #[test]
    fn clones_share_the_counter() {
        let epoch = Epoch::new();
        let ticket = epoch.advance();
        epoch.clone().advance();
        assert!(!ticket.is_current());
    }
}
