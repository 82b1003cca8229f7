//! Debounced customer-name suggestions for the draft search text.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc::UnboundedSender, watch};
use tokio::time::Instant;
use tracing::{debug, trace};

use truestate_client::{ClientError, SalesSource};
use truestate_model::{SalesPage, SalesQuery, TransactionRecord};

use crate::epoch::{Epoch, Generation};
use crate::message::Message;

/// Shortest trimmed draft that triggers a lookup.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Maximum number of suggestions shown.
pub const SUGGESTION_LIMIT: usize = 5;

/// Input silence required before a lookup is sent.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Turns draft keystrokes into at most one lookup per quiet period.
#[derive(Debug)]
pub struct SuggestionEngine<S> {
    source: Arc<S>,
    sender: UnboundedSender<Message>,
    committed: watch::Receiver<SalesQuery>,
    epoch: Epoch,
    suggestions: Vec<String>,
}

impl<S: SalesSource> SuggestionEngine<S> {
    /// Creates an engine that reports lookups through `sender`.
    ///
    /// Lookups take their filters and sort from `committed` when they fire.
    pub fn new(
        source: Arc<S>,
        sender: UnboundedSender<Message>,
        committed: watch::Receiver<SalesQuery>,
    ) -> Self {
        Self {
            source,
            sender,
            committed,
            epoch: Epoch::new(),
            suggestions: Vec::new(),
        }
    }

    /// Current suggestion list.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Starts a new debounce cycle for `draft_text`.
    ///
    /// Any earlier cycle is retired and the visible list is cleared. Text
    /// shorter than [`MIN_SUGGESTION_CHARS`] sends nothing. Otherwise a task
    /// waits out the debounce window, and if no newer keystroke arrived in
    /// the meantime, looks up `draft_text` with the filters and sort committed
    /// at that moment. Must be called within a Tokio runtime.
    pub fn schedule(&mut self, draft_text: &str) -> Option<Generation> {
        let ticket = self.epoch.advance();
        self.suggestions.clear();

        if draft_text.trim().chars().count() < MIN_SUGGESTION_CHARS {
            trace!("draft too short for suggestions");
            return None;
        }

        let generation = ticket.generation();
        let text = draft_text.to_string();
        let committed = self.committed.clone();
        let deadline = Instant::now() + SUGGESTION_DEBOUNCE;
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if !ticket.is_current() {
                trace!(%generation, "suggestion cycle superseded before firing");
                return;
            }
            let lookup = committed.borrow().lookup(&text, SUGGESTION_LIMIT as u32);
            debug!(%generation, search = lookup.search(), "looking up suggestions");
            let outcome = source.fetch_sales(&lookup).await;
            let _ = sender.send(Message::SuggestionsLoaded {
                generation,
                outcome,
            });
        });

        Some(generation)
    }

    /// Clears the list and retires any pending lookup.
    pub fn dismiss(&mut self) {
        self.epoch.invalidate();
        self.suggestions.clear();
    }

    /// Applies a finished lookup. Returns false when it was superseded.
    ///
    /// Failures clear the list without surfacing an error.
    pub fn apply(&mut self, generation: Generation, outcome: Result<SalesPage, ClientError>) -> bool {
        if !self.epoch.is_current(generation) {
            debug!(%generation, "discarding stale suggestions");
            return false;
        }
        self.suggestions = match outcome {
            Ok(page) => extract_suggestions(&page.data),
            Err(error) => {
                debug!(%error, "suggestion lookup failed");
                Vec::new()
            }
        };
        true
    }
}

/// Unique non-blank customer names in first-seen order, at most
/// [`SUGGESTION_LIMIT`] of them.
pub fn extract_suggestions(rows: &[TransactionRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(TransactionRecord::customer_name)
        .filter(|name| seen.insert(*name))
        .take(SUGGESTION_LIMIT)
        .map(str::to_string)
        .collect()
}
