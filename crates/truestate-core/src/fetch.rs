//! Keeps the result set in step with the committed query.
//!
//! Each issued fetch advances the coordinator's [`Epoch`]. Only the outcome
//! of the newest fetch is applied; anything older is dropped when it arrives,
//! so a slow response for an abandoned query can never overwrite the result
//! of a later one.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use truestate_client::{ClientError, SalesSource};
use truestate_model::{ResultSet, SalesPage, SalesQuery};

use crate::epoch::{Epoch, Generation};
use crate::message::Message;

/// Loading flag, last error and last result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    /// Rows and total from the last completed fetch.
    pub results: ResultSet,
    /// Whether the newest fetch is still outstanding.
    pub loading: bool,
    /// User-facing message from the last failed fetch, cleared when a new
    /// one starts. Response bodies and transport details only go to the log.
    pub error: Option<String>,
}

/// Issues primary sales requests and applies their outcomes in order.
#[derive(Debug)]
pub struct FetchCoordinator<S> {
    source: Arc<S>,
    sender: UnboundedSender<Message>,
    epoch: Epoch,
    issued: Option<SalesQuery>,
    state: FetchState,
}

impl<S: SalesSource> FetchCoordinator<S> {
    /// Creates a coordinator that reports completions through `sender`.
    pub fn new(source: Arc<S>, sender: UnboundedSender<Message>) -> Self {
        Self {
            source,
            sender,
            epoch: Epoch::new(),
            issued: None,
            state: FetchState::default(),
        }
    }

    /// Current loading, error and result state.
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Issues a fetch if `query` differs from the last one sent.
    pub fn sync(&mut self, query: &SalesQuery) -> Option<Generation> {
        if self.issued.as_ref() == Some(query) {
            return None;
        }
        Some(self.issue(query))
    }

    /// Issues a fetch for `query` even if it was already sent.
    pub fn reload(&mut self, query: &SalesQuery) -> Generation {
        self.issue(query)
    }

    fn issue(&mut self, query: &SalesQuery) -> Generation {
        let ticket = self.epoch.advance();
        let generation = ticket.generation();
        self.issued = Some(query.clone());
        self.state.loading = true;
        self.state.error = None;

        debug!(%generation, page = query.page(), search = query.search(), "issuing sales fetch");

        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        let query = query.clone();
        tokio::spawn(async move {
            let outcome = source.fetch_sales(&query).await;
            let _ = sender.send(Message::SalesLoaded {
                generation,
                outcome,
            });
        });

        generation
    }

    /// Applies a finished fetch. Returns false when it was superseded.
    pub fn apply(&mut self, generation: Generation, outcome: Result<SalesPage, ClientError>) -> bool {
        if !self.epoch.is_current(generation) {
            debug!(%generation, "discarding stale sales response");
            return false;
        }
        match outcome {
            Ok(page) => {
                self.state.results = ResultSet::from(page);
                self.state.error = None;
            }
            Err(error) => {
                warn!(%error, "sales fetch failed");
                self.state.results = ResultSet::empty();
                self.state.error = Some(error.user_message().to_string());
            }
        }
        self.state.loading = false;
        true
    }
}
