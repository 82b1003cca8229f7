//! Session state for one dashboard.
//!
//! # Architecture
//!
//! [`Dashboard`] owns the single committed [`SalesQuery`], the [`Draft`],
//! and both request engines. User actions are plain methods; the query only
//! changes through its commit operations and every change is pushed to the
//! [`FetchCoordinator`]. Spawned requests report back as [`Message`]s on the
//! channel returned by [`Dashboard::new`], and the owner feeds them to
//! [`Dashboard::handle`]:
//!
//! ```ignore
//! let (mut dashboard, mut messages) = Dashboard::new(Arc::new(client));
//! dashboard.start();
//! while let Some(message) = messages.recv().await {
//!     match dashboard.handle(message) {
//!         DashboardUpdate::Results => render(dashboard.view()),
//!         DashboardUpdate::Suggestions => show(dashboard.suggestions()),
//!         DashboardUpdate::Stale => {}
//!     }
//! }
//! ```
//!
//! Fetch results and suggestions land in separate slots, so only ordering
//! within each kind matters.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::watch;
use tracing::debug;

use truestate_client::SalesSource;
use truestate_model::{DEFAULT_PAGE_LIMIT, FilterGroup, SalesQuery, SortField, SortOrder};

use crate::draft::{Draft, DraftFilters};
use crate::epoch::Generation;
use crate::fetch::{FetchCoordinator, FetchState};
use crate::message::Message;
use crate::suggest::SuggestionEngine;
use crate::view::ResultView;

/// Which part of the dashboard a handled message changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardUpdate {
    /// The table, loading flag or error changed.
    Results,
    /// The suggestion list changed.
    Suggestions,
    /// The message was superseded and dropped.
    Stale,
}

/// One user's dashboard session.
#[derive(Debug)]
pub struct Dashboard<S> {
    query: SalesQuery,
    committed: watch::Sender<SalesQuery>,
    draft: Draft,
    fetch: FetchCoordinator<S>,
    suggestions: SuggestionEngine<S>,
}

impl<S: SalesSource> Dashboard<S> {
    /// Creates a session with the default page size.
    ///
    /// Returns the dashboard and the receiver its requests report to.
    pub fn new(source: Arc<S>) -> (Self, UnboundedReceiver<Message>) {
        Self::with_limit(source, DEFAULT_PAGE_LIMIT)
    }

    /// Creates a session with a fixed page size.
    pub fn with_limit(source: Arc<S>, limit: u32) -> (Self, UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let query = SalesQuery::with_limit(limit);
        let (committed, watcher) = watch::channel(query.clone());
        let dashboard = Self {
            query,
            committed,
            draft: Draft::default(),
            fetch: FetchCoordinator::new(Arc::clone(&source), sender.clone()),
            suggestions: SuggestionEngine::new(source, sender, watcher),
        };
        (dashboard, receiver)
    }

    /// Issues the initial fetch.
    ///
    /// Spawns the request, so it must be called within a Tokio runtime.
    pub fn start(&mut self) -> Option<Generation> {
        self.fetch.sync(&self.query)
    }

    /// Committed query.
    pub fn query(&self) -> &SalesQuery {
        &self.query
    }

    /// Uncommitted edits.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current suggestion list.
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.suggestions()
    }

    /// Loading, error and result state.
    pub fn fetch_state(&self) -> &FetchState {
        self.fetch.state()
    }

    /// Table and pagination projection.
    pub fn view(&self) -> ResultView<'_> {
        ResultView::new(self.fetch.state(), &self.query)
    }

    /// Updates the draft search text and restarts the suggestion cycle.
    ///
    /// Spawns the debounced lookup, so it must be called within a Tokio runtime.
    pub fn edit_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.draft.search {
            return;
        }
        self.draft.search = text;
        self.suggestions.schedule(&self.draft.search);
    }

    /// Commits the draft search text.
    ///
    /// Spawns the request, so it must be called within a Tokio runtime.
    pub fn submit_search(&mut self) {
        self.suggestions.dismiss();
        let next = self.query.submit_search(&self.draft.search);
        self.commit(next);
    }

    /// Puts the suggestion at `index` into the search box and commits it.
    ///
    /// Returns false when there is no such suggestion.
    ///
    /// Must be called within a Tokio runtime.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(name) = self.suggestions.suggestions().get(index).cloned() else {
            return false;
        };
        self.draft.search = name;
        self.submit_search();
        true
    }

    /// Flips a draft filter checkbox. Returns whether it is now selected.
    pub fn toggle_filter(&mut self, group: FilterGroup, value: &str) -> bool {
        self.draft.filters.toggle(group, value)
    }

    /// Sets the draft "from" date.
    pub fn set_start_date(&mut self, raw: impl Into<String>) {
        self.draft.filters.set_start_date(raw);
    }

    /// Sets the draft "to" date.
    pub fn set_end_date(&mut self, raw: impl Into<String>) {
        self.draft.filters.set_end_date(raw);
    }

    /// Commits the draft filters.
    ///
    /// Spawns the request, so it must be called within a Tokio runtime.
    pub fn apply_filters(&mut self) {
        let next = self.query.apply_filters(self.draft.filters.to_filters());
        self.commit(next);
    }

    /// Commits a new sort.
    ///
    /// Spawns the request, so it must be called within a Tokio runtime.
    pub fn change_sort(&mut self, field: SortField, order: SortOrder) {
        let next = self.query.change_sort(field, order);
        self.commit(next);
    }

    /// Moves to `page`; pages below one are ignored.
    ///
    /// Spawns the request, so it must be called within a Tokio runtime.
    pub fn change_page(&mut self, page: i64) {
        let next = self.query.change_page(page);
        self.commit(next);
    }

    /// Moves one page forward if the last result reported more pages.
    ///
    /// Must be called within a Tokio runtime.
    pub fn next_page(&mut self) -> bool {
        if !self.view().pagination().has_next() {
            return false;
        }
        self.change_page(i64::from(self.query.page()) + 1);
        true
    }

    /// Moves one page back unless already on the first page.
    ///
    /// Must be called within a Tokio runtime.
    pub fn previous_page(&mut self) -> bool {
        if self.query.page() <= 1 {
            return false;
        }
        self.change_page(i64::from(self.query.page()) - 1);
        true
    }

    /// Clears search and filters in both the query and the draft.
    ///
    /// Must be called within a Tokio runtime.
    pub fn clear_all(&mut self) {
        self.suggestions.dismiss();
        let next = self.query.clear_all();
        self.draft = Draft {
            search: next.search().to_string(),
            filters: DraftFilters::from_filters(next.filters()),
        };
        self.commit(next);
    }

    /// Refetches the committed query.
    ///
    /// Spawns the request, so it must be called within a Tokio runtime.
    pub fn reload(&mut self) -> Generation {
        self.fetch.reload(&self.query)
    }

    /// Applies a completion message.
    pub fn handle(&mut self, message: Message) -> DashboardUpdate {
        let applied = match message {
            Message::SalesLoaded {
                generation,
                outcome,
            } => self
                .fetch
                .apply(generation, outcome)
                .then_some(DashboardUpdate::Results),
            Message::SuggestionsLoaded {
                generation,
                outcome,
            } => self
                .suggestions
                .apply(generation, outcome)
                .then_some(DashboardUpdate::Suggestions),
        };
        applied.unwrap_or(DashboardUpdate::Stale)
    }

    fn commit(&mut self, next: SalesQuery) {
        if next == self.query {
            debug!("query unchanged; nothing to fetch");
            return;
        }
        self.query = next;
        self.committed.send_replace(self.query.clone());
        self.fetch.sync(&self.query);
    }
}
