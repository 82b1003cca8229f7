//! Read-only projection of the fetch state for rendering.

use truestate_model::{Pagination, SalesQuery, TransactionRecord};

use crate::fetch::FetchState;

/// Placeholder shown while a fetch is outstanding.
pub const LOADING_TEXT: &str = "Loading transactions...";

/// Placeholder shown when the last fetch returned no rows.
pub const EMPTY_TEXT: &str = "No transactions found.";

/// What the table area should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStatus<'a> {
    /// A fetch is outstanding.
    Loading,
    /// The last fetch failed with this message.
    Failed(&'a str),
    /// The last fetch succeeded with no rows.
    Empty,
    /// Rows to render.
    Rows(&'a [TransactionRecord]),
}

/// The table and its pagination footer.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    state: &'a FetchState,
    query: &'a SalesQuery,
}

impl<'a> ResultView<'a> {
    /// Projects `state` for the committed `query`.
    pub fn new(state: &'a FetchState, query: &'a SalesQuery) -> Self {
        Self { state, query }
    }

    /// Table status, in precedence order loading, failure, empty, rows.
    pub fn status(&self) -> ViewStatus<'a> {
        if self.state.loading {
            ViewStatus::Loading
        } else if let Some(error) = self.state.error.as_deref() {
            ViewStatus::Failed(error)
        } else if self.state.results.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Rows(&self.state.results.rows)
        }
    }

    /// Rows of the last completed fetch.
    pub fn rows(&self) -> &'a [TransactionRecord] {
        &self.state.results.rows
    }

    /// Total matches of the last completed fetch.
    pub fn total(&self) -> u64 {
        self.state.results.total
    }

    /// Footer bounds for the committed page.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.query.page(), self.query.limit(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truestate_model::ResultSet;

    #[test]
    fn status_precedence() {
        let query = SalesQuery::default();
        let mut state = FetchState {
            loading: true,
            error: Some("boom".to_string()),
            ..Default::default()
        };
        assert_eq!(ResultView::new(&state, &query).status(), ViewStatus::Loading);

        state.loading = false;
        assert_eq!(ResultView::new(&state, &query).status(), ViewStatus::Failed("boom"));

        state.error = None;
        assert_eq!(ResultView::new(&state, &query).status(), ViewStatus::Empty);

        state.results = ResultSet {
            rows: vec![TransactionRecord::default()],
            total: 1,
        };
        assert!(matches!(
            ResultView::new(&state, &query).status(),
            ViewStatus::Rows(rows) if rows.len() == 1
        ));
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let query = SalesQuery::default().change_page(12);
        let state = FetchState {
            results: ResultSet {
                rows: Vec::new(),
                total: 120,
            },
            ..Default::default()
        };
        let view = ResultView::new(&state, &query);
        assert_eq!(view.status(), ViewStatus::Empty);
        assert_eq!(view.pagination().total_pages(), 3);
        assert_eq!(view.pagination().row_range(), None);
    }
}
