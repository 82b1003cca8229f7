//! The canonical sales query.
//!
//! A [`SalesQuery`] is never edited in place. Each commit operation returns
//! the next value, and every operation except [`SalesQuery::change_page`]
//! sends the user back to the first page.

use crate::filters::SalesFilters;
use crate::sort::{SortField, SortOrder, SortSpec};

/// Page size used when a session does not pick its own.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// What the dashboard fetches: search text, filters, sort and page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SalesQuery {
    search: String,
    filters: SalesFilters,
    sort: SortSpec,
    page: u32,
    limit: u32,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_LIMIT)
    }
}

impl SalesQuery {
    /// Creates the initial query for a session with the given page size.
    ///
    /// A zero limit is raised to one.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            search: String::new(),
            filters: SalesFilters::default(),
            sort: SortSpec::default(),
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Trimmed search text; empty when no search is active.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Committed filters.
    pub fn filters(&self) -> &SalesFilters {
        &self.filters
    }

    /// Committed sort.
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size, fixed for the session.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Commits new search text.
    #[must_use]
    pub fn submit_search(&self, text: &str) -> Self {
        Self {
            search: text.trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    /// Replaces the filters wholesale.
    #[must_use]
    pub fn apply_filters(&self, filters: SalesFilters) -> Self {
        Self {
            filters,
            page: 1,
            ..self.clone()
        }
    }

    /// Changes the sort column and direction.
    #[must_use]
    pub fn change_sort(&self, field: SortField, order: SortOrder) -> Self {
        Self {
            sort: SortSpec::new(field, order),
            page: 1,
            ..self.clone()
        }
    }

    /// Moves to page `page`.
    ///
    /// Pages below one are ignored and the query is returned unchanged.
    /// Pages past the last one are accepted; the backend answers them with
    /// an empty page.
    #[must_use]
    pub fn change_page(&self, page: i64) -> Self {
        match u32::try_from(page) {
            Ok(page) if page >= 1 => Self {
                page,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Clears search and filters, keeping the sort and page size.
    #[must_use]
    pub fn clear_all(&self) -> Self {
        Self {
            search: String::new(),
            filters: SalesFilters::default(),
            page: 1,
            ..self.clone()
        }
    }

    /// Builds a first-page lookup that shares this query's filters and sort
    /// but searches for `text` with its own page size.
    ///
    /// The result is a one-off request value; the canonical query is untouched.
    #[must_use]
    pub fn lookup(&self, text: &str, limit: u32) -> Self {
        Self {
            search: text.trim().to_string(),
            filters: self.filters.clone(),
            sort: self.sort,
            page: 1,
            limit: limit.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterGroup;

    #[test]
    fn defaults() {
        let query = SalesQuery::default();
        assert_eq!(query.search(), "");
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 50);
        assert_eq!(query.sort(), SortSpec::new(SortField::Date, SortOrder::Desc));
        assert!(query.filters().is_empty());
    }

    #[test]
    fn submit_search_trims_and_resets_page() {
        let query = SalesQuery::default().change_page(4).submit_search("  Neha ");
        assert_eq!(query.search(), "Neha");
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn change_page_ignores_non_positive() {
        let query = SalesQuery::default().change_page(3);
        assert_eq!(query.change_page(0), query);
        assert_eq!(query.change_page(-5), query);
        assert_eq!(query.change_page(i64::MAX), query);
        assert_eq!(query.change_page(7).page(), 7);
    }

    #[test]
    fn clear_all_keeps_sort() {
        let query = SalesQuery::default()
            .change_sort(SortField::Quantity, SortOrder::Asc)
            .apply_filters(
                SalesFilters::default()
                    .with(FilterGroup::Region, ["North"])
                    .with(FilterGroup::Tag, ["Bulk Order"]),
            )
            .change_page(2)
            .clear_all();
        assert!(query.filters().is_empty());
        assert_eq!(query.page(), 1);
        assert_eq!(query.sort(), SortSpec::new(SortField::Quantity, SortOrder::Asc));
    }

    #[test]
    fn limit_never_changes() {
        let query = SalesQuery::with_limit(25)
            .submit_search("x")
            .change_sort(SortField::FinalAmount, SortOrder::Asc)
            .change_page(9)
            .clear_all();
        assert_eq!(query.limit(), 25);
        assert_eq!(SalesQuery::with_limit(0).limit(), 1);
    }

    #[test]
    fn lookup_uses_own_page_and_limit() {
        let query = SalesQuery::default()
            .apply_filters(SalesFilters::default().with(FilterGroup::Gender, ["Female"]))
            .change_page(3);
        let lookup = query.lookup(" ne ", 5);
        assert_eq!(lookup.search(), "ne");
        assert_eq!(lookup.page(), 1);
        assert_eq!(lookup.limit(), 5);
        assert_eq!(lookup.filters(), query.filters());
        assert_eq!(query.page(), 3);
    }
}
