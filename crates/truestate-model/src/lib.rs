//! Data model for the TruEstate retail sales dashboard.
//!
//! The types here carry no I/O. [`SalesQuery`] is the canonical description
//! of what to fetch and only changes through its commit operations, each of
//! which returns a new value. [`SalesPage`] is the decoded response body and
//! [`Pagination`] derives the page bounds shown beneath the table.

#![warn(missing_docs)]

pub mod error;
pub mod filters;
pub mod query;
pub mod record;
pub mod result;
pub mod sort;

pub use error::{ModelError, Result};
pub use filters::{DATE_FORMAT, DateRange, FilterGroup, SalesFilters, parse_date};
pub use query::{DEFAULT_PAGE_LIMIT, SalesQuery};
pub use record::TransactionRecord;
pub use result::{Pagination, ResultSet, SalesPage};
pub use sort::{SORT_OPTIONS, SortField, SortOption, SortOrder, SortSpec};
