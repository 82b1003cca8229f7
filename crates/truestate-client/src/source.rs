//! The transport contract the dashboard core is written against.

use std::future::Future;

use truestate_model::{SalesPage, SalesQuery};

use crate::error::Result;

/// Anything that can answer a sales query.
///
/// Implementations must treat non-2xx answers as errors and decode bodies
/// leniently (see [`SalesPage::from_json_slice`]).
pub trait SalesSource: Send + Sync + 'static {
    /// Fetches one page of sales matching `query`.
    fn fetch_sales(&self, query: &SalesQuery) -> impl Future<Output = Result<SalesPage>> + Send;
}
