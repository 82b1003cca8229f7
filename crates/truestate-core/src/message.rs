//! Completion messages sent from spawned requests back to the dashboard.

use truestate_client::ClientError;
use truestate_model::SalesPage;

use crate::epoch::Generation;

/// Outcome of a spawned request, tagged with the generation it was issued at.
#[derive(Debug)]
pub enum Message {
    /// The primary sales request finished.
    SalesLoaded {
        /// Generation of the fetch that produced this outcome.
        generation: Generation,
        /// Response page or transport failure.
        outcome: Result<SalesPage, ClientError>,
    },
    /// A suggestion lookup finished.
    SuggestionsLoaded {
        /// Generation of the debounce cycle that produced this outcome.
        generation: Generation,
        /// Response page or transport failure.
        outcome: Result<SalesPage, ClientError>,
    },
}
