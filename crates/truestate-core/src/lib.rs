//! Query state and request coordination for the TruEstate dashboard.
//!
//! [`Dashboard`] is the entry point. It holds the committed query and the
//! user's draft, keeps the result set in step with the query through
//! [`FetchCoordinator`], and drives debounced customer-name suggestions
//! through [`SuggestionEngine`]. Both engines tag their requests with an
//! [`Epoch`] generation so late responses for superseded requests are
//! dropped rather than rendered.

#![warn(missing_docs)]

pub mod dashboard;
pub mod draft;
pub mod epoch;
pub mod fetch;
pub mod message;
pub mod suggest;
pub mod view;

pub use dashboard::{Dashboard, DashboardUpdate};
pub use draft::{Draft, DraftFilters};
pub use epoch::{Epoch, Generation, Ticket};
pub use fetch::{FetchCoordinator, FetchState};
pub use message::Message;
pub use suggest::{
    MIN_SUGGESTION_CHARS, SUGGESTION_DEBOUNCE, SUGGESTION_LIMIT, SuggestionEngine,
    extract_suggestions,
};
pub use view::{EMPTY_TEXT, LOADING_TEXT, ResultView, ViewStatus};
