//! HTTP access to the TruEstate sales API.
//!
//! The dashboard core only depends on the [`SalesSource`] trait. [`SalesClient`]
//! implements it over `reqwest`; tests substitute scripted sources.
//!
//! # Example
//!
//! ```no_run
//! use truestate_client::{ClientConfig, SalesClient, SalesSource};
//! use truestate_model::SalesQuery;
//!
//! async fn first_page() -> truestate_client::Result<()> {
//!     let client = SalesClient::new(&ClientConfig::from_env())?;
//!     let page = client.fetch_sales(&SalesQuery::default()).await?;
//!     println!("{} of {} rows", page.data.len(), page.total);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod source;

pub use client::SalesClient;
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use params::query_pairs;
pub use source::SalesSource;
