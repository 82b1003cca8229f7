//! Terminal front end for the TruEstate retail sales dashboard.

pub mod logging;
pub mod render;
pub mod session;
pub mod shell;
