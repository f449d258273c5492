//! coopdir-core - Core library for the cooperative directory search
//!
//! This crate contains the filter models, search URL building, the debounced
//! directory fetcher, and the form state shared by the desktop shell.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;

pub use error::{Error, Result};
pub use models::{CoopId, CoopRecord, EnabledFilter, FilterField, FilterState};
pub use state::SearchFormState;
