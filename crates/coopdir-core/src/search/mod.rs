//! Directory search
//!
//! Turns submitted filters into a `/coops/` query URL, fetches it through a
//! debounced, latest-request-wins fetcher, and shapes the records for display.

mod fetcher;
mod results;
mod tracker;
mod url;

pub use fetcher::{CoopSource, DebouncedFetcher, FetchOutcome, DEFAULT_DEBOUNCE};
pub use results::{edit_path, result_rows, ResultRow};
pub use tracker::{RequestTicket, RequestTracker};
pub use url::{build_search_url, COOPS_PATH};
