//! UI Components
//!
//! Building blocks of the advanced search page.

mod advanced_search;
mod loading_indicator;
mod search_results;

pub use advanced_search::AdvancedSearch;
pub use loading_indicator::LoadingIndicator;
pub use search_results::SearchResults;
