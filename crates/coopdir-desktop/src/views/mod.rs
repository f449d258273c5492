//! Routed pages

mod edit_home;
mod search;

pub use edit_home::EditHome;
pub use search::Search;
