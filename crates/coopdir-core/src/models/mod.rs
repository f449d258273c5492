//! Data models for coopdir

mod coop;
mod filter;

pub use coop::{CoopId, CoopRecord};
pub use filter::{EnabledFilter, FilterField, FilterState};
