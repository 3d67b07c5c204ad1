//! Core data models for queries and harvested records.

mod query;
mod record;

pub use query::{Category, DateRange};
pub use record::{AbstractRecord, PubDate};
