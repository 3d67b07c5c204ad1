//! # PubMed Harvest
//!
//! Download PubMed abstracts for a publication date range, split into a
//! background corpus (letters, reviews, conference abstracts) and a
//! reference corpus (journal articles, clinical trials).
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Category, DateRange, AbstractRecord)
//! - [`eutils`]: NCBI E-utilities client and response parsing
//! - [`harvest`]: The search → fetch → filter → write pipeline
//! - [`config`]: Configuration management

pub mod config;
pub mod eutils;
pub mod harvest;
pub mod models;

// Re-export commonly used types
pub use eutils::{Contact, EutilsClient};
pub use models::{AbstractRecord, Category, DateRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
