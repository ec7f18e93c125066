//! Scraper for the superinvestor directory and holdings tables on dataroma.com.
//!
//! Parsing is pure over already-fetched HTML (`parser`); fetching goes through
//! the [`fetch::Fetch`] trait so the parsers can be exercised against fixtures.

pub mod client;
pub mod error;
pub mod fetch;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod settings;

pub use client::Dataroma;
pub use error::{Error, Result};
pub use models::{Holding, Investor};
pub use parser::{Parsed, SkipReason, Skipped};
pub use settings::Settings;
