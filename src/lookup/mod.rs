// Storefront lookup API module.
// Provides the HTTP client and response parsing for rating counts.

pub mod client;
pub mod types;

pub use client::{LOOKUP_PATH_TEMPLATE, LookupClient};
pub use types::{RATING_COUNT_FIELD, parse_rating_count};
