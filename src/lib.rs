//! Cached storefront rating counts for an app.
//!
//! A [`RatingRefresher`] asks the storefront lookup API for the number of
//! ratings on the app's current version at most once per check interval,
//! persists the result, and notifies subscribers when it changes. Pure
//! helpers turn the stored count into a summary line and build the deep link
//! to the storefront review page.

pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod rater;

pub use cache::{FileStore, KeyValueStore, MemoryStore, RatingSnapshot};
pub use config::{Config, Profile};
pub use error::{ErrorKind, RaterError, Result};
pub use rater::{
    PlatformVersion, RatingRefresher, RatingSummary, RatingsUpdated, RefreshOutcome,
    SummaryMessages, localized_rating_summary, review_deep_link,
};
