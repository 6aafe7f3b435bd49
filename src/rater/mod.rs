// Rating refresh module.
// Refresher, update signal, and the pure presentation helpers built on the snapshot.

pub mod deep_link;
pub mod refresher;
pub mod signal;
pub mod summary;

pub use deep_link::{PlatformVersion, ReviewLinkTemplate, review_deep_link};
pub use refresher::{RatingRefresher, RefreshOutcome};
pub use signal::{RATINGS_UPDATED, RatingsUpdated, UpdateSignal};
pub use summary::{RatingSummary, SummaryMessages, localized_rating_summary};
