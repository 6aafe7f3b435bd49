// Rating snapshot persistence.
// Maps the (count, last updated) pair onto two key-value entries.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::error::Result;

use super::store::KeyValueStore;

/// Key holding the number of ratings for the current version.
pub const RATING_COUNT_KEY: &str = "ratingCount";
/// Key holding the refresh time as float seconds since the epoch.
pub const LAST_UPDATED_KEY: &str = "lastUpdatedAt";

/// Result of the most recent successful refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSnapshot {
    pub count: u64,
    pub last_updated: DateTime<Utc>,
}

impl RatingSnapshot {
    pub fn new(count: u64, last_updated: DateTime<Utc>) -> Self {
        Self {
            count,
            last_updated,
        }
    }

    /// Persist both entries in one store write.
    pub fn write(&self, store: &dyn KeyValueStore) -> Result<()> {
        store.set_all(&[
            (RATING_COUNT_KEY, json!(self.count)),
            (LAST_UPDATED_KEY, json!(to_epoch_secs(self.last_updated))),
        ])
    }

    /// Read the snapshot, if both entries are present.
    pub fn read(store: &dyn KeyValueStore) -> Result<Option<Self>> {
        let count = read_count(store)?;
        let last_updated = read_last_updated(store)?;
        Ok(count
            .zip(last_updated)
            .map(|(count, last_updated)| Self::new(count, last_updated)))
    }
}

/// Stored rating count, clamped to zero. `None` when never written.
pub fn read_count(store: &dyn KeyValueStore) -> Result<Option<u64>> {
    Ok(store.get(RATING_COUNT_KEY)?.map(|value| clamp_count(&value)))
}

/// Stored refresh time. `None` when never written or unreadable.
pub fn read_last_updated(store: &dyn KeyValueStore) -> Result<Option<DateTime<Utc>>> {
    Ok(store
        .get(LAST_UPDATED_KEY)?
        .and_then(|value| value.as_f64())
        .and_then(from_epoch_secs))
}

/// Non-integer or negative values read as zero.
fn clamp_count(value: &Value) -> u64 {
    if let Some(count) = value.as_u64() {
        return count;
    }
    match value.as_f64() {
        Some(count) if count.is_finite() && count > 0.0 => count as u64,
        _ => 0,
    }
}

pub fn to_epoch_secs(time: DateTime<Utc>) -> f64 {
    time.timestamp_micros() as f64 / 1_000_000.0
}

pub fn from_epoch_secs(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp_micros((secs * 1_000_000.0).round() as i64)
}
