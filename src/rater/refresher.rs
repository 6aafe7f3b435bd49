// Rate-limited rating refresh.
// Gates lookups on the check interval, persists the count, and signals subscribers.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Url;
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::snapshot::{read_count, read_last_updated};
use crate::cache::{FileStore, KeyValueStore, RatingSnapshot, resolve_store_path};
use crate::config::Config;
use crate::error::{RaterError, Result};
use crate::lookup::LookupClient;

use super::deep_link::{PlatformVersion, review_deep_link};
use super::signal::{RatingsUpdated, UpdateSignal};
use super::summary::{SummaryMessages, localized_rating_summary};

/// What a call to [`RatingRefresher::refresh_if_due`] did.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The check interval has not elapsed; nothing was requested.
    Skipped,
    /// A fresh count was fetched and persisted.
    Updated(u64),
    /// The refresh failed; the stored snapshot is unchanged.
    Failed(RaterError),
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RefreshOutcome::Updated(_))
    }
}

/// Keeps the persisted rating count fresh.
pub struct RatingRefresher {
    config: Config,
    client: LookupClient,
    store: Arc<dyn KeyValueStore>,
    signal: UpdateSignal,
    // Held for the whole gate-fetch-write cycle so concurrent calls never double-fire.
    in_flight: Mutex<()>,
}

impl RatingRefresher {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let client = LookupClient::from_config(&config)?;
        Ok(Self {
            config,
            client,
            store,
            signal: UpdateSignal::default(),
            in_flight: Mutex::new(()),
        })
    }

    /// Create a refresher backed by the on-disk store at the configured path.
    pub fn open(config: Config) -> Result<Self> {
        let path = resolve_store_path(config.store_path.as_ref()).ok_or_else(|| {
            RaterError::Config("no cache directory available for the rating store".to_string())
        })?;
        debug!(path = %path.display(), "opening rating store");
        Self::new(config, Arc::new(FileStore::new(path)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register for ratings-updated signals.
    pub fn subscribe(&self) -> broadcast::Receiver<RatingsUpdated> {
        self.signal.subscribe()
    }

    /// Fetch and persist a new count if the check interval has elapsed since
    /// the last successful refresh.
    pub async fn refresh_if_due(&self, now: DateTime<Utc>) -> RefreshOutcome {
        if !self.config.has_app_id() {
            warn!("an app ID must be specified before refreshing ratings");
            return RefreshOutcome::Failed(RaterError::MissingAppId);
        }

        let _guard = self.in_flight.lock().await;

        match self.is_due(now) {
            Ok(true) => {}
            Ok(false) => {
                debug!("not enough time elapsed since last check");
                return RefreshOutcome::Skipped;
            }
            Err(e) => {
                warn!(error = %e, "unable to read last refresh time");
                return RefreshOutcome::Failed(e);
            }
        }

        let count = match self
            .client
            .fetch_rating_count(&self.config.app_id, &self.config.region)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "unable to retrieve rating count");
                return RefreshOutcome::Failed(e);
            }
        };

        if let Err(e) = RatingSnapshot::new(count, now).write(self.store.as_ref()) {
            warn!(error = %e, "unable to persist rating count");
            return RefreshOutcome::Failed(e);
        }

        info!(count, region = %self.config.region, "retrieved rating count");
        self.signal.emit();

        RefreshOutcome::Updated(count)
    }

    /// Run [`refresh_if_due`](Self::refresh_if_due) on the tokio runtime.
    pub fn spawn_refresh(self: &Arc<Self>, now: DateTime<Utc>) -> JoinHandle<RefreshOutcome> {
        let refresher = Arc::clone(self);
        tokio::spawn(async move { refresher.refresh_if_due(now).await })
    }

    fn is_due(&self, now: DateTime<Utc>) -> Result<bool> {
        let Some(last_updated) = read_last_updated(self.store.as_ref())? else {
            return Ok(true);
        };

        let elapsed = now.signed_duration_since(last_updated);
        Ok(match TimeDelta::from_std(self.config.check_interval) {
            Ok(interval) => elapsed >= interval,
            Err(_) => false,
        })
    }

    /// Persisted rating count, or `None` if no refresh has ever succeeded.
    pub fn current_rating_count(&self) -> Option<u64> {
        read_count(self.store.as_ref()).unwrap_or_else(|e| {
            warn!(error = %e, "unable to read rating count");
            None
        })
    }

    /// The full persisted snapshot, if any.
    pub fn snapshot(&self) -> Option<RatingSnapshot> {
        RatingSnapshot::read(self.store.as_ref()).unwrap_or_else(|e| {
            warn!(error = %e, "unable to read rating snapshot");
            None
        })
    }

    /// Summary line for the persisted count.
    pub fn localized_rating_summary(&self, messages: &SummaryMessages) -> Option<String> {
        localized_rating_summary(self.current_rating_count(), messages)
    }

    /// Review page deep link for this app.
    pub fn review_deep_link(&self, version: PlatformVersion) -> Result<Url> {
        review_deep_link(&self.config.app_id, version)
    }
}
