// Rater configuration.
// Built once at startup, either directly or from APP_RATER_* environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use envconfig::Envconfig;

use crate::error::{RaterError, Result};

pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_LOOKUP_BASE: &str = "https://itunes.apple.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build profile that selects the default check interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Release,
}

impl Profile {
    /// Profile matching how this binary was compiled.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            Profile::Development
        } else {
            Profile::Release
        }
    }

    pub fn check_interval(&self) -> Duration {
        match self {
            Profile::Development => Duration::from_secs(10),
            Profile::Release => Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl FromStr for Profile {
    type Err = RaterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "debug" => Ok(Profile::Development),
            "release" | "prod" | "production" => Ok(Profile::Release),
            other => Err(RaterError::Config(format!("unknown profile `{other}`"))),
        }
    }
}

/// Immutable settings for a [`RatingRefresher`](crate::RatingRefresher).
#[derive(Debug, Clone)]
pub struct Config {
    /// Storefront identifier of the app.
    pub app_id: String,
    /// ISO country code used for the lookup.
    pub region: String,
    /// Minimum time between two successful refreshes.
    pub check_interval: Duration,
    /// Scheme and host of the lookup API.
    pub lookup_base: String,
    /// Upper bound on a single lookup request.
    pub request_timeout: Duration,
    /// Override for the on-disk store location.
    pub store_path: Option<PathBuf>,
}

impl Config {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            region: DEFAULT_REGION.to_string(),
            check_interval: Profile::current().check_interval(),
            lookup_base: DEFAULT_LOOKUP_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            store_path: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.check_interval = profile.check_interval();
        self
    }

    pub fn with_lookup_base(mut self, base: impl Into<String>) -> Self {
        self.lookup_base = base.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Whether an app ID has been supplied.
    pub fn has_app_id(&self) -> bool {
        !self.app_id.trim().is_empty()
    }

    /// Load configuration from APP_RATER_* variables, falling back to the
    /// process locale for the region.
    pub fn from_env() -> Result<Self> {
        let settings =
            EnvSettings::init_from_env().map_err(|e| RaterError::Config(e.to_string()))?;
        let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()));
        Self::from_settings(settings, locale.as_deref())
    }

    fn from_settings(settings: EnvSettings, locale: Option<&str>) -> Result<Self> {
        let mut config = Config::new(settings.app_id);

        if let Some(profile) = settings.profile.as_deref() {
            config = config.with_profile(profile.parse()?);
        }
        if let Some(secs) = settings.check_interval_secs {
            config = config.with_check_interval(Duration::from_secs(secs));
        }

        let region = settings
            .region
            .filter(|r| !r.trim().is_empty())
            .or_else(|| locale.and_then(region_from_locale))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        config = config.with_region(region);

        config.lookup_base = settings.lookup_base;
        config.request_timeout = Duration::from_secs(settings.timeout_secs);
        config.store_path = settings.store_path.map(PathBuf::from);

        Ok(config)
    }
}

#[derive(Envconfig)]
struct EnvSettings {
    #[envconfig(from = "APP_RATER_APP_ID", default = "")]
    app_id: String,

    #[envconfig(from = "APP_RATER_REGION")]
    region: Option<String>,

    #[envconfig(from = "APP_RATER_PROFILE")]
    profile: Option<String>,

    #[envconfig(from = "APP_RATER_CHECK_INTERVAL_SECS")]
    check_interval_secs: Option<u64>,

    #[envconfig(from = "APP_RATER_LOOKUP_BASE", default = "https://itunes.apple.com")]
    lookup_base: String,

    #[envconfig(from = "APP_RATER_TIMEOUT_SECS", default = "10")]
    timeout_secs: u64,

    #[envconfig(from = "APP_RATER_STORE_PATH")]
    store_path: Option<String>,
}

/// Extract the country part of a POSIX locale such as `en_GB.UTF-8`.
pub fn region_from_locale(locale: &str) -> Option<String> {
    let name = locale.split(['.', '@']).next()?;
    let region = name.split(['_', '-']).nth(1)?;

    if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(region.to_ascii_uppercase())
    } else {
        None
    }
}
