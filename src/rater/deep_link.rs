// Storefront review deep links.
// Maps a platform version onto the review URL template that version understands.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::error::{RaterError, Result};

// URL variants per platform release, see
// https://github.com/arashpayan/appirater/issues/131
// https://github.com/arashpayan/appirater/issues/182
const LEGACY_TEMPLATE: &str = "itms-apps://ax.itunes.apple.com/WebObjects/MZStore.woa/wa/viewContentsUserReviews?type=Purple+Software&id={APPID}";
const V7_TEMPLATE: &str = "itms-apps://itunes.apple.com/app/id{APPID}";
const V8_TEMPLATE: &str = "itms-apps://itunes.apple.com/WebObjects/MZStore.woa/wa/viewContentsUserReviews?id={APPID}&onlyLatestVersion=true&pageNumber=0&sortOrdering=1&type=Purple+Software";
const CURRENT_TEMPLATE: &str = "itms-apps://itunes.apple.com/app/id{APPID}?action=write-review";

/// Platform release, compared as (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
}

impl PlatformVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for PlatformVersion {
    type Err = RaterError;

    /// Parses `major[.minor[.patch]]`; the patch component is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RaterError::Config(format!("invalid platform version `{s}`"));
        let mut parts = s.trim().split('.');

        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };
        if let Some(patch) = parts.next() {
            patch.parse::<u32>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor))
    }
}

/// Review page URL shapes, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewLinkTemplate {
    Legacy,
    V7,
    V8,
    Current,
}

impl ReviewLinkTemplate {
    pub fn for_version(version: PlatformVersion) -> Self {
        if version >= PlatformVersion::new(9, 4) {
            ReviewLinkTemplate::Current
        } else if version >= PlatformVersion::new(8, 0) {
            ReviewLinkTemplate::V8
        } else if version >= PlatformVersion::new(7, 0) {
            ReviewLinkTemplate::V7
        } else {
            ReviewLinkTemplate::Legacy
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            ReviewLinkTemplate::Legacy => LEGACY_TEMPLATE,
            ReviewLinkTemplate::V7 => V7_TEMPLATE,
            ReviewLinkTemplate::V8 => V8_TEMPLATE,
            ReviewLinkTemplate::Current => CURRENT_TEMPLATE,
        }
    }
}

/// Deep link that opens the review page for `app_id` on `version`.
pub fn review_deep_link(app_id: &str, version: PlatformVersion) -> Result<Url> {
    let app_id = app_id.trim();
    if app_id.is_empty() {
        return Err(RaterError::MissingAppId);
    }

    let link = ReviewLinkTemplate::for_version(version)
        .template()
        .replace("{APPID}", app_id);
    Url::parse(&link).map_err(|e| RaterError::InvalidUrl(format!("{link}: {e}")))
}
