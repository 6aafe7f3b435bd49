// app-rater command line entry point.
// Runs one refresh with configuration from the environment and prints the result.

use std::process::ExitCode;

use app_rater::{Config, PlatformVersion, RatingRefresher, RefreshOutcome, SummaryMessages};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

const DEFAULT_PLATFORM_VERSION: &str = "17.0";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let version = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PLATFORM_VERSION.to_string());
    let version: PlatformVersion = match version.parse() {
        Ok(version) => version,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let refresher = match RatingRefresher::open(config) {
        Ok(refresher) => refresher,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = refresher.refresh_if_due(Utc::now()).await;
    match &outcome {
        RefreshOutcome::Skipped => println!("Refresh: skipped, checked recently"),
        RefreshOutcome::Updated(count) => println!("Refresh: updated, {count} ratings"),
        RefreshOutcome::Failed(e) => println!("Refresh: failed, {e}"),
    }

    match refresher.localized_rating_summary(&SummaryMessages::english()) {
        Some(summary) => println!("Summary: {summary}"),
        None => println!("Summary: rating count unknown"),
    }

    match refresher.review_deep_link(version) {
        Ok(link) => println!("Review link ({version}): {link}"),
        Err(e) => println!("Review link: {e}"),
    }

    match outcome {
        RefreshOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
