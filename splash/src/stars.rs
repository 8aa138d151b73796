//! GitHub star count: one-shot fetch on mount plus compact formatting.

use crate::config;
use crate::console;
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Why the star count could not be read. All variants are handled the same
/// way (logged, count left unset), they only differ in the log line.
#[derive(Debug, Error)]
pub enum StarFetchError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed repository payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The only field consumed from the repository metadata document.
#[derive(Debug, Deserialize)]
struct RepoMetadata {
    stargazers_count: u64,
}

/// Decode `stargazers_count` out of a repository metadata body.
pub fn parse_star_count(body: &str) -> Result<u64, StarFetchError> {
    let meta: RepoMetadata = serde_json::from_str(body)?;
    Ok(meta.stargazers_count)
}

fn check_status(status: u16) -> Result<(), StarFetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(StarFetchError::Status(status))
    }
}

/// Single GET against the repository endpoint. No retry.
pub async fn fetch_star_count() -> Result<u64, StarFetchError> {
    let mut request =
        Request::get(config::repo_api_url()).header("Accept", "application/vnd.github+json");
    if let Some(token) = config::github_token() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }

    let response = request.send().await?;
    check_status(response.status())?;
    let body = response.text().await?;
    parse_star_count(&body)
}

/// Store a successful count. Failures only reach the console and leave the
/// signal as it was.
pub fn record_star_result(stars: RwSignal<Option<u64>>, result: Result<u64, StarFetchError>) {
    match result {
        Ok(count) => {
            console::info("stars", &format!("{count} stargazers"));
            stars.set(Some(count));
        }
        Err(err) => console::warn("stars", &err.to_string()),
    }
}

/// Kick off the fetch on mount; no retry, no cancellation.
pub fn load_star_count(stars: RwSignal<Option<u64>>) {
    wasm_bindgen_futures::spawn_local(async move {
        record_star_result(stars, fetch_star_count().await);
    });
}

/// Compact star count: `999`, `1k`, `1.3k`, `15.8k`.
///
/// Counts from 1000 up are rounded to the nearest hundred (half up) before
/// being scaled to thousands, and a trailing `.0` is dropped.
pub fn format_star_count(count: u64) -> String {
    if count < 1000 {
        return count.to_string();
    }
    let hundreds = count.saturating_add(50) / 100;
    let (whole, tenth) = (hundreds / 10, hundreds % 10);
    if tenth == 0 {
        format!("{whole}k")
    } else {
        format!("{whole}.{tenth}k")
    }
}

/// What the badge shows; `"0"` until a fetch has succeeded.
pub fn display_star_count(count: Option<u64>) -> String {
    count.map(format_star_count).unwrap_or_else(|| "0".to_string())
}
