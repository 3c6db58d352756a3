use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use http::StatusCode;
use thiserror::Error;

use crate::contributions::{
    check_username, ContributionError, ContributionFeed, ContributionGrid, YearWindow,
};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Invalid(#[from] ContributionError),
    #[error("Failed to fetch contributions: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch contributions: {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
struct CachedFeed {
    fetched_at: DateTime<Utc>,
    feed: ContributionFeed,
}

/// Client for the public contributions API, caching successful feeds.
#[derive(Debug, Clone)]
pub struct ContributionsClient {
    http: reqwest::Client,
    base_url: String,
    ttl: Duration,
    cache: Arc<DashMap<String, CachedFeed>>,
}

impl ContributionsClient {
    pub fn new(base_url: impl Into<String>, ttl: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            ttl,
            cache: Arc::new(DashMap::new()),
        }
    }

    fn is_fresh(&self, entry: &CachedFeed) -> bool {
        let age = Utc::now().signed_duration_since(entry.fetched_at);
        age.to_std().map(|age| age < self.ttl).unwrap_or(true)
    }

    fn cached(&self, key: &str) -> Option<ContributionFeed> {
        self.cache.remove_if(key, |_, entry| !self.is_fresh(entry));
        let entry = self.cache.get(key)?;
        Some(entry.feed.clone())
    }

    /// Fetches the feed for `username` and renders the calendar `year`.
    ///
    /// An out-of-range year is rejected before any request is made.
    pub async fn fetch_grid(
        &self,
        username: &str,
        year: i32,
    ) -> Result<ContributionGrid, FetchError> {
        YearWindow::for_year(year)?;
        let feed = self.fetch(username).await?;
        Ok(ContributionGrid::build(&feed, year)?)
    }

    /// Fetches the full feed for `username`.
    ///
    /// Failed requests are not cached, so the next call goes to the network.
    pub async fn fetch(&self, username: &str) -> Result<ContributionFeed, FetchError> {
        let username = check_username(username)?;
        let key = username.to_ascii_lowercase();
        if let Some(feed) = self.cached(&key) {
            tracing::debug!(username, "contributions cache hit");
            return Ok(feed);
        }

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), username);
        tracing::debug!(%url, "fetching contributions");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(username, %status, "contributions API returned an error");
            return Err(FetchError::Status(status));
        }
        let feed = response.json::<ContributionFeed>().await?;
        tracing::info!(
            username,
            days = feed.contributions.len(),
            "fetched contributions"
        );
        self.cache.retain(|_, entry| self.is_fresh(entry));
        self.cache.insert(
            key,
            CachedFeed {
                fetched_at: Utc::now(),
                feed: feed.clone(),
            },
        );
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::contributions::HeatmapState;

    fn sample_feed() -> serde_json::Value {
        json!({
            "total": {"2024": 15, "2023": 7},
            "contributions": [
                {"date": "2024-01-08", "count": 12, "level": 3},
                {"date": "2024-01-01", "count": 3, "level": 1},
                {"date": "2024-01-02", "count": 0, "level": 0}
            ]
        })
    }

    #[tokio::test]
    async fn test_fetch_parses_feed() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v4/octocat");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.url("/v4/"), Duration::from_secs(60));
        let feed = client.fetch("octocat").await.expect("fetch should succeed");
        assert_eq!(feed.contributions.len(), 3);
        assert_eq!(feed.all_time_total(), 22);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_uses_cache() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/octocat");
                then.status(200).json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let first = client.fetch("octocat").await.unwrap();
        // usernames are case-insensitive
        let second = client.fetch("OctoCat").await.unwrap();
        assert_eq!(first, second);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_zero_ttl_refetches() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/octocat");
                then.status(200).json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::ZERO);
        client.fetch("octocat").await.unwrap();
        client.fetch("octocat").await.unwrap();
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_cached() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/octocat");
                then.status(502);
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let err = client.fetch("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::Status(StatusCode::BAD_GATEWAY)));
        assert!(client.fetch("octocat").await.is_err());
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/octocat");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let err = client.fetch("octocat").await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[tokio::test]
    async fn test_invalid_username_skips_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let err = client.fetch("../admin").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Invalid(ContributionError::InvalidUsername(_))
        ));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_expired_entries_are_evicted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::ZERO);
        for i in 0..50 {
            client.fetch(&format!("user{i}")).await.unwrap();
            assert!(client.cache.len() <= 1);
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_becomes_error_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/octocat");
                then.status(500);
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let state = HeatmapState::from(client.fetch_grid("octocat", 2024).await);
        assert!(state.error().is_some());
        assert!(state.weeks().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_grid_builds_year() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/octocat");
                then.status(200).json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let state = HeatmapState::from(client.fetch_grid("octocat", 2024).await);
        assert!(state.error().is_none());
        assert_eq!(state.weeks().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_year_skips_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(sample_feed());
            })
            .await;

        let client = ContributionsClient::new(server.base_url(), Duration::from_secs(60));
        let err = client.fetch_grid("octocat", i32::MAX).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Invalid(ContributionError::InvalidYear(i32::MAX))
        ));
        mock.assert_hits_async(0).await;
    }
}
