//! HTTP client for the upstream parliamentary data API.
//!
//! This module provides a trait-based HTTP client for the read-only REST
//! API serving deputy, group, and simulator data. The trait abstraction
//! enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with wiremock in integration tests
//! - Swapping implementations (e.g., a different data provider)
//!
//! # Example
//!
//! ```ignore
//! use hemicycle_web::assembly::{AssemblyApiClient, HttpAssemblyClient};
//!
//! let client = HttpAssemblyClient::new("https://api.example.org");
//! let page = client.list_deputies(None, Some("gdr"), 1, 20).await?;
//! println!("{} deputies match", page.total);
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::types::{DeputiesPage, GroupSummary, SimulatorStats};

/// Errors that can occur when calling the parliamentary API.
#[derive(Debug, Error)]
pub enum AssemblyApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}

/// Trait for parliamentary API operations.
///
/// Implementations fetch read-only data from the upstream REST API.
/// Use `HttpAssemblyClient` for real HTTP calls, or `mock::MockAssemblyClient`
/// for testing.
#[async_trait]
pub trait AssemblyApiClient: Send + Sync {
    /// List deputies matching the given filters, one page at a time.
    async fn list_deputies(
        &self,
        search: Option<&str>,
        group: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<DeputiesPage, AssemblyApiError>;

    /// List all parliamentary groups with member counts.
    async fn list_groups(&self) -> Result<Vec<GroupSummary>, AssemblyApiError>;

    /// Fetch aggregate simulator statistics.
    async fn simulator_stats(&self) -> Result<SimulatorStats, AssemblyApiError>;
}

/// HTTP-based implementation of `AssemblyApiClient`.
///
/// Makes real HTTP requests to the upstream REST API.
pub struct HttpAssemblyClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssemblyClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client with a custom `reqwest::Client` (for timeouts or test config).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AssemblyApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssemblyApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AssemblyApiClient for HttpAssemblyClient {
    async fn list_deputies(
        &self,
        search: Option<&str>,
        group: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<DeputiesPage, AssemblyApiError> {
        let url = format!("{}/deputes", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(s) = search {
            query.push(("search", s.to_string()));
        }
        if let Some(g) = group {
            query.push(("groupe", g.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn list_groups(&self) -> Result<Vec<GroupSummary>, AssemblyApiError> {
        let url = format!("{}/deputes/groupes", self.base_url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn simulator_stats(&self) -> Result<SimulatorStats, AssemblyApiError> {
        let url = format!("{}/simulateur/stats", self.base_url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{AssemblyApiClient, AssemblyApiError, DeputiesPage, GroupSummary, SimulatorStats};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Filter tuple recorded for each `list_deputies` call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DeputiesCall {
        pub search: Option<String>,
        pub group: Option<String>,
        pub page: u32,
        pub limit: u32,
    }

    /// Mock implementation of `AssemblyApiClient` for unit tests.
    ///
    /// Configure responses with `set_*_result` methods and verify
    /// calls with `list_deputies_calls()`.
    pub struct MockAssemblyClient {
        list_deputies_result: Mutex<Option<Result<DeputiesPage, AssemblyApiError>>>,
        list_groups_result: Mutex<Option<Result<Vec<GroupSummary>, AssemblyApiError>>>,
        simulator_stats_result: Mutex<Option<Result<SimulatorStats, AssemblyApiError>>>,
        list_deputies_calls: Mutex<Vec<DeputiesCall>>,
    }

    impl MockAssemblyClient {
        pub fn new() -> Self {
            Self {
                list_deputies_result: Mutex::new(None),
                list_groups_result: Mutex::new(None),
                simulator_stats_result: Mutex::new(None),
                list_deputies_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `list_deputies` call.
        pub fn set_list_deputies_result(&self, result: Result<DeputiesPage, AssemblyApiError>) {
            *self.list_deputies_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `list_groups` call.
        pub fn set_list_groups_result(&self, result: Result<Vec<GroupSummary>, AssemblyApiError>) {
            *self.list_groups_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `simulator_stats` call.
        pub fn set_simulator_stats_result(&self, result: Result<SimulatorStats, AssemblyApiError>) {
            *self.simulator_stats_result.lock().unwrap() = Some(result);
        }

        /// Get all filter tuples passed to `list_deputies`.
        pub fn list_deputies_calls(&self) -> Vec<DeputiesCall> {
            self.list_deputies_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockAssemblyClient {
        fn default() -> Self {
            Self::new()
        }
    }

    fn empty_page(page: u32, limit: u32) -> DeputiesPage {
        DeputiesPage {
            data: Vec::new(),
            total: 0,
            page,
            limit,
            total_pages: 0,
        }
    }

    #[async_trait]
    impl AssemblyApiClient for MockAssemblyClient {
        async fn list_deputies(
            &self,
            search: Option<&str>,
            group: Option<&str>,
            page: u32,
            limit: u32,
        ) -> Result<DeputiesPage, AssemblyApiError> {
            self.list_deputies_calls.lock().unwrap().push(DeputiesCall {
                search: search.map(String::from),
                group: group.map(String::from),
                page,
                limit,
            });

            self.list_deputies_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(empty_page(page, limit)))
        }

        async fn list_groups(&self) -> Result<Vec<GroupSummary>, AssemblyApiError> {
            self.list_groups_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn simulator_stats(&self) -> Result<SimulatorStats, AssemblyApiError> {
            self.simulator_stats_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| {
                    Ok(SimulatorStats {
                        total_sessions: 0,
                        completed_sessions: 0,
                        completion_rate: 0.0,
                        profiles: Vec::new(),
                    })
                })
        }
    }
}
