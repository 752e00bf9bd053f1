//! Upstream parliamentary API client module.
//!
//! Provides the HTTP client abstraction for the read-only REST API that
//! serves deputy, group, and simulator data.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`AssemblyApiClient`] - Trait defining API operations
//! - [`HttpAssemblyClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockAssemblyClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! Page handlers depend only on the trait, so integration tests can drive
//! them with scripted responses while client tests stub HTTP with wiremock.

mod client;
mod types;

pub use client::{AssemblyApiClient, AssemblyApiError, HttpAssemblyClient};
pub use types::{
    DeputiesPage, Deputy, District, GroupRef, GroupSummary, ProfileCount, SimulatorStats,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
