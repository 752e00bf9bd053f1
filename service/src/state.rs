//! Shared application state handed to every page handler.

use std::sync::Arc;
use std::time::Duration;

use crate::admin::auth::PasswordGate;
use crate::admin::session::SessionStore;
use crate::assembly::AssemblyApiClient;
use crate::build_info::BuildInfo;
use crate::config::Config;

/// State shared by all routes.
pub struct AppState {
    /// Upstream parliamentary API client
    pub api: Arc<dyn AssemblyApiClient>,
    /// In-memory admin sessions
    pub sessions: SessionStore,
    /// Admin password gate
    pub gate: PasswordGate,
    /// Deputies shown per page
    pub page_size: u32,
    /// Build metadata shown in the footer and admin dashboard
    pub build_info: BuildInfo,
}

impl AppState {
    /// Assemble state from configuration and an API client.
    #[must_use]
    pub fn new(config: &Config, api: Arc<dyn AssemblyApiClient>, build_info: BuildInfo) -> Self {
        Self {
            api,
            sessions: SessionStore::new(Duration::from_secs(config.admin.session_ttl_secs)),
            gate: PasswordGate::new(&config.admin.password),
            page_size: config.api.page_size,
            build_info,
        }
    }
}
