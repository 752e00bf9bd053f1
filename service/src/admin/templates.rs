//! Askama templates for the admin section.

use askama::Template;

use crate::admin::nav::NavItem;
use crate::build_info::BuildInfo;
use crate::pages::filters::Pager;
use crate::pages::templates::{Chrome, DeputyRow, GroupOption};

/// Admin login page.
#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub chrome: Chrome,
    pub error: Option<String>,
}

/// Admin dashboard with build metadata.
#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: Chrome,
    pub nav: Vec<NavItem>,
    pub build: BuildInfo,
}

/// One proportional bar in the profile distribution.
pub struct ProfileBar {
    pub label: String,
    pub count: u32,
    pub pct: u32,
}

/// Simulator statistics page.
#[derive(Template)]
#[template(path = "admin/stats.html")]
pub struct StatsTemplate {
    pub chrome: Chrome,
    pub nav: Vec<NavItem>,
    pub total_sessions: u32,
    pub completed_sessions: u32,
    /// Completion rate as a rounded integer percent
    pub completion_pct: u32,
    pub bars: Vec<ProfileBar>,
}

/// Moderation view of the deputy list, with vote counts.
#[derive(Template)]
#[template(path = "admin/deputies.html")]
pub struct AdminDeputiesTemplate {
    pub chrome: Chrome,
    pub nav: Vec<NavItem>,
    pub search_value: String,
    pub groups: Vec<GroupOption>,
    pub rows: Vec<DeputyRow>,
    pub total: u32,
    pub pager: Pager,
}
