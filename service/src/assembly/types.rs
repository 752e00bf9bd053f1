//! Data types for upstream parliamentary API responses.

use serde::{Deserialize, Serialize};

/// A deputy of the Assemblée nationale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Deputy {
    /// Stable upstream identifier (e.g. "PA722190")
    pub id: String,
    /// URL-safe slug (e.g. "jean-dupont")
    pub slug: String,
    pub first_name: String,
    pub last_name: String,
    /// Official portrait URL, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Parliamentary group, absent for non-attached deputies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRef>,
    /// Electoral district
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<District>,
    /// Number of recorded votes, when the listing includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u32>,
}

impl Deputy {
    /// Display name as shown in listings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Group reference embedded in a deputy record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub slug: String,
    pub name: String,
    /// Display color (e.g. "#ff0000")
    pub color: String,
}

/// Electoral district of a deputy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct District {
    /// Department name (e.g. "Gironde")
    pub department: String,
    /// District number within the department
    pub number: u32,
    pub name: String,
}

/// One page of deputies plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeputiesPage {
    pub data: Vec<Deputy>,
    /// Total matching deputies across all pages
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// A parliamentary group with its member count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub slug: String,
    pub name: String,
    pub member_count: u32,
}

/// Aggregate simulator statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorStats {
    pub total_sessions: u32,
    pub completed_sessions: u32,
    /// Fraction of sessions completed, 0.0..=1.0
    pub completion_rate: f64,
    /// Distribution of political-profile labels over completed sessions
    #[serde(default)]
    pub profiles: Vec<ProfileCount>,
}

/// Count of completed sessions assigned one profile label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCount {
    pub profile: String,
    pub count: u32,
}
