//! Password-gated admin section.
//!
//! Provides:
//! - The password gate and server-side session store
//! - Fixed sidebar navigation with active-link resolution
//! - Admin routes: login/logout, dashboard, statistics, deputy moderation
//!
//! Authentication is a real server-side session (HttpOnly cookie referencing
//! an in-memory TTL store), not a client-persisted flag. Unauthenticated
//! requests to any admin page redirect to the login form.

pub mod auth;
pub mod nav;
pub mod routes;
pub mod session;
pub mod templates;

pub use routes::admin_router;

/// Cookie name for the admin session id.
pub const SESSION_COOKIE: &str = "hemicycle_admin_session";

/// Localized error shown when the submitted password does not match.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Mot de passe incorrect.";
