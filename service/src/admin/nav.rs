//! Admin sidebar navigation.
//!
//! The link list is a fixed configuration constant, not something handlers
//! assemble ad hoc. The entry matching the current path is marked active.

/// One fixed sidebar link.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The admin sidebar, in display order.
pub const ADMIN_NAV: &[NavLink] = &[
    NavLink {
        label: "Tableau de bord",
        href: "/admin",
    },
    NavLink {
        label: "Statistiques",
        href: "/admin/stats",
    },
    NavLink {
        label: "Députés",
        href: "/admin/deputes",
    },
];

/// Sidebar entry resolved against the current path.
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Whether a link is the active one for the current path.
///
/// The dashboard link only matches exactly, otherwise it would shadow
/// every other admin page; the rest match by prefix so sub-pages keep
/// their section highlighted.
#[must_use]
pub fn is_active(link_href: &str, current_path: &str) -> bool {
    if link_href == "/admin" {
        current_path == "/admin"
    } else {
        current_path.starts_with(link_href)
    }
}

/// Resolve the sidebar for the current path.
#[must_use]
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    ADMIN_NAV
        .iter()
        .map(|link| NavItem {
            label: link.label,
            href: link.href,
            active: is_active(link.href, current_path),
        })
        .collect()
}
