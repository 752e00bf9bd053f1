//! Filter state and pagination arithmetic for listing pages.
//!
//! A [`DeputyQuery`] is the full filter tuple (search text, group slug,
//! page number) decoded from the query string. Changing search or group
//! always resets the page to 1, so stale page numbers cannot survive a
//! filter change.

use serde::Deserialize;

/// Filter tuple for the deputies listing.
///
/// Decoded straight from the query string; `normalized` must run before
/// use so empty strings collapse to `None` and the page is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeputyQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Group slug filter, `groupe` on the wire.
    #[serde(default, rename = "groupe")]
    pub group: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl DeputyQuery {
    /// Trim filters, drop empty ones, and clamp the page to at least 1.
    #[must_use]
    pub fn normalized(self) -> Self {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            search: clean(self.search),
            group: clean(self.group),
            page: Some(self.page.unwrap_or(1).max(1)),
        }
    }

    /// Current page, defaulting to 1.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Replace the search text. Resets the page to 1.
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search.map(String::from);
        self.page = Some(1);
        self
    }

    /// Replace the group filter. Resets the page to 1.
    #[must_use]
    pub fn with_group(mut self, group: Option<&str>) -> Self {
        self.group = group.map(String::from);
        self.page = Some(1);
        self
    }

    /// Jump to the given page, keeping the filters. Clamped to at least 1.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    /// Build the page URL for this filter tuple under the given base path.
    ///
    /// Empty filters and `page=1` are omitted so canonical tuples produce
    /// canonical URLs.
    #[must_use]
    pub fn href_for(&self, base: &str) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(group) = self.group.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("groupe={}", urlencoding::encode(group)));
        }
        let page = self.page();
        if page > 1 {
            params.push(format!("page={page}"));
        }
        if params.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, params.join("&"))
        }
    }
}

/// Pager controls for one rendered listing page.
///
/// A boundary control is represented by an absent href: no `prev` on
/// page 1, no `next` on the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pager {
    /// Build pager controls for the given filter tuple and page count.
    #[must_use]
    pub fn new(base: &str, query: &DeputyQuery, total_pages: u32) -> Self {
        let page = query.page();
        let prev_href = (page > 1 && total_pages > 0)
            .then(|| query.clone().with_page(page - 1).href_for(base));
        let next_href =
            (page < total_pages).then(|| query.clone().with_page(page + 1).href_for(base));
        Self {
            page,
            total_pages,
            prev_href,
            next_href,
        }
    }
}

/// Share of `count` in `total` as a rounded integer percentage.
///
/// A zero total yields 0 rather than NaN or a divide error.
#[must_use]
pub fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(count) / f64::from(total) * 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = ratio.round() as u32;
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query(search: Option<&str>, group: Option<&str>, page: u32) -> DeputyQuery {
        DeputyQuery {
            search: search.map(String::from),
            group: group.map(String::from),
            page: Some(page),
        }
    }

    #[test]
    fn changing_search_resets_page() {
        let q = query(None, Some("gdr"), 4).with_search(Some("dupont"));
        assert_eq!(q.page(), 1);
        assert_eq!(q.search.as_deref(), Some("dupont"));
        assert_eq!(q.group.as_deref(), Some("gdr"));
    }

    #[test]
    fn changing_group_resets_page() {
        let q = query(Some("dupont"), None, 7).with_group(Some("lfi"));
        assert_eq!(q.page(), 1);
        assert_eq!(q.group.as_deref(), Some("lfi"));
        assert_eq!(q.search.as_deref(), Some("dupont"));
    }

    #[test]
    fn clearing_group_also_resets_page() {
        let q = query(None, Some("gdr"), 3).with_group(None);
        assert_eq!(q.page(), 1);
        assert!(q.group.is_none());
    }

    #[test]
    fn with_page_keeps_filters() {
        let q = query(Some("dupont"), Some("gdr"), 1).with_page(3);
        assert_eq!(q.page(), 3);
        assert_eq!(q.search.as_deref(), Some("dupont"));
        assert_eq!(q.group.as_deref(), Some("gdr"));
    }

    #[test]
    fn with_page_clamps_to_one() {
        assert_eq!(query(None, None, 5).with_page(0).page(), 1);
    }

    #[test]
    fn normalized_drops_empty_and_whitespace_filters() {
        let q = DeputyQuery {
            search: Some("  ".into()),
            group: Some(String::new()),
            page: None,
        }
        .normalized();
        assert!(q.search.is_none());
        assert!(q.group.is_none());
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn normalized_trims_search() {
        let q = DeputyQuery {
            search: Some("  dupont ".into()),
            group: None,
            page: Some(0),
        }
        .normalized();
        assert_eq!(q.search.as_deref(), Some("dupont"));
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn href_omits_defaults() {
        assert_eq!(query(None, None, 1).href_for("/deputes"), "/deputes");
    }

    #[test]
    fn href_carries_filters_and_page() {
        let q = query(Some("du pont"), Some("gdr"), 3);
        assert_eq!(
            q.href_for("/deputes"),
            "/deputes?search=du%20pont&groupe=gdr&page=3"
        );
    }

    #[test]
    fn pager_disables_prev_on_first_page() {
        let pager = Pager::new("/deputes", &query(None, None, 1), 5);
        assert!(pager.prev_href.is_none());
        assert_eq!(pager.next_href.as_deref(), Some("/deputes?page=2"));
    }

    #[test]
    fn pager_disables_next_on_last_page() {
        let pager = Pager::new("/deputes", &query(None, None, 5), 5);
        assert!(pager.next_href.is_none());
        assert_eq!(pager.prev_href.as_deref(), Some("/deputes?page=4"));
    }

    #[test]
    fn pager_middle_page_links_both_ways() {
        // totalPages=5, page=3: Next goes to 4, Previous to 2
        let pager = Pager::new("/deputes", &query(None, None, 3), 5);
        assert_eq!(pager.prev_href.as_deref(), Some("/deputes?page=2"));
        assert_eq!(pager.next_href.as_deref(), Some("/deputes?page=4"));
    }

    #[test]
    fn pager_preserves_filters_in_links() {
        let pager = Pager::new("/deputes", &query(Some("dupont"), Some("gdr"), 3), 5);
        assert_eq!(
            pager.next_href.as_deref(),
            Some("/deputes?search=dupont&groupe=gdr&page=4")
        );
    }

    #[test]
    fn pager_empty_result_has_no_links() {
        let pager = Pager::new("/deputes", &query(None, None, 1), 0);
        assert!(pager.prev_href.is_none());
        assert!(pager.next_href.is_none());
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let cases = [
            (0, 0, 0, "zero total guards division"),
            (5, 0, 0, "nonzero count with zero total"),
            (1, 3, 33, "rounds down"),
            (2, 3, 67, "rounds up"),
            (1, 2, 50, "exact half"),
            (4, 4, 100, "full share"),
            (0, 10, 0, "zero count"),
        ];
        for (count, total, expected, desc) in cases {
            assert_eq!(percent(count, total), expected, "case '{desc}'");
        }
    }

    proptest! {
        #[test]
        fn percent_never_exceeds_100_for_subset_counts(total in 1u32..10_000, count in 0u32..10_000) {
            let count = count.min(total);
            prop_assert!(percent(count, total) <= 100);
        }

        #[test]
        fn filter_change_always_resets_page(page in 0u32..1000, s in ".{0,12}") {
            let q = query(None, None, page).with_search(Some(&s));
            prop_assert_eq!(q.page(), 1);
        }

        #[test]
        fn pager_hrefs_stay_in_range(page in 1u32..100, total in 0u32..100) {
            let pager = Pager::new("/deputes", &query(None, None, page), total);
            if pager.prev_href.is_some() {
                prop_assert!(page > 1);
            }
            if pager.next_href.is_some() {
                prop_assert!(page < total);
            }
        }
    }
}
