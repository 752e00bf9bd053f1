//! Askama templates for the public pages.

use askama::Template;

use crate::assembly::{Deputy, GroupSummary};
use crate::pages::filters::{DeputyQuery, Pager};

/// Data every page hands to the shared layout (header/footer chrome).
pub struct Chrome {
    pub version: String,
}

/// One deputy row, flattened for rendering.
///
/// Optional upstream fields collapse to empty strings or placeholders so
/// templates stay free of `Option` plumbing.
pub struct DeputyRow {
    pub name: String,
    pub slug: String,
    pub photo_url: String,
    pub group_name: String,
    pub group_color: String,
    pub district: String,
    pub votes: String,
}

impl From<&Deputy> for DeputyRow {
    fn from(deputy: &Deputy) -> Self {
        let (group_name, group_color) = deputy
            .group
            .as_ref()
            .map_or_else(|| (String::new(), "#8a8a8a".to_string()), |g| {
                (g.name.clone(), g.color.clone())
            });
        let district = deputy.district.as_ref().map_or_else(String::new, |d| {
            format!("{} — {}ᵉ circonscription", d.department, d.number)
        });
        let votes = deputy
            .vote_count
            .map_or_else(|| "—".to_string(), |n| n.to_string());
        Self {
            name: deputy.full_name(),
            slug: deputy.slug.clone(),
            photo_url: deputy.photo_url.clone().unwrap_or_default(),
            group_name,
            group_color,
            district,
            votes,
        }
    }
}

/// Group entry for the filter select.
pub struct GroupOption {
    pub slug: String,
    pub name: String,
    pub member_count: u32,
    pub selected: bool,
}

/// Build the group select options, marking the active filter.
#[must_use]
pub fn group_options(groups: &[GroupSummary], query: &DeputyQuery) -> Vec<GroupOption> {
    groups
        .iter()
        .map(|g| GroupOption {
            slug: g.slug.clone(),
            name: g.name.clone(),
            member_count: g.member_count,
            selected: query.group.as_deref() == Some(g.slug.as_str()),
        })
        .collect()
}

/// Public deputies listing page.
#[derive(Template)]
#[template(path = "deputies.html")]
pub struct DeputiesTemplate {
    pub chrome: Chrome,
    pub search_value: String,
    pub groups: Vec<GroupOption>,
    pub rows: Vec<DeputyRow>,
    pub total: u32,
    pub pager: Pager,
}

/// Error panel shown when the upstream API is unreachable.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub chrome: Chrome,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{District, GroupRef};
    use askama::Template;

    fn sample_deputy() -> Deputy {
        Deputy {
            id: "PA1234".into(),
            slug: "jeanne-martin".into(),
            first_name: "Jeanne".into(),
            last_name: "Martin".into(),
            photo_url: None,
            group: Some(GroupRef {
                slug: "gdr".into(),
                name: "Gauche démocrate et républicaine".into(),
                color: "#dd0000".into(),
            }),
            district: Some(District {
                department: "Gironde".into(),
                number: 3,
                name: "Troisième circonscription".into(),
            }),
            vote_count: Some(42),
        }
    }

    #[test]
    fn deputy_row_flattens_optional_fields() {
        let row = DeputyRow::from(&sample_deputy());
        assert_eq!(row.name, "Jeanne Martin");
        assert_eq!(row.group_name, "Gauche démocrate et républicaine");
        assert_eq!(row.group_color, "#dd0000");
        assert!(row.district.contains("Gironde"));
        assert_eq!(row.votes, "42");
        assert!(row.photo_url.is_empty());
    }

    #[test]
    fn deputy_row_without_group_gets_neutral_color() {
        let mut deputy = sample_deputy();
        deputy.group = None;
        deputy.vote_count = None;
        let row = DeputyRow::from(&deputy);
        assert!(row.group_name.is_empty());
        assert_eq!(row.group_color, "#8a8a8a");
        assert_eq!(row.votes, "—");
    }

    #[test]
    fn group_options_mark_active_filter() {
        let groups = vec![
            GroupSummary {
                slug: "gdr".into(),
                name: "GDR".into(),
                member_count: 17,
            },
            GroupSummary {
                slug: "lfi".into(),
                name: "LFI".into(),
                member_count: 71,
            },
        ];
        let query = DeputyQuery::default().with_group(Some("lfi"));
        let options = group_options(&groups, &query);
        assert!(!options[0].selected);
        assert!(options[1].selected);
    }

    #[test]
    fn deputies_template_renders_rows_and_total() {
        let query = DeputyQuery::default().with_page(3);
        let template = DeputiesTemplate {
            chrome: Chrome {
                version: "test".into(),
            },
            search_value: String::new(),
            groups: Vec::new(),
            rows: vec![DeputyRow::from(&sample_deputy())],
            total: 577,
            pager: Pager::new("/deputes", &query, 5),
        };
        let html = template.render().expect("should render");
        assert!(html.contains("Jeanne Martin"));
        assert!(html.contains("577"));
        assert!(html.contains("/deputes?page=2"));
        assert!(html.contains("/deputes?page=4"));
    }

    #[test]
    fn error_template_renders_message() {
        let template = ErrorTemplate {
            chrome: Chrome {
                version: "test".into(),
            },
            message: "Impossible de charger les données.".into(),
        };
        let html = template.render().expect("should render");
        assert!(html.contains("Impossible de charger"));
    }
}
