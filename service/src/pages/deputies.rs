//! Public deputies listing page.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use crate::pages::filters::{DeputyQuery, Pager};
use crate::pages::templates::{group_options, DeputiesTemplate, DeputyRow};
use crate::pages::{chrome, render, upstream_error};
use crate::state::AppState;

/// `GET /deputes` — searchable, filterable, paginated deputy list.
pub async fn deputies_page(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<DeputyQuery>,
) -> Response {
    let query = raw.normalized();

    let (groups, page) = tokio::join!(
        state.api.list_groups(),
        state.api.list_deputies(
            query.search.as_deref(),
            query.group.as_deref(),
            query.page(),
            state.page_size,
        )
    );

    let groups = match groups {
        Ok(groups) => groups,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch parliamentary groups");
            return upstream_error(&state);
        }
    };
    let page = match page {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch deputies page");
            return upstream_error(&state);
        }
    };

    let template = DeputiesTemplate {
        chrome: chrome(&state),
        search_value: query.search.clone().unwrap_or_default(),
        groups: group_options(&groups, &query),
        rows: page.data.iter().map(DeputyRow::from).collect(),
        total: page.total,
        pager: Pager::new("/deputes", &query, page.total_pages),
    };
    render(&template).into_response()
}
