//! Defines the endpoint for listing recurring items.

use axum::extract::State;
use serde::Deserialize;

use crate::{
    AppState,
    auth::Claims,
    extract::{Json, Query},
    models::Recurring,
    stores::Store,
};

/// The query parameters for listing recurring items.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringListParams {
    /// Only include items whose active flag matches.
    pub is_active: Option<bool>,
}

/// A route handler for listing the authenticated user's recurring items,
/// earliest due first.
pub async fn list_recurring_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<RecurringListParams>,
) -> Json<Vec<Recurring>> {
    Json(state.store.list_recurring(claims.sub, params.is_active))
}
