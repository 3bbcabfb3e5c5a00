//! Defines the endpoint for listing budgets.

use axum::extract::State;

use crate::{
    AppState,
    auth::Claims,
    extract::Json,
    models::Budget,
    stores::Store,
};

/// A route handler for listing the authenticated user's budgets, newest
/// first.
pub async fn list_budgets_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
) -> Json<Vec<Budget>> {
    Json(state.store.list_budgets(claims.sub))
}
