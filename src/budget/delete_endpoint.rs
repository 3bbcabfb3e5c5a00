//! Defines the endpoint for deleting a budget.

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    auth::Claims,
    budget::get_owned_budget,
    extract::Json,
    models::DatabaseID,
    stores::Store,
};

/// A route handler for deleting one of the authenticated user's budgets.
pub async fn delete_budget_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(budget_id): Path<DatabaseID>,
) -> Result<Json<Value>, Error> {
    get_owned_budget(&state.store, budget_id, claims.sub)?;

    state
        .store
        .delete_budget(budget_id)
        .ok_or(Error::NotFound)?;

    Ok(Json(json!({ "message": "Budget deleted successfully" })))
}
