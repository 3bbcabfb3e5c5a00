//! Defines the endpoint for editing an existing budget.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    auth::Claims,
    budget::get_owned_budget,
    extract::Json,
    models::{Budget, DatabaseID},
    stores::{BudgetPatch, Store},
};

/// A route handler for applying a partial update to one of the authenticated
/// user's budgets.
///
/// Only the amount and category can change; the window derived at creation
/// stays as it is.
pub async fn edit_budget_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(budget_id): Path<DatabaseID>,
    Json(patch): Json<BudgetPatch>,
) -> Result<Json<Budget>, Error> {
    if patch.amount.is_some_and(|amount| amount < 0.0) {
        return Err(Error::Validation("amount must not be negative".to_owned()));
    }

    get_owned_budget(&state.store, budget_id, claims.sub)?;

    state
        .store
        .update_budget(budget_id, patch)
        .map(Json)
        .ok_or(Error::NotFound)
}
