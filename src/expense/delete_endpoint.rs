//! Defines the endpoint for deleting an expense.

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    auth::Claims,
    expense::get_owned_expense,
    extract::Json,
    models::DatabaseID,
    stores::Store,
};

/// A route handler for deleting one of the authenticated user's expenses.
pub async fn delete_expense_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(expense_id): Path<DatabaseID>,
) -> Result<Json<Value>, Error> {
    get_owned_expense(&state.store, expense_id, claims.sub)?;

    state
        .store
        .delete_expense(expense_id)
        .ok_or(Error::NotFound)?;

    Ok(Json(json!({ "message": "Expense deleted successfully" })))
}
