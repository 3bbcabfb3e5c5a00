//! Defines the endpoint for getting a single expense by its ID.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    auth::Claims,
    expense::get_owned_expense,
    extract::Json,
    models::{DatabaseID, Expense},
    stores::Store,
};

/// A route handler for getting one of the authenticated user's expenses.
///
/// Responds with 404 when the expense does not exist or belongs to another
/// user.
pub async fn get_expense_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(expense_id): Path<DatabaseID>,
) -> Result<Json<Expense>, Error> {
    get_owned_expense(&state.store, expense_id, claims.sub).map(Json)
}
