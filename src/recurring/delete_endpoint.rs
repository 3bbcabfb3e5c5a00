//! Defines the endpoint for deleting a recurring item.

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Json,
    models::DatabaseID,
    recurring::get_owned_recurring,
    stores::Store,
};

/// A route handler for deleting one of the authenticated user's recurring
/// items.
///
/// Expenses previously materialized from the item are untouched.
pub async fn delete_recurring_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(recurring_id): Path<DatabaseID>,
) -> Result<Json<Value>, Error> {
    get_owned_recurring(&state.store, recurring_id, claims.sub)?;

    state
        .store
        .delete_recurring(recurring_id)
        .ok_or(Error::NotFound)?;

    Ok(Json(json!({ "message": "Recurring item deleted successfully" })))
}
