//! Defines the endpoint for editing an existing recurring item.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Json,
    models::{DatabaseID, Recurring},
    recurring::get_owned_recurring,
    stores::{RecurringPatch, Store},
};

/// A route handler for applying a partial update to one of the authenticated
/// user's recurring items.
///
/// Activation and deactivation happen here via the `isActive` field. The
/// schedule itself (frequency, dates) is fixed at creation; only processing
/// moves the next due date.
pub async fn edit_recurring_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(recurring_id): Path<DatabaseID>,
    Json(patch): Json<RecurringPatch>,
) -> Result<Json<Recurring>, Error> {
    if patch.amount.is_some_and(|amount| amount < 0.0) {
        return Err(Error::Validation("amount must not be negative".to_owned()));
    }

    get_owned_recurring(&state.store, recurring_id, claims.sub)?;

    state
        .store
        .update_recurring(recurring_id, patch)
        .map(Json)
        .ok_or(Error::NotFound)
}
