//! Defines the endpoint for getting a single recurring item by its ID.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Json,
    models::{DatabaseID, Recurring},
    recurring::get_owned_recurring,
    stores::Store,
};

/// A route handler for getting one of the authenticated user's recurring
/// items.
pub async fn get_recurring_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(recurring_id): Path<DatabaseID>,
) -> Result<Json<Recurring>, Error> {
    get_owned_recurring(&state.store, recurring_id, claims.sub).map(Json)
}
