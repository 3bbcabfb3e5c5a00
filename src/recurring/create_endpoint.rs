//! Defines the endpoint for creating a new recurring item.

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Json,
    models::{Frequency, Recurring, RecurringKind},
    schedule::next_occurrence,
    stores::{NewRecurring, Store},
};

/// The request body for creating a recurring item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPayload {
    /// Whether the item is an expense or income.
    #[serde(rename = "type")]
    pub kind: RecurringKind,
    /// The amount of each occurrence.
    pub amount: f64,
    /// Free-text label describing the item.
    pub category: String,
    /// How often the item occurs.
    pub frequency: Frequency,
    /// The date of the first occurrence.
    pub start_date: Date,
    /// Optional free-text detail.
    pub description: Option<String>,
    /// An optional date after which the item stops recurring.
    pub end_date: Option<Date>,
}

/// A route handler for creating a new recurring item owned by the
/// authenticated user.
///
/// The item starts active, with its next due date one frequency step after
/// the start date.
pub async fn create_recurring_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Json(payload): Json<RecurringPayload>,
) -> Result<(StatusCode, Json<Recurring>), Error> {
    if payload.amount < 0.0 {
        return Err(Error::Validation("amount must not be negative".to_owned()));
    }

    let category = payload.category.trim();
    if category.is_empty() {
        return Err(Error::Validation("category must not be empty".to_owned()));
    }

    let next_due_date = next_occurrence(payload.start_date, payload.frequency);

    let recurring = state.store.insert_recurring(NewRecurring {
        user_id: claims.sub,
        kind: payload.kind,
        amount: payload.amount,
        category: category.to_owned(),
        description: payload.description,
        frequency: payload.frequency,
        start_date: payload.start_date,
        end_date: payload.end_date,
        next_due_date,
        is_active: true,
    });

    Ok((StatusCode::CREATED, Json(recurring)))
}
