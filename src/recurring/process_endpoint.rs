//! Defines the endpoint for processing a recurring item.
//!
//! Processing is the only way a recurring item turns into a concrete
//! expense, and the only thing that moves its next due date.

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Json,
    models::{Category, DatabaseID, PaymentMethod, Recurring, RecurringKind},
    recurring::get_owned_recurring,
    schedule::next_occurrence,
    stores::{NewExpense, Store},
};

/// The payment method stamped onto materialized expenses.
const MATERIALIZED_PAYMENT_METHOD: PaymentMethod = PaymentMethod::BankTransfer;

/// The response to a successful process call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// A human-readable confirmation.
    pub message: String,
    /// The recurring item with its advanced due date.
    pub recurring: Recurring,
}

/// A route handler that processes one of the authenticated user's recurring
/// items.
///
/// An active expense-kind item materializes a new expense dated today with
/// the item's amount and category; an income-kind item has no expense to
/// create. Either way the next due date advances one frequency step from its
/// previous value, not from today.
///
/// # Errors
///
/// Responds with 400 and leaves everything untouched when the item is
/// inactive.
pub async fn process_recurring_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(recurring_id): Path<DatabaseID>,
) -> Result<Json<ProcessResponse>, Error> {
    let recurring = get_owned_recurring(&state.store, recurring_id, claims.sub)?;

    if !recurring.is_active {
        return Err(Error::InactiveRecurring);
    }

    if recurring.kind == RecurringKind::Expense {
        // Free-text labels outside the fixed vocabulary land in Miscellaneous.
        let category =
            Category::from_label(&recurring.category).unwrap_or(Category::Miscellaneous);

        let description = recurring
            .description
            .clone()
            .unwrap_or_else(|| format!("Recurring: {}", recurring.category));

        state.store.insert_expense(NewExpense {
            user_id: recurring.user_id,
            amount: recurring.amount,
            date: OffsetDateTime::now_utc().date(),
            category,
            description: Some(description),
            payment_method: MATERIALIZED_PAYMENT_METHOD,
            tags: vec![],
        });
    }

    let next_due_date = next_occurrence(recurring.next_due_date, recurring.frequency);

    let recurring = state
        .store
        .set_next_due_date(recurring_id, next_due_date)
        .ok_or(Error::NotFound)?;

    Ok(Json(ProcessResponse {
        message: "Recurring item processed successfully".to_owned(),
        recurring,
    }))
}
