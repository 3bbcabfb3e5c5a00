//! Creating, listing, editing, and deleting expenses.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use create_endpoint::{ExpensePayload, create_expense_endpoint};
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use get_endpoint::get_expense_endpoint;
pub use list_endpoint::{ExpenseListResponse, list_expenses_endpoint};

use crate::{
    Error,
    models::{DatabaseID, Expense, UserID},
    stores::Store,
};

/// Fetch the expense with `id` if it belongs to `user_id`.
///
/// A missing expense and someone else's expense produce the same
/// [Error::NotFound] so that clients cannot probe for other users' records.
fn get_owned_expense<S: Store>(store: &S, id: DatabaseID, user_id: UserID) -> Result<Expense, Error> {
    store
        .get_expense(id)
        .filter(|expense| expense.user_id == user_id)
        .ok_or(Error::NotFound)
}

/// Reject negative amounts with a field-level message.
fn validate_amount(amount: f64) -> Result<(), Error> {
    if amount < 0.0 {
        return Err(Error::Validation("amount must not be negative".to_owned()));
    }

    Ok(())
}
