//! Creating, listing, enriching, editing, and deleting budgets.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{BudgetWithUsage, calculate_usage};
pub use create_endpoint::create_budget_endpoint;
pub use delete_endpoint::delete_budget_endpoint;
pub use edit_endpoint::edit_budget_endpoint;
pub use get_endpoint::get_budget_endpoint;
pub use list_endpoint::list_budgets_endpoint;

use crate::{
    Error,
    models::{Budget, DatabaseID, UserID},
    stores::Store,
};

/// Fetch the budget with `id` if it belongs to `user_id`.
///
/// A missing budget and someone else's budget produce the same
/// [Error::NotFound] so that clients cannot probe for other users' records.
fn get_owned_budget<S: Store>(store: &S, id: DatabaseID, user_id: UserID) -> Result<Budget, Error> {
    store
        .get_budget(id)
        .filter(|budget| budget.user_id == user_id)
        .ok_or(Error::NotFound)
}
