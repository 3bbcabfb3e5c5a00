//! Defines the budget store trait and the types used to create and update
//! budgets.

use serde::Deserialize;
use time::Date;

use crate::models::{Budget, BudgetPeriod, Category, DatabaseID, UserID};

/// Handles the creation and retrieval of budgets.
pub trait BudgetStore {
    /// Create a new budget in the store.
    fn insert_budget(&self, new_budget: NewBudget) -> Budget;

    /// Retrieve a budget by its ID, or `None` if no budget has that ID.
    fn get_budget(&self, id: DatabaseID) -> Option<Budget>;

    /// Retrieve the budgets owned by `user_id`, newest first.
    fn list_budgets(&self, user_id: UserID) -> Vec<Budget>;

    /// Apply `patch` to the budget with `id` and return the updated budget,
    /// or `None` if no budget has that ID.
    ///
    /// The end date is fixed at creation and is never recomputed here, even
    /// when the patch changes the amount or category.
    fn update_budget(&self, id: DatabaseID, patch: BudgetPatch) -> Option<Budget>;

    /// Remove the budget with `id` from the store and return it, or `None`
    /// if no budget has that ID.
    fn delete_budget(&self, id: DatabaseID) -> Option<Budget>;
}

/// The data needed to create a budget. The store assigns the ID and
/// timestamps; the caller derives the end date from the start date and
/// period.
#[derive(Debug, Clone)]
pub struct NewBudget {
    /// The ID of the user that owns the budget.
    pub user_id: UserID,
    /// Restricts the budget to one category. `None` covers all spending.
    pub category: Option<Category>,
    /// The spending limit.
    pub amount: f64,
    /// The length of the budget window.
    pub period: BudgetPeriod,
    /// The first day of the budget window.
    pub start_date: Date,
    /// The last day of the budget window.
    pub end_date: Date,
}

/// The fields of a budget that an update may change.
///
/// `None` leaves the stored value unchanged. Unknown fields in the request
/// body are rejected rather than silently dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BudgetPatch {
    /// A new spending limit.
    pub amount: Option<f64>,
    /// A new category restriction.
    pub category: Option<Category>,
}

impl BudgetPatch {
    /// Merge the set fields of this patch into `budget`, field by field.
    pub fn apply(self, budget: &mut Budget) {
        if let Some(amount) = self.amount {
            budget.amount = amount;
        }

        if let Some(category) = self.category {
            budget.category = Some(category);
        }
    }
}
