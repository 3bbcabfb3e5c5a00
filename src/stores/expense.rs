//! Defines the expense store trait and its query and patch types.

use serde::Deserialize;
use time::Date;

use crate::models::{Category, DatabaseID, Expense, PaymentMethod, UserID};

/// Handles the creation and retrieval of expenses.
pub trait ExpenseStore {
    /// Create a new expense in the store.
    fn insert_expense(&self, new_expense: NewExpense) -> Expense;

    /// Retrieve an expense by its ID, or `None` if no expense has that ID.
    ///
    /// The caller is responsible for checking that the expense belongs to
    /// the requesting user.
    fn get_expense(&self, id: DatabaseID) -> Option<Expense>;

    /// Retrieve the expenses owned by `user_id` in the way defined by `query`.
    fn list_expenses(&self, user_id: UserID, query: &ExpenseQuery) -> Vec<Expense>;

    /// Apply `patch` to the expense with `id` and return the updated expense,
    /// or `None` if no expense has that ID.
    fn update_expense(&self, id: DatabaseID, patch: ExpensePatch) -> Option<Expense>;

    /// Remove the expense with `id` from the store and return it, or `None`
    /// if no expense has that ID.
    fn delete_expense(&self, id: DatabaseID) -> Option<Expense>;
}

/// The data needed to create an expense. The store assigns the ID and
/// timestamps.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// The ID of the user that owns the expense.
    pub user_id: UserID,
    /// The amount of money spent.
    pub amount: f64,
    /// The calendar date the money was spent.
    pub date: Date,
    /// What kind of spend this was.
    pub category: Category,
    /// Optional free-text detail.
    pub description: Option<String>,
    /// How the expense was paid.
    pub payment_method: PaymentMethod,
    /// Free-form labels for ad-hoc grouping.
    pub tags: Vec<String>,
}

/// Defines how expenses should be fetched from [ExpenseStore::list_expenses].
///
/// Date bounds are inclusive; an absent bound is unbounded on that side.
#[derive(Debug, Clone, Default)]
pub struct ExpenseQuery {
    /// Only include expenses on or after this date.
    pub start_date: Option<Date>,
    /// Only include expenses on or before this date.
    pub end_date: Option<Date>,
    /// Only include expenses with this category.
    pub category: Option<Category>,
    /// Only include expenses paid with this method.
    pub payment_method: Option<PaymentMethod>,
    /// Orders expenses by date in the order `sort_date`. `None` returns
    /// expenses in the order they are stored.
    pub sort_date: Option<SortOrder>,
}

impl ExpenseQuery {
    /// Whether `expense` passes every filter in this query.
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.start_date.is_some_and(|start| expense.date < start) {
            return false;
        }

        if self.end_date.is_some_and(|end| expense.date > end) {
            return false;
        }

        if self.category.is_some_and(|category| expense.category != category) {
            return false;
        }

        if self
            .payment_method
            .is_some_and(|method| expense.payment_method != method)
        {
            return false;
        }

        true
    }
}

/// The order to sort expenses in an [ExpenseQuery].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

/// The fields of an expense that an update may change.
///
/// `None` leaves the stored value unchanged. Unknown fields in the request
/// body are rejected rather than silently dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpensePatch {
    /// A new amount.
    pub amount: Option<f64>,
    /// A new date.
    pub date: Option<Date>,
    /// A new category.
    pub category: Option<Category>,
    /// A new payment method.
    pub payment_method: Option<PaymentMethod>,
    /// A new description.
    pub description: Option<String>,
    /// A new tag list, replacing the old one wholesale.
    pub tags: Option<Vec<String>>,
}

impl ExpensePatch {
    /// Merge the set fields of this patch into `expense`, field by field.
    pub fn apply(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }

        if let Some(date) = self.date {
            expense.date = date;
        }

        if let Some(category) = self.category {
            expense.category = category;
        }

        if let Some(payment_method) = self.payment_method {
            expense.payment_method = payment_method;
        }

        if let Some(description) = self.description {
            expense.description = Some(description);
        }

        if let Some(tags) = self.tags {
            expense.tags = tags;
        }
    }
}
