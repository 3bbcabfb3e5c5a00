//! This file defines the `Budget` type, a spending limit over a window of
//! time and optionally a single category.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::models::{Category, DatabaseID, UserID};

/// How long a budget's window runs for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// The window covers one calendar month.
    Monthly,
    /// The window covers one calendar year.
    Yearly,
}

/// A spending limit owned by one user.
///
/// The end date is derived from the start date and period once, when the
/// budget is created. Editing the budget never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The budget's ID in the record store.
    pub id: DatabaseID,
    /// The ID of the user that owns this budget.
    pub user_id: UserID,
    /// Restricts the budget to one category. `None` covers all spending.
    pub category: Option<Category>,
    /// The spending limit. Never negative.
    pub amount: f64,
    /// The length of the budget window.
    pub period: BudgetPeriod,
    /// The first day of the budget window.
    pub start_date: Date,
    /// The last day of the budget window, derived at creation.
    pub end_date: Date,
    /// When the record was created.
    pub created_at: OffsetDateTime,
    /// When the record was last modified.
    pub updated_at: OffsetDateTime,
}
