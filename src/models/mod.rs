//! This module defines the domain data types.

mod budget;
mod expense;
mod recurring;
mod user;

pub use budget::{Budget, BudgetPeriod};
pub use expense::{Category, Expense, PaymentMethod};
pub use recurring::{Frequency, Recurring, RecurringKind};
pub use user::{User, UserID, UserProfile};

/// Alias for the integer type used for record IDs.
pub type DatabaseID = i64;
