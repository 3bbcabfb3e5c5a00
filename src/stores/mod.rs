//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).
//!
//! Find, update, and delete operations return `Option` rather than failing:
//! at this layer "not found" is an ordinary outcome, and the HTTP layer is
//! responsible for turning it (and wrong-owner hits) into a uniform 404.

mod budget;
mod expense;
mod recurring;
mod user;

pub mod memory;

pub use budget::{BudgetPatch, BudgetStore, NewBudget};
pub use expense::{ExpensePatch, ExpenseQuery, ExpenseStore, NewExpense, SortOrder};
pub use recurring::{NewRecurring, RecurringPatch, RecurringStore};
pub use user::{NewUser, UserPatch, UserStore};

/// The full record store the application is composed against.
///
/// Route handlers are generic over this trait so tests and future backends
/// can swap the storage without touching the HTTP layer.
pub trait Store:
    UserStore + ExpenseStore + BudgetStore + RecurringStore + Clone + Send + Sync + 'static
{
}

impl<T> Store for T where
    T: UserStore + ExpenseStore + BudgetStore + RecurringStore + Clone + Send + Sync + 'static
{
}
