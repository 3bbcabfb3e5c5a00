//! Computes how much of a budget has been used.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, Expense};

/// A budget enriched with how much of it has been spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetWithUsage {
    /// The budget record itself.
    #[serde(flatten)]
    pub budget: Budget,
    /// The total of the expenses that fall inside the budget's window and
    /// category.
    pub spending: f64,
    /// The limit minus the spending. Goes negative once the budget is blown.
    pub remaining: f64,
    /// Spending as a percentage of the limit, capped at 100.
    pub percentage: f64,
}

/// Enrich `budget` with the spending accrued against it.
///
/// `expenses` should already be scoped to the budget's owner; this function
/// applies the date window (inclusive on both ends) and the category
/// restriction, if any. A zero limit counts as fully used the moment
/// anything is spent, and as untouched otherwise.
pub fn calculate_usage(budget: Budget, expenses: &[Expense]) -> BudgetWithUsage {
    let spending: f64 = expenses
        .iter()
        .filter(|expense| {
            expense.date >= budget.start_date
                && expense.date <= budget.end_date
                && budget
                    .category
                    .is_none_or(|category| expense.category == category)
        })
        .map(|expense| expense.amount)
        .sum();

    let remaining = budget.amount - spending;
    let percentage = if budget.amount > 0.0 {
        (spending / budget.amount * 100.0).min(100.0)
    } else if spending > 0.0 {
        100.0
    } else {
        0.0
    };

    BudgetWithUsage {
        budget,
        spending,
        remaining,
        percentage,
    }
}
