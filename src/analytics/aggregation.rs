//! Expense aggregation for the analytics endpoints.
//!
//! Every function here is pure: it takes a slice of expenses already scoped
//! to one owner and produces summary values without touching the store.
//! Empty input always produces an empty or zeroed result, never an error.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    models::{Category, Expense, PaymentMethod},
    schedule::add_months,
};

/// The total spend and record count for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    /// The category the totals are for.
    pub category: Category,
    /// The sum of the category's expense amounts.
    pub total: f64,
    /// How many expenses the category has.
    pub count: u64,
}

/// Partition `expenses` by category, sorted by total descending.
///
/// Categories with equal totals keep the order in which they were first
/// encountered.
pub fn spending_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut groups: Vec<CategorySpending> = Vec::new();

    for expense in expenses {
        match groups
            .iter_mut()
            .find(|group| group.category == expense.category)
        {
            Some(group) => {
                group.total += expense.amount;
                group.count += 1;
            }
            None => groups.push(CategorySpending {
                category: expense.category,
                total: expense.amount,
                count: 1,
            }),
        }
    }

    // A stable sort keeps first-seen order for equal totals.
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));

    groups
}

/// The total spend and record count for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpending {
    /// The year of the month the totals are for.
    pub year: i32,
    /// The month the totals are for, 1 through 12.
    pub month: u8,
    /// The sum of the month's expense amounts.
    pub total: f64,
    /// How many expenses fall in the month.
    pub count: u64,
}

/// Group the trailing `months` months of `expenses` by calendar month,
/// ordered chronologically.
///
/// The cutoff is `today` stepped back `months` calendar months; expenses on
/// or after the cutoff are included.
pub fn monthly_trends(expenses: &[Expense], months: u32, today: Date) -> Vec<MonthlySpending> {
    let cutoff = add_months(today, -(months as i32));

    let mut groups: BTreeMap<(i32, u8), (f64, u64)> = BTreeMap::new();

    for expense in expenses.iter().filter(|expense| expense.date >= cutoff) {
        let key = (expense.date.year(), expense.date.month() as u8);
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((year, month), (total, count))| MonthlySpending {
            year,
            month,
            total,
            count,
        })
        .collect()
}

/// The total spend and record count for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySpending {
    /// The date the totals are for.
    pub date: Date,
    /// The sum of the date's expense amounts.
    pub total: f64,
    /// How many expenses fall on the date.
    pub count: u64,
}

/// Group `expenses` by calendar date, ordered chronologically.
///
/// Any date filtering is the caller's job; this function groups whatever it
/// is given.
pub fn daily_spending(expenses: &[Expense]) -> Vec<DailySpending> {
    let mut groups: BTreeMap<Date, (f64, u64)> = BTreeMap::new();

    for expense in expenses {
        let entry = groups.entry(expense.date).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (total, count))| DailySpending { date, total, count })
        .collect()
}

/// Aggregate statistics over a set of expense amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// The sum of all amounts.
    pub total: f64,
    /// The mean amount. Zero for an empty set.
    pub average: f64,
    /// How many expenses there are.
    pub count: u64,
    /// The smallest amount. Zero for an empty set.
    pub min: f64,
    /// The largest amount. Zero for an empty set.
    pub max: f64,
}

/// The total spend for one payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodTotal {
    /// The payment method the total is for.
    pub payment_method: PaymentMethod,
    /// The sum of amounts paid with the method.
    pub total: f64,
}

/// Overall statistics plus a per-payment-method breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Statistics over every expense in the input.
    pub overall: SummaryStatistics,
    /// Totals per payment method, in first-seen order.
    pub by_payment_method: Vec<PaymentMethodTotal>,
}

/// Compute summary statistics over `expenses`.
///
/// An empty input produces all-zero statistics and an empty breakdown; it
/// never divides by zero.
pub fn summarize(expenses: &[Expense]) -> Summary {
    if expenses.is_empty() {
        return Summary {
            overall: SummaryStatistics {
                total: 0.0,
                average: 0.0,
                count: 0,
                min: 0.0,
                max: 0.0,
            },
            by_payment_method: Vec::new(),
        };
    }

    let mut total = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut by_payment_method: Vec<PaymentMethodTotal> = Vec::new();

    for expense in expenses {
        total += expense.amount;
        min = min.min(expense.amount);
        max = max.max(expense.amount);

        match by_payment_method
            .iter_mut()
            .find(|entry| entry.payment_method == expense.payment_method)
        {
            Some(entry) => entry.total += expense.amount,
            None => by_payment_method.push(PaymentMethodTotal {
                payment_method: expense.payment_method,
                total: expense.amount,
            }),
        }
    }

    let count = expenses.len() as u64;

    Summary {
        overall: SummaryStatistics {
            total,
            average: total / count as f64,
            count,
            min,
            max,
        },
        by_payment_method,
    }
}

/// The total spend and record count within one comparison period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// The sum of amounts inside the period.
    pub total: f64,
    /// How many expenses fall inside the period.
    pub count: u64,
}

/// The outcome of comparing spending across two periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    /// Totals for the first period.
    pub period1: PeriodTotals,
    /// Totals for the second period.
    pub period2: PeriodTotals,
    /// `period2.total - period1.total`.
    pub difference: f64,
    /// The difference as a percentage of the first period's total, rounded
    /// to two decimal places. Zero when the first period has no spending.
    pub percentage_change: f64,
}

/// Compare the spending inside two inclusive date ranges.
pub fn compare_periods(
    expenses: &[Expense],
    period1: RangeInclusive<Date>,
    period2: RangeInclusive<Date>,
) -> PeriodComparison {
    let totals_within = |range: &RangeInclusive<Date>| {
        let mut totals = PeriodTotals {
            total: 0.0,
            count: 0,
        };

        for expense in expenses.iter().filter(|e| range.contains(&e.date)) {
            totals.total += expense.amount;
            totals.count += 1;
        }

        totals
    };

    let period1 = totals_within(&period1);
    let period2 = totals_within(&period2);

    let difference = period2.total - period1.total;
    let percentage_change = if period1.total > 0.0 {
        (difference / period1.total * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    };

    PeriodComparison {
        period1,
        period2,
        difference,
        percentage_change,
    }
}
