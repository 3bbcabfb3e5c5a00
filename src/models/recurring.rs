//! This file defines the `Recurring` type, a template transaction that
//! repeats on a regular schedule (e.g. wages, phone bill).

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::models::{DatabaseID, UserID};

/// Whether a recurring item adds or removes money.
///
/// Only expense items materialize an [Expense](crate::models::Expense) when
/// processed; income items just advance their due date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringKind {
    /// Money going out.
    Expense,
    /// Money coming in.
    Income,
}

/// How often a recurring item happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every seven days.
    Weekly,
    /// A calendar month of variable length.
    Monthly,
    /// A calendar year.
    Yearly,
}

/// A transaction that repeats on a regular basis, owned by one user.
///
/// The category is free text rather than the fixed [Category](crate::models::Category)
/// vocabulary; it is mapped back onto the vocabulary when the item is
/// materialized into an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurring {
    /// The recurring item's ID in the record store.
    pub id: DatabaseID,
    /// The ID of the user that owns this item.
    pub user_id: UserID,
    /// Whether this item is an expense or income.
    #[serde(rename = "type")]
    pub kind: RecurringKind,
    /// The amount of each occurrence. Never negative.
    pub amount: f64,
    /// Free-text label describing the item.
    pub category: String,
    /// Optional free-text detail.
    pub description: Option<String>,
    /// How often the item occurs.
    pub frequency: Frequency,
    /// The date of the first occurrence.
    pub start_date: Date,
    /// An optional date after which the item stops recurring.
    pub end_date: Option<Date>,
    /// The date the item is next eligible to be processed.
    pub next_due_date: Date,
    /// Whether the item can currently be processed.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: OffsetDateTime,
    /// When the record was last modified.
    pub updated_at: OffsetDateTime,
}
