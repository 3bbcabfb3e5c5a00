//! Defines the recurring item store trait and the types used to create and
//! update recurring items.

use serde::Deserialize;
use time::Date;

use crate::models::{DatabaseID, Frequency, Recurring, RecurringKind, UserID};

/// Handles the creation and retrieval of recurring items.
pub trait RecurringStore {
    /// Create a new recurring item in the store.
    fn insert_recurring(&self, new_recurring: NewRecurring) -> Recurring;

    /// Retrieve a recurring item by its ID, or `None` if no item has that ID.
    fn get_recurring(&self, id: DatabaseID) -> Option<Recurring>;

    /// Retrieve the recurring items owned by `user_id`, earliest due first.
    ///
    /// Passing `Some(active)` keeps only items whose active flag matches.
    fn list_recurring(&self, user_id: UserID, active: Option<bool>) -> Vec<Recurring>;

    /// Apply `patch` to the recurring item with `id` and return the updated
    /// item, or `None` if no item has that ID.
    fn update_recurring(&self, id: DatabaseID, patch: RecurringPatch) -> Option<Recurring>;

    /// Replace the next due date of the recurring item with `id` and return
    /// the updated item, or `None` if no item has that ID.
    ///
    /// This is how processing advances the schedule; the date is not part of
    /// [RecurringPatch] so that clients cannot set it directly.
    fn set_next_due_date(&self, id: DatabaseID, next_due_date: Date) -> Option<Recurring>;

    /// Remove the recurring item with `id` from the store and return it, or
    /// `None` if no item has that ID.
    fn delete_recurring(&self, id: DatabaseID) -> Option<Recurring>;
}

/// The data needed to create a recurring item. The store assigns the ID and
/// timestamps; the caller computes the initial next due date.
#[derive(Debug, Clone)]
pub struct NewRecurring {
    /// The ID of the user that owns the item.
    pub user_id: UserID,
    /// Whether the item is an expense or income.
    pub kind: RecurringKind,
    /// The amount of each occurrence.
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
    /// The date the item is first eligible to be processed.
    pub next_due_date: Date,
    /// Whether the item starts active.
    pub is_active: bool,
}

/// The fields of a recurring item that an update may change.
///
/// `None` leaves the stored value unchanged. Unknown fields in the request
/// body are rejected rather than silently dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecurringPatch {
    /// A new amount.
    pub amount: Option<f64>,
    /// A new description.
    pub description: Option<String>,
    /// Activate or deactivate the item.
    pub is_active: Option<bool>,
}

impl RecurringPatch {
    /// Merge the set fields of this patch into `recurring`, field by field.
    pub fn apply(self, recurring: &mut Recurring) {
        if let Some(amount) = self.amount {
            recurring.amount = amount;
        }

        if let Some(description) = self.description {
            recurring.description = Some(description);
        }

        if let Some(is_active) = self.is_active {
            recurring.is_active = is_active;
        }
    }
}
