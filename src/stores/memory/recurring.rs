//! Implements the in-memory recurring item store.

use time::{Date, OffsetDateTime};

use crate::{
    models::{DatabaseID, Recurring, UserID},
    stores::{NewRecurring, RecurringPatch, RecurringStore, memory::MemoryStore},
};

impl RecurringStore for MemoryStore {
    fn insert_recurring(&self, new_recurring: NewRecurring) -> Recurring {
        let now = OffsetDateTime::now_utc();
        let recurring = Recurring {
            id: self.next_id(),
            user_id: new_recurring.user_id,
            kind: new_recurring.kind,
            amount: new_recurring.amount,
            category: new_recurring.category,
            description: new_recurring.description,
            frequency: new_recurring.frequency,
            start_date: new_recurring.start_date,
            end_date: new_recurring.end_date,
            next_due_date: new_recurring.next_due_date,
            is_active: new_recurring.is_active,
            created_at: now,
            updated_at: now,
        };

        self.recurring.lock().unwrap().push(recurring.clone());

        recurring
    }

    fn get_recurring(&self, id: DatabaseID) -> Option<Recurring> {
        self.recurring
            .lock()
            .unwrap()
            .iter()
            .find(|recurring| recurring.id == id)
            .cloned()
    }

    fn list_recurring(&self, user_id: UserID, active: Option<bool>) -> Vec<Recurring> {
        let mut items: Vec<Recurring> = self
            .recurring
            .lock()
            .unwrap()
            .iter()
            .filter(|recurring| {
                recurring.user_id == user_id
                    && active.is_none_or(|active| recurring.is_active == active)
            })
            .cloned()
            .collect();

        items.sort_by_key(|recurring| recurring.next_due_date);

        items
    }

    fn update_recurring(&self, id: DatabaseID, patch: RecurringPatch) -> Option<Recurring> {
        let mut items = self.recurring.lock().unwrap();
        let recurring = items.iter_mut().find(|recurring| recurring.id == id)?;

        patch.apply(recurring);
        recurring.updated_at = OffsetDateTime::now_utc();

        Some(recurring.clone())
    }

    fn set_next_due_date(&self, id: DatabaseID, next_due_date: Date) -> Option<Recurring> {
        let mut items = self.recurring.lock().unwrap();
        let recurring = items.iter_mut().find(|recurring| recurring.id == id)?;

        recurring.next_due_date = next_due_date;
        recurring.updated_at = OffsetDateTime::now_utc();

        Some(recurring.clone())
    }

    fn delete_recurring(&self, id: DatabaseID) -> Option<Recurring> {
        let mut items = self.recurring.lock().unwrap();
        let index = items.iter().position(|recurring| recurring.id == id)?;

        Some(items.remove(index))
    }
}
