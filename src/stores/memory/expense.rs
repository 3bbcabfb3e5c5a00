//! Implements the in-memory expense store.

use time::OffsetDateTime;

use crate::{
    models::{DatabaseID, Expense, UserID},
    stores::{ExpensePatch, ExpenseQuery, ExpenseStore, NewExpense, SortOrder, memory::MemoryStore},
};

impl ExpenseStore for MemoryStore {
    fn insert_expense(&self, new_expense: NewExpense) -> Expense {
        let now = OffsetDateTime::now_utc();
        let expense = Expense {
            id: self.next_id(),
            user_id: new_expense.user_id,
            amount: new_expense.amount,
            date: new_expense.date,
            category: new_expense.category,
            description: new_expense.description,
            payment_method: new_expense.payment_method,
            tags: new_expense.tags,
            created_at: now,
            updated_at: now,
        };

        self.expenses.lock().unwrap().push(expense.clone());

        expense
    }

    fn get_expense(&self, id: DatabaseID) -> Option<Expense> {
        self.expenses
            .lock()
            .unwrap()
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
    }

    fn list_expenses(&self, user_id: UserID, query: &ExpenseQuery) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|expense| expense.user_id == user_id && query.matches(expense))
            .cloned()
            .collect();

        match query.sort_date {
            Some(SortOrder::Ascending) => expenses.sort_by_key(|expense| expense.date),
            Some(SortOrder::Descending) => {
                expenses.sort_by_key(|expense| std::cmp::Reverse(expense.date))
            }
            None => {}
        }

        expenses
    }

    fn update_expense(&self, id: DatabaseID, patch: ExpensePatch) -> Option<Expense> {
        let mut expenses = self.expenses.lock().unwrap();
        let expense = expenses.iter_mut().find(|expense| expense.id == id)?;

        patch.apply(expense);
        expense.updated_at = OffsetDateTime::now_utc();

        Some(expense.clone())
    }

    fn delete_expense(&self, id: DatabaseID) -> Option<Expense> {
        let mut expenses = self.expenses.lock().unwrap();
        let index = expenses.iter().position(|expense| expense.id == id)?;

        Some(expenses.remove(index))
    }
}

#[cfg(test)]
mod memory_expense_store_tests {
    use time::macros::date;

    use crate::{
        models::{Category, PaymentMethod, UserID},
        stores::{
            ExpensePatch, ExpenseQuery, ExpenseStore, NewExpense, SortOrder, memory::MemoryStore,
        },
    };

    fn new_test_expense(user_id: UserID, amount: f64, date: time::Date) -> NewExpense {
        NewExpense {
            user_id,
            amount,
            date,
            category: Category::FoodAndDining,
            description: None,
            payment_method: PaymentMethod::Card,
            tags: vec![],
        }
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let store = MemoryStore::new();

        let expense =
            store.insert_expense(new_test_expense(UserID::new(1), 12.5, date!(2024 - 03 - 01)));

        assert!(expense.id > 0);
        assert_eq!(expense.created_at, expense.updated_at);
    }

    #[test]
    fn list_only_returns_the_owners_expenses() {
        let store = MemoryStore::new();
        let owner = UserID::new(1);
        let someone_else = UserID::new(2);

        let mine = store.insert_expense(new_test_expense(owner, 10.0, date!(2024 - 03 - 01)));
        store.insert_expense(new_test_expense(someone_else, 99.0, date!(2024 - 03 - 01)));

        let expenses = store.list_expenses(owner, &ExpenseQuery::default());

        assert_eq!(expenses, vec![mine]);
    }

    #[test]
    fn list_filters_by_inclusive_date_range() {
        let store = MemoryStore::new();
        let owner = UserID::new(1);

        store.insert_expense(new_test_expense(owner, 1.0, date!(2024 - 02 - 29)));
        let on_start = store.insert_expense(new_test_expense(owner, 2.0, date!(2024 - 03 - 01)));
        let on_end = store.insert_expense(new_test_expense(owner, 3.0, date!(2024 - 03 - 31)));
        store.insert_expense(new_test_expense(owner, 4.0, date!(2024 - 04 - 01)));

        let query = ExpenseQuery {
            start_date: Some(date!(2024 - 03 - 01)),
            end_date: Some(date!(2024 - 03 - 31)),
            ..Default::default()
        };

        assert_eq!(store.list_expenses(owner, &query), vec![on_start, on_end]);
    }

    #[test]
    fn list_filters_by_category_and_payment_method() {
        let store = MemoryStore::new();
        let owner = UserID::new(1);

        let mut groceries = new_test_expense(owner, 1.0, date!(2024 - 03 - 01));
        groceries.category = Category::FoodAndDining;
        groceries.payment_method = PaymentMethod::Cash;
        let groceries = store.insert_expense(groceries);

        let mut bus_fare = new_test_expense(owner, 2.0, date!(2024 - 03 - 02));
        bus_fare.category = Category::Transportation;
        store.insert_expense(bus_fare);

        let query = ExpenseQuery {
            category: Some(Category::FoodAndDining),
            payment_method: Some(PaymentMethod::Cash),
            ..Default::default()
        };

        assert_eq!(store.list_expenses(owner, &query), vec![groceries]);
    }

    #[test]
    fn list_sorts_by_date_descending() {
        let store = MemoryStore::new();
        let owner = UserID::new(1);

        let oldest = store.insert_expense(new_test_expense(owner, 1.0, date!(2024 - 01 - 01)));
        let newest = store.insert_expense(new_test_expense(owner, 2.0, date!(2024 - 03 - 01)));
        let middle = store.insert_expense(new_test_expense(owner, 3.0, date!(2024 - 02 - 01)));

        let query = ExpenseQuery {
            sort_date: Some(SortOrder::Descending),
            ..Default::default()
        };

        assert_eq!(store.list_expenses(owner, &query), vec![newest, middle, oldest]);
    }

    #[test]
    fn update_merges_patch_and_refreshes_updated_at() {
        let store = MemoryStore::new();
        let expense =
            store.insert_expense(new_test_expense(UserID::new(1), 12.5, date!(2024 - 03 - 01)));

        let updated = store
            .update_expense(
                expense.id,
                ExpensePatch {
                    amount: Some(20.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.date, expense.date);
        assert_eq!(updated.category, expense.category);
        assert!(updated.updated_at >= expense.updated_at);
    }

    #[test]
    fn update_returns_none_for_unknown_id() {
        let store = MemoryStore::new();

        assert_eq!(store.update_expense(42, ExpensePatch::default()), None);
    }

    #[test]
    fn delete_removes_the_expense() {
        let store = MemoryStore::new();
        let expense =
            store.insert_expense(new_test_expense(UserID::new(1), 12.5, date!(2024 - 03 - 01)));

        assert_eq!(store.delete_expense(expense.id), Some(expense.clone()));
        assert_eq!(store.get_expense(expense.id), None);
        assert_eq!(store.delete_expense(expense.id), None);
    }
}
