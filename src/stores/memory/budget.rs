//! Implements the in-memory budget store.

use time::OffsetDateTime;

use crate::{
    models::{Budget, DatabaseID, UserID},
    stores::{BudgetPatch, BudgetStore, NewBudget, memory::MemoryStore},
};

impl BudgetStore for MemoryStore {
    fn insert_budget(&self, new_budget: NewBudget) -> Budget {
        let now = OffsetDateTime::now_utc();
        let budget = Budget {
            id: self.next_id(),
            user_id: new_budget.user_id,
            category: new_budget.category,
            amount: new_budget.amount,
            period: new_budget.period,
            start_date: new_budget.start_date,
            end_date: new_budget.end_date,
            created_at: now,
            updated_at: now,
        };

        self.budgets.lock().unwrap().push(budget.clone());

        budget
    }

    fn get_budget(&self, id: DatabaseID) -> Option<Budget> {
        self.budgets
            .lock()
            .unwrap()
            .iter()
            .find(|budget| budget.id == id)
            .cloned()
    }

    fn list_budgets(&self, user_id: UserID) -> Vec<Budget> {
        let mut budgets: Vec<Budget> = self
            .budgets
            .lock()
            .unwrap()
            .iter()
            .filter(|budget| budget.user_id == user_id)
            .cloned()
            .collect();

        budgets.sort_by_key(|budget| std::cmp::Reverse(budget.created_at));

        budgets
    }

    fn update_budget(&self, id: DatabaseID, patch: BudgetPatch) -> Option<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let budget = budgets.iter_mut().find(|budget| budget.id == id)?;

        patch.apply(budget);
        budget.updated_at = OffsetDateTime::now_utc();

        Some(budget.clone())
    }

    fn delete_budget(&self, id: DatabaseID) -> Option<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let index = budgets.iter().position(|budget| budget.id == id)?;

        Some(budgets.remove(index))
    }
}
