//! Defines the endpoint for getting a single budget enriched with its usage.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    auth::Claims,
    budget::{BudgetWithUsage, calculate_usage, get_owned_budget},
    extract::Json,
    models::DatabaseID,
    stores::{ExpenseQuery, Store},
};

/// A route handler for getting one of the authenticated user's budgets,
/// enriched with `spending`, `remaining`, and `percentage` computed against
/// the expenses in its window.
pub async fn get_budget_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(budget_id): Path<DatabaseID>,
) -> Result<Json<BudgetWithUsage>, Error> {
    let budget = get_owned_budget(&state.store, budget_id, claims.sub)?;

    let expenses = state
        .store
        .list_expenses(claims.sub, &ExpenseQuery::default());

    Ok(Json(calculate_usage(budget, &expenses)))
}

#[cfg(test)]
mod get_budget_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        budget::BudgetWithUsage,
        endpoints,
        models::Budget,
        test_utils::{create_test_user, test_server},
    };

    #[tokio::test]
    async fn get_budget_reports_spending_remaining_and_capped_percentage() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let budget = server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 100.0,
                "period": "monthly",
                "startDate": "2024-01-01",
            }))
            .await
            .json::<Budget>();

        server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 150.0,
                "date": "2024-01-15",
                "category": "Shopping",
                "paymentMethod": "Card",
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .get(&endpoints::format_endpoint(endpoints::BUDGET, budget.id))
            .authorization_bearer(&session.token)
            .await;

        response.assert_status_ok();

        let enriched = response.json::<BudgetWithUsage>();
        assert_eq!(enriched.spending, 150.0);
        assert_eq!(enriched.remaining, -50.0);
        assert_eq!(enriched.percentage, 100.0);
        assert_eq!(enriched.budget.id, budget.id);
    }

    #[tokio::test]
    async fn get_budget_only_counts_matching_category() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let budget = server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 100.0,
                "period": "monthly",
                "category": "Food & Dining",
                "startDate": "2024-01-01",
            }))
            .await
            .json::<Budget>();

        for category in ["Food & Dining", "Shopping"] {
            server
                .post(endpoints::EXPENSES)
                .authorization_bearer(&session.token)
                .json(&json!({
                    "amount": 40.0,
                    "date": "2024-01-15",
                    "category": category,
                    "paymentMethod": "Card",
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let enriched = server
            .get(&endpoints::format_endpoint(endpoints::BUDGET, budget.id))
            .authorization_bearer(&session.token)
            .await
            .json::<BudgetWithUsage>();

        assert_eq!(enriched.spending, 40.0);
        assert_eq!(enriched.percentage, 40.0);
    }

    #[tokio::test]
    async fn get_budget_fails_on_other_users_record() {
        let (server, _) = test_server();
        let owner = create_test_user(&server, "owner@test.com").await;
        let intruder = create_test_user(&server, "intruder@test.com").await;

        let budget = server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&owner.token)
            .json(&json!({
                "amount": 100.0,
                "period": "monthly",
                "startDate": "2024-01-01",
            }))
            .await
            .json::<Budget>();

        server
            .get(&endpoints::format_endpoint(endpoints::BUDGET, budget.id))
            .authorization_bearer(&intruder.token)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
