//! Defines the endpoint for creating a new budget.

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Json,
    models::{Budget, BudgetPeriod, Category},
    schedule::{add_months, add_years},
    stores::{NewBudget, Store},
};

/// The request body for creating a budget.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPayload {
    /// The spending limit.
    pub amount: f64,
    /// The length of the budget window.
    pub period: BudgetPeriod,
    /// Restricts the budget to one category. Absent covers all spending.
    pub category: Option<Category>,
    /// The first day of the budget window.
    pub start_date: Date,
}

/// A route handler for creating a new budget owned by the authenticated user.
///
/// The end date is derived here, once: start plus one month or one year
/// depending on the period. Later edits never recompute it.
pub async fn create_budget_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Json(payload): Json<BudgetPayload>,
) -> Result<(StatusCode, Json<Budget>), Error> {
    if payload.amount < 0.0 {
        return Err(Error::Validation("amount must not be negative".to_owned()));
    }

    let end_date = match payload.period {
        BudgetPeriod::Monthly => add_months(payload.start_date, 1),
        BudgetPeriod::Yearly => add_years(payload.start_date, 1),
    };

    let budget = state.store.insert_budget(NewBudget {
        user_id: claims.sub,
        category: payload.category,
        amount: payload.amount,
        period: payload.period,
        start_date: payload.start_date,
        end_date,
    });

    Ok((StatusCode::CREATED, Json(budget)))
}

#[cfg(test)]
mod create_budget_tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints,
        models::{Budget, BudgetPeriod},
        test_utils::{create_test_user, test_server},
    };

    #[tokio::test]
    async fn create_monthly_budget_derives_end_date() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let response = server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 100.0,
                "period": "monthly",
                "startDate": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let budget = response.json::<Budget>();
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(budget.start_date, date!(2024 - 01 - 01));
        assert_eq!(budget.end_date, date!(2024 - 02 - 01));
        assert_eq!(budget.category, None);
    }

    #[tokio::test]
    async fn create_yearly_budget_derives_end_date() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let budget = server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 1200.0,
                "period": "yearly",
                "startDate": "2024-03-15",
                "category": "Utilities & Bills",
            }))
            .await
            .json::<Budget>();

        assert_eq!(budget.end_date, date!(2025 - 03 - 15));
    }

    #[tokio::test]
    async fn create_budget_clamps_month_end() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let budget = server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 100.0,
                "period": "monthly",
                "startDate": "2024-01-31",
            }))
            .await
            .json::<Budget>();

        assert_eq!(budget.end_date, date!(2024 - 02 - 29));
    }

    #[tokio::test]
    async fn create_budget_rejects_negative_amount() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": -100.0,
                "period": "monthly",
                "startDate": "2024-01-01",
            }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_budget_rejects_unknown_period() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        server
            .post(endpoints::BUDGETS)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 100.0,
                "period": "fortnightly",
                "startDate": "2024-01-01",
            }))
            .await
            .assert_status_bad_request();
    }
}
