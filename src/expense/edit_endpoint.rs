//! Defines the endpoint for editing an existing expense.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    auth::Claims,
    expense::{get_owned_expense, validate_amount},
    extract::Json,
    models::{DatabaseID, Expense},
    stores::{ExpensePatch, Store},
};

/// A route handler for applying a partial update to one of the authenticated
/// user's expenses.
///
/// Fields missing from the body keep their stored values; unknown fields are
/// rejected.
pub async fn edit_expense_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Path(expense_id): Path<DatabaseID>,
    Json(patch): Json<ExpensePatch>,
) -> Result<Json<Expense>, Error> {
    if let Some(amount) = patch.amount {
        validate_amount(amount)?;
    }

    get_owned_expense(&state.store, expense_id, claims.sub)?;

    state
        .store
        .update_expense(expense_id, patch)
        .map(Json)
        .ok_or(Error::NotFound)
}

#[cfg(test)]
mod edit_expense_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints,
        models::{Category, Expense},
        test_utils::{create_test_user, test_server},
    };

    #[tokio::test]
    async fn edit_merges_partial_update() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let created = server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 12.0,
                "date": "2024-03-01",
                "category": "Shopping",
                "paymentMethod": "Card",
                "description": "Socks",
            }))
            .await
            .json::<Expense>();

        let response = server
            .put(&endpoints::format_endpoint(endpoints::EXPENSE, created.id))
            .authorization_bearer(&session.token)
            .json(&json!({ "amount": 20.0, "category": "Entertainment" }))
            .await;

        response.assert_status_ok();

        let updated = response.json::<Expense>();
        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.category, Category::Entertainment);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.description.as_deref(), Some("Socks"));
    }

    #[tokio::test]
    async fn edit_rejects_negative_amount() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let created = server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 12.0,
                "date": "2024-03-01",
                "category": "Shopping",
                "paymentMethod": "Card",
            }))
            .await
            .json::<Expense>();

        server
            .put(&endpoints::format_endpoint(endpoints::EXPENSE, created.id))
            .authorization_bearer(&session.token)
            .json(&json!({ "amount": -5.0 }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn edit_rejects_unknown_fields() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let created = server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 12.0,
                "date": "2024-03-01",
                "category": "Shopping",
                "paymentMethod": "Card",
            }))
            .await
            .json::<Expense>();

        server
            .put(&endpoints::format_endpoint(endpoints::EXPENSE, created.id))
            .authorization_bearer(&session.token)
            .json(&json!({ "userId": 999 }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn edit_fails_on_other_users_record() {
        let (server, _) = test_server();
        let owner = create_test_user(&server, "owner@test.com").await;
        let intruder = create_test_user(&server, "intruder@test.com").await;

        let created = server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&owner.token)
            .json(&json!({
                "amount": 12.0,
                "date": "2024-03-01",
                "category": "Shopping",
                "paymentMethod": "Card",
            }))
            .await
            .json::<Expense>();

        server
            .put(&endpoints::format_endpoint(endpoints::EXPENSE, created.id))
            .authorization_bearer(&intruder.token)
            .json(&json!({ "amount": 1.0 }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
