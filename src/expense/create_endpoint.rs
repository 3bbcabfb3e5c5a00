//! Defines the endpoint for creating a new expense.

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    auth::Claims,
    expense::validate_amount,
    extract::Json,
    models::{Category, Expense, PaymentMethod},
    stores::{NewExpense, Store},
};

/// The request body for creating an expense.
///
/// The category and payment method are validated against the shared
/// vocabularies during deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    /// The amount of money spent.
    pub amount: f64,
    /// The calendar date the money was spent.
    pub date: Date,
    /// What kind of spend this was.
    pub category: Category,
    /// How the expense was paid.
    pub payment_method: PaymentMethod,
    /// Optional free-text detail.
    pub description: Option<String>,
    /// Free-form labels for ad-hoc grouping.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A route handler for creating a new expense owned by the authenticated
/// user.
pub async fn create_expense_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Json(payload): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    validate_amount(payload.amount)?;

    let expense = state.store.insert_expense(NewExpense {
        user_id: claims.sub,
        amount: payload.amount,
        date: payload.date,
        category: payload.category,
        description: payload.description,
        payment_method: payload.payment_method,
        tags: payload.tags,
    });

    Ok((StatusCode::CREATED, Json(expense)))
}

#[cfg(test)]
mod create_expense_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints,
        models::{Category, Expense, PaymentMethod},
        test_utils::{create_test_user, test_server},
    };

    #[tokio::test]
    async fn create_expense_returns_created_record() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        let response = server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 42.5,
                "date": "2024-03-01",
                "category": "Food & Dining",
                "paymentMethod": "Digital Wallet",
                "description": "Lunch",
                "tags": ["work"],
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let expense = response.json::<Expense>();
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.category, Category::FoodAndDining);
        assert_eq!(expense.payment_method, PaymentMethod::DigitalWallet);
        assert_eq!(expense.description.as_deref(), Some("Lunch"));
        assert_eq!(expense.tags, vec!["work"]);
        assert_eq!(expense.user_id, session.user_id);
    }

    #[tokio::test]
    async fn create_expense_fails_on_negative_amount() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": -1.0,
                "date": "2024-03-01",
                "category": "Shopping",
                "paymentMethod": "Card",
            }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_expense_fails_on_unknown_category() {
        let (server, _) = test_server();
        let session = create_test_user(&server, "test@test.com").await;

        server
            .post(endpoints::EXPENSES)
            .authorization_bearer(&session.token)
            .json(&json!({
                "amount": 1.0,
                "date": "2024-03-01",
                "category": "Groceries",
                "paymentMethod": "Card",
            }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_expense_fails_without_token() {
        let (server, _) = test_server();

        server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "amount": 1.0,
                "date": "2024-03-01",
                "category": "Shopping",
                "paymentMethod": "Card",
            }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
