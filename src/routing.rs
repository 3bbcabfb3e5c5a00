//! Application router configuration.
//!
//! Everything under `/api` except registration, log-in, and the health probe
//! requires a bearer token; protected handlers enforce this by taking
//! [Claims](crate::auth::Claims) as an extractor argument. Any other path
//! falls through to the static dashboard assets.

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::{
    AppState,
    analytics::{
        get_compare_periods, get_daily_spending, get_monthly_trends, get_spending_by_category,
        get_summary,
    },
    auth::{get_profile, log_in, register_user, update_profile},
    budget::{
        create_budget_endpoint, delete_budget_endpoint, edit_budget_endpoint, get_budget_endpoint,
        list_budgets_endpoint,
    },
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_expense_endpoint, list_expenses_endpoint,
    },
    export::{export_csv_endpoint, export_pdf_endpoint},
    recurring::{
        create_recurring_endpoint, delete_recurring_endpoint, edit_recurring_endpoint,
        get_recurring_endpoint, list_recurring_endpoint, process_recurring_endpoint,
    },
    stores::Store,
};

/// Return a router with all the app's routes, serving the static dashboard
/// from `static_dir` for any path the API does not claim.
pub fn build_router<S: Store>(state: AppState<S>, static_dir: &str) -> Router {
    Router::new()
        .route(endpoints::REGISTER, post(register_user::<S>))
        .route(endpoints::LOG_IN, post(log_in::<S>))
        .route(endpoints::ME, get(get_profile::<S>))
        .route(endpoints::PROFILE, put(update_profile::<S>))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint::<S>).post(create_expense_endpoint::<S>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<S>)
                .put(edit_expense_endpoint::<S>)
                .delete(delete_expense_endpoint::<S>),
        )
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint::<S>).post(create_budget_endpoint::<S>),
        )
        .route(
            endpoints::BUDGET,
            get(get_budget_endpoint::<S>)
                .put(edit_budget_endpoint::<S>)
                .delete(delete_budget_endpoint::<S>),
        )
        .route(
            endpoints::RECURRING,
            get(list_recurring_endpoint::<S>).post(create_recurring_endpoint::<S>),
        )
        .route(
            endpoints::RECURRING_ITEM,
            get(get_recurring_endpoint::<S>)
                .put(edit_recurring_endpoint::<S>)
                .delete(delete_recurring_endpoint::<S>),
        )
        .route(
            endpoints::PROCESS_RECURRING,
            post(process_recurring_endpoint::<S>),
        )
        .route(
            endpoints::ANALYTICS_BY_CATEGORY,
            get(get_spending_by_category::<S>),
        )
        .route(
            endpoints::ANALYTICS_MONTHLY_TRENDS,
            get(get_monthly_trends::<S>),
        )
        .route(endpoints::ANALYTICS_DAILY, get(get_daily_spending::<S>))
        .route(endpoints::ANALYTICS_SUMMARY, get(get_summary::<S>))
        .route(endpoints::ANALYTICS_COMPARE, get(get_compare_periods::<S>))
        .route(endpoints::EXPORT_CSV, get(export_csv_endpoint::<S>))
        .route(endpoints::EXPORT_PDF, get(export_pdf_endpoint))
        .route(endpoints::HEALTH, get(get_health))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// A route handler reporting that the server is up.
async fn get_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Expense Tracker API is running",
    }))
}
