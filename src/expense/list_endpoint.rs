//! Defines the endpoint for listing expenses with filters and pagination.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState,
    auth::Claims,
    extract::{Json, Query},
    models::{Category, Expense, PaymentMethod},
    pagination::{Pagination, paginate},
    stores::{ExpenseQuery, SortOrder, Store},
};

/// The query parameters for listing expenses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListParams {
    /// Only include expenses on or after this date.
    pub start_date: Option<Date>,
    /// Only include expenses on or before this date.
    pub end_date: Option<Date>,
    /// Only include expenses with this category.
    pub category: Option<Category>,
    /// Only include expenses paid with this method.
    pub payment_method: Option<PaymentMethod>,
    /// The maximum number of expenses to return.
    pub limit: Option<u64>,
    /// The page number to return, starting at 1.
    pub page: Option<u64>,
}

/// One page of expenses plus its position in the filtered result set.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    /// The expenses on the requested page, newest first.
    pub expenses: Vec<Expense>,
    /// Where the page sits within the filtered result set.
    pub pagination: Pagination,
}

/// A route handler for listing the authenticated user's expenses, newest
/// first.
pub async fn list_expenses_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<ExpenseListParams>,
) -> Json<ExpenseListResponse> {
    let query = ExpenseQuery {
        start_date: params.start_date,
        end_date: params.end_date,
        category: params.category,
        payment_method: params.payment_method,
        sort_date: Some(SortOrder::Descending),
    };

    let expenses = state.store.list_expenses(claims.sub, &query);

    let page = params.page.unwrap_or(state.pagination_config.default_page);
    let limit = params.limit.unwrap_or(state.pagination_config.default_limit);
    let (expenses, pagination) = paginate(expenses, page, limit);

    Json(ExpenseListResponse {
        expenses,
        pagination,
    })
}
