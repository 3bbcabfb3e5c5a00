//! Route handlers for the analytics endpoints.
//!
//! Each handler scopes the store to the authenticated user, applies any date
//! filters from the query string, and hands the records to the pure
//! aggregation functions.

use axum::extract::State;
use serde::Deserialize;
use time::{Date, Duration, OffsetDateTime};

use crate::{
    AppState, Error,
    analytics::aggregation::{
        CategorySpending, DailySpending, MonthlySpending, PeriodComparison, Summary,
        compare_periods, daily_spending, monthly_trends, spending_by_category, summarize,
    },
    auth::Claims,
    extract::{Json, Query},
    stores::{ExpenseQuery, Store},
};

/// An optional inclusive date range taken from the query string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    /// Only include expenses on or after this date.
    pub start_date: Option<Date>,
    /// Only include expenses on or before this date.
    pub end_date: Option<Date>,
}

impl DateRangeParams {
    fn into_query(self) -> ExpenseQuery {
        ExpenseQuery {
            start_date: self.start_date,
            end_date: self.end_date,
            ..Default::default()
        }
    }
}

/// A route handler for spending grouped by category, largest first.
pub async fn get_spending_by_category<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<DateRangeParams>,
) -> Json<Vec<CategorySpending>> {
    let expenses = state.store.list_expenses(claims.sub, &params.into_query());

    Json(spending_by_category(&expenses))
}

/// The query parameters for the monthly trends endpoint.
#[derive(Debug, Deserialize)]
pub struct TrendParams {
    /// How many trailing months to include.
    pub months: Option<u32>,
}

/// The trailing window used when the client does not ask for one.
const DEFAULT_TREND_MONTHS: u32 = 6;

/// A route handler for monthly spending totals over a trailing window.
pub async fn get_monthly_trends<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<TrendParams>,
) -> Json<Vec<MonthlySpending>> {
    let months = params.months.unwrap_or(DEFAULT_TREND_MONTHS);
    let today = OffsetDateTime::now_utc().date();

    let expenses = state
        .store
        .list_expenses(claims.sub, &ExpenseQuery::default());

    Json(monthly_trends(&expenses, months, today))
}

/// How far back the daily view reaches when no range is given.
const DEFAULT_DAILY_WINDOW_DAYS: i64 = 30;

/// A route handler for daily spending totals.
///
/// Without an explicit range the view covers the trailing thirty days.
pub async fn get_daily_spending<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<DateRangeParams>,
) -> Json<Vec<DailySpending>> {
    let mut query = params.into_query();

    if query.start_date.is_none() && query.end_date.is_none() {
        let today = OffsetDateTime::now_utc().date();
        query.start_date = Some(today.saturating_sub(Duration::days(DEFAULT_DAILY_WINDOW_DAYS)));
    }

    let expenses = state.store.list_expenses(claims.sub, &query);

    Json(daily_spending(&expenses))
}

/// A route handler for overall summary statistics.
pub async fn get_summary<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<DateRangeParams>,
) -> Json<Summary> {
    let expenses = state.store.list_expenses(claims.sub, &params.into_query());

    Json(summarize(&expenses))
}

/// The query parameters for the period comparison endpoint.
///
/// All four dates must be present; the fields are optional only so the
/// handler can answer with a field-level message instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareParams {
    /// The first day of the first period.
    pub period1_start: Option<Date>,
    /// The last day of the first period.
    pub period1_end: Option<Date>,
    /// The first day of the second period.
    pub period2_start: Option<Date>,
    /// The last day of the second period.
    pub period2_end: Option<Date>,
}

/// A route handler comparing spending across two inclusive date ranges.
pub async fn get_compare_periods<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<CompareParams>,
) -> Result<Json<PeriodComparison>, Error> {
    let (Some(period1_start), Some(period1_end), Some(period2_start), Some(period2_end)) = (
        params.period1_start,
        params.period1_end,
        params.period2_start,
        params.period2_end,
    ) else {
        return Err(Error::Validation("All period dates are required".to_owned()));
    };

    let expenses = state
        .store
        .list_expenses(claims.sub, &ExpenseQuery::default());

    Ok(Json(compare_periods(
        &expenses,
        period1_start..=period1_end,
        period2_start..=period2_end,
    )))
}
