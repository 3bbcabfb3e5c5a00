//! Defines the endpoint for exporting expenses as a CSV attachment.

use axum::{
    extract::State,
    http::{HeaderMap, header},
};
use csv::{QuoteStyle, WriterBuilder};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    auth::Claims,
    extract::Query,
    models::Expense,
    stores::{ExpenseQuery, SortOrder, Store},
};

/// The query parameters for the CSV export.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParams {
    /// Only include expenses on or after this date.
    pub start_date: Option<Date>,
    /// Only include expenses on or before this date.
    pub end_date: Option<Date>,
}

/// A route handler that exports the authenticated user's expenses, newest
/// first, as a `text/csv` attachment.
pub async fn export_csv_endpoint<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Query(params): Query<ExportParams>,
) -> Result<(HeaderMap, String), Error> {
    let query = ExpenseQuery {
        start_date: params.start_date,
        end_date: params.end_date,
        sort_date: Some(SortOrder::Descending),
        ..Default::default()
    };

    let expenses = state.store.list_expenses(claims.sub, &query);
    let csv_text = expenses_to_csv(&expenses)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        "text/csv".parse().expect("static header value is valid"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"expenses.csv\""
            .parse()
            .expect("static header value is valid"),
    );

    Ok((headers, csv_text))
}

/// Render `expenses` as CSV with the columns Date, Amount, Category,
/// Description, Payment Method, and Tags.
///
/// Non-numeric fields are quoted so free text containing commas cannot break
/// a row; tags are joined with ", ".
fn expenses_to_csv(expenses: &[Expense]) -> Result<String, Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(Vec::new());

    let write_error = |error: csv::Error| Error::CsvError(error.to_string());

    writer
        .write_record([
            "Date",
            "Amount",
            "Category",
            "Description",
            "Payment Method",
            "Tags",
        ])
        .map_err(write_error)?;

    for expense in expenses {
        writer
            .write_record([
                expense.date.to_string(),
                expense.amount.to_string(),
                expense.category.to_string(),
                expense.description.clone().unwrap_or_default(),
                expense.payment_method.to_string(),
                expense.tags.join(", "),
            ])
            .map_err(write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}
