//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}',
//! use [format_endpoint].

/// The route for registering a new user.
pub const REGISTER: &str = "/api/auth/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/auth/login";
/// The route for the current user's profile.
pub const ME: &str = "/api/auth/me";
/// The route for updating the current user's profile.
pub const PROFILE: &str = "/api/auth/profile";

/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to access a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";

/// The route to list and create budgets.
pub const BUDGETS: &str = "/api/budgets";
/// The route to access a single budget.
pub const BUDGET: &str = "/api/budgets/{budget_id}";

/// The route to list and create recurring items.
pub const RECURRING: &str = "/api/recurring";
/// The route to access a single recurring item.
pub const RECURRING_ITEM: &str = "/api/recurring/{recurring_id}";
/// The route to process a recurring item.
pub const PROCESS_RECURRING: &str = "/api/recurring/{recurring_id}/process";

/// The route for spending grouped by category.
pub const ANALYTICS_BY_CATEGORY: &str = "/api/analytics/by-category";
/// The route for monthly spending trends.
pub const ANALYTICS_MONTHLY_TRENDS: &str = "/api/analytics/monthly-trends";
/// The route for daily spending totals.
pub const ANALYTICS_DAILY: &str = "/api/analytics/daily";
/// The route for overall summary statistics.
pub const ANALYTICS_SUMMARY: &str = "/api/analytics/summary";
/// The route for comparing spending across two periods.
pub const ANALYTICS_COMPARE: &str = "/api/analytics/compare";

/// The route for downloading expenses as CSV.
pub const EXPORT_CSV: &str = "/api/export/csv";
/// The route for the intentionally disabled PDF export.
pub const EXPORT_PDF: &str = "/api/export/pdf";

/// The liveness probe.
pub const HEALTH: &str = "/api/health";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}',
/// '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know the routes will parse as URIs before
// the router sees them.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::REGISTER);
        assert_endpoint_is_valid_uri(endpoints::LOG_IN);
        assert_endpoint_is_valid_uri(endpoints::ME);
        assert_endpoint_is_valid_uri(endpoints::PROFILE);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::BUDGETS);
        assert_endpoint_is_valid_uri(endpoints::BUDGET);
        assert_endpoint_is_valid_uri(endpoints::RECURRING);
        assert_endpoint_is_valid_uri(endpoints::RECURRING_ITEM);
        assert_endpoint_is_valid_uri(endpoints::PROCESS_RECURRING);
        assert_endpoint_is_valid_uri(endpoints::ANALYTICS_BY_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::ANALYTICS_MONTHLY_TRENDS);
        assert_endpoint_is_valid_uri(endpoints::ANALYTICS_DAILY);
        assert_endpoint_is_valid_uri(endpoints::ANALYTICS_SUMMARY);
        assert_endpoint_is_valid_uri(endpoints::ANALYTICS_COMPARE);
        assert_endpoint_is_valid_uri(endpoints::EXPORT_CSV);
        assert_endpoint_is_valid_uri(endpoints::EXPORT_PDF);
        assert_endpoint_is_valid_uri(endpoints::HEALTH);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
