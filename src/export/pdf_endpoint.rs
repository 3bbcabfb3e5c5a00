//! Defines the endpoint for the PDF export, which is intentionally disabled.

use crate::{Error, auth::Claims};

/// A route handler that always answers 501.
///
/// PDF export is deliberately unimplemented; the route exists so clients get
/// an explicit "not implemented" rather than a 404 they might mistake for a
/// wrong URL.
pub async fn export_pdf_endpoint(_claims: Claims) -> Error {
    Error::Unsupported("PDF export is currently disabled")
}
