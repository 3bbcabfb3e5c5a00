//! Request extractors that map rejections onto the crate error type, so a
//! malformed body or query string surfaces as a 400 with a JSON message
//! instead of axum's plain-text default.

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::Error;

/// A drop-in replacement for [axum::Json] whose rejection is [Error].
///
/// Out-of-vocabulary enum values, missing fields, and unparseable JSON all
/// become 400 responses carrying the deserializer's message.
#[derive(Debug, Clone, Copy, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// A drop-in replacement for [axum::extract::Query] whose rejection is
/// [Error].
#[derive(Debug, Clone, Copy, axum::extract::FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);
