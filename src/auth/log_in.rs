//! Defines the endpoint for logging in an existing user.

use axum::extract::State;
use serde::Deserialize;

use crate::{
    AppState, Error,
    auth::{AuthResponse, encode_token, normalize_email},
    extract::Json,
    stores::Store,
};

/// The request body for logging in.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// Email entered during log-in.
    pub email: String,
    /// Password entered during log-in.
    pub password: String,
}

/// A route handler for logging in with an email and password.
///
/// # Errors
///
/// Responds with 401 for an unknown email or a wrong password; the two cases
/// are deliberately indistinguishable to the client.
pub async fn log_in<S: Store>(
    State(state): State<AppState<S>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<AuthResponse>, Error> {
    let email = normalize_email(&credentials.email);

    let user = state
        .store
        .get_user_by_email(&email)
        .ok_or(Error::InvalidCredentials)?;

    let password_is_correct = user
        .password_hash
        .verify(&credentials.password)
        .map_err(|error| {
            tracing::error!("Error verifying password: {error}");
            Error::HashingError(error.to_string())
        })?;

    if !password_is_correct {
        return Err(Error::InvalidCredentials);
    }

    let token = encode_token(user.id, state.token_config.encoding_key())?;

    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}
