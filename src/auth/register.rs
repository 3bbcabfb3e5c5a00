//! Defines the endpoint for registering a new user.

use axum::{extract::State, http::StatusCode};
use email_address::EmailAddress;
use serde::Deserialize;

use crate::{
    AppState, Error,
    auth::{AuthResponse, PasswordHash, encode_token, normalize_email},
    extract::Json,
    stores::{NewUser, Store},
};

/// The request body for registering a new user.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    /// The email to register with. Must not belong to an existing user.
    pub email: String,
    /// The password to log in with.
    pub password: String,
    /// The user's display name.
    pub name: String,
}

/// A route handler for registering a new user.
///
/// Responds with 201 and a signed bearer token on success, or 400 if the
/// email is taken or any field fails validation.
pub async fn register_user<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<AuthResponse>), Error> {
    let email = normalize_email(&payload.email)
        .parse::<EmailAddress>()
        .map_err(|_| Error::Validation("email is not a valid email address".to_owned()))?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(Error::Validation("name must not be empty".to_owned()));
    }

    if state.store.get_user_by_email(email.as_str()).is_some() {
        return Err(Error::EmailTaken);
    }

    let password_hash = PasswordHash::from_raw_password(&payload.password, state.hash_cost)?;

    let user = state.store.insert_user(NewUser {
        email,
        password_hash,
        name: name.to_owned(),
    });

    let token = encode_token(user.id, state.token_config.encoding_key())?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.profile(),
        }),
    ))
}

#[cfg(test)]
mod register_tests {
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{auth::AuthResponse, endpoints, test_utils::test_server};

    #[tokio::test]
    async fn register_returns_token_and_profile() {
        let (server, _) = test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": "test@test.com",
                "password": "averysafepassword",
                "name": "Test User",
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);

        let auth = response.json::<AuthResponse>();
        assert!(!auth.token.is_empty());
        assert_eq!(auth.user.email.as_str(), "test@test.com");
        assert_eq!(auth.user.name, "Test User");
    }

    #[tokio::test]
    async fn register_normalizes_email_case() {
        let (server, _) = test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": "Test@Test.COM",
                "password": "averysafepassword",
                "name": "Test User",
            }))
            .await;

        let auth = response.json::<AuthResponse>();
        assert_eq!(auth.user.email.as_str(), "test@test.com");
    }

    #[tokio::test]
    async fn register_fails_with_duplicate_email() {
        let (server, _) = test_server();

        register_test_user(&server, "test@test.com").await;

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": "test@test.com",
                "password": "anotherpassword",
                "name": "Second User",
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn register_fails_with_invalid_email() {
        let (server, _) = test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": "not an email",
                "password": "averysafepassword",
                "name": "Test User",
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn register_fails_with_short_password() {
        let (server, _) = test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": "test@test.com",
                "password": "12345",
                "name": "Test User",
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn register_fails_with_blank_name() {
        let (server, _) = test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": "test@test.com",
                "password": "averysafepassword",
                "name": "   ",
            }))
            .await;

        response.assert_status_bad_request();
    }

    async fn register_test_user(server: &TestServer, email: &str) {
        server
            .post(endpoints::REGISTER)
            .json(&json!({
                "email": email,
                "password": "averysafepassword",
                "name": "Test User",
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }
}
