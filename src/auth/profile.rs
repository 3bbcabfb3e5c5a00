//! Defines the endpoints for reading and updating the current user's profile.

use axum::extract::State;
use email_address::EmailAddress;
use serde::Deserialize;

use crate::{
    AppState, Error,
    auth::{Claims, normalize_email},
    extract::Json,
    models::UserProfile,
    stores::{Store, UserPatch},
};

/// A route handler for fetching the authenticated user's profile.
pub async fn get_profile<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
) -> Result<Json<UserProfile>, Error> {
    state
        .store
        .get_user(claims.sub)
        .map(|user| Json(user.profile()))
        .ok_or(Error::NotFound)
}

/// The request body for updating the authenticated user's profile.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilePayload {
    /// A new display name.
    pub name: Option<String>,
    /// A new email address.
    pub email: Option<String>,
}

/// A route handler for updating the authenticated user's name and/or email.
pub async fn update_profile<S: Store>(
    State(state): State<AppState<S>>,
    claims: Claims,
    Json(payload): Json<ProfilePayload>,
) -> Result<Json<UserProfile>, Error> {
    let name = match payload.name {
        Some(name) => {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(Error::Validation("name must not be empty".to_owned()));
            }
            Some(name)
        }
        None => None,
    };

    let email = match payload.email {
        Some(email) => {
            let email = normalize_email(&email)
                .parse::<EmailAddress>()
                .map_err(|_| Error::Validation("email is not a valid email address".to_owned()))?;

            // The new email must not collide with another account.
            if state
                .store
                .get_user_by_email(email.as_str())
                .is_some_and(|other| other.id != claims.sub)
            {
                return Err(Error::EmailTaken);
            }

            Some(email)
        }
        None => None,
    };

    state
        .store
        .update_user(claims.sub, UserPatch { name, email })
        .map(|user| Json(user.profile()))
        .ok_or(Error::NotFound)
}
