//! Issues and validates the signed bearer tokens that protect the API.

use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{Error, TokenConfig, models::UserID};

/// How long a bearer token stays valid after it is issued.
pub const TOKEN_DURATION: Duration = Duration::days(7);

/// The contents of a bearer token.
///
/// Route handlers take `Claims` as an extractor argument to require a valid
/// `Authorization: Bearer <token>` header; requests without one are rejected
/// with 401 before the handler body runs.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The ID of the user the token was issued to.
    pub sub: UserID,
    /// The time the token was issued as a unix timestamp.
    pub iat: usize,
    /// The expiry time of the token as a unix timestamp.
    pub exp: usize,
}

impl<S> FromRequestParts<S> for Claims
where
    TokenConfig: axum::extract::FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::InvalidToken)?;

        let token_config = parts
            .extract_with_state::<TokenConfig, _>(state)
            .await
            .map_err(|_| Error::InvalidToken)?;

        decode_token(bearer.token(), token_config.decoding_key())
    }
}

/// Create a signed token for `user_id` that expires after [TOKEN_DURATION].
pub fn encode_token(user_id: UserID, encoding_key: &EncodingKey) -> Result<String, Error> {
    let now = OffsetDateTime::now_utc();
    let claims = Claims {
        sub: user_id,
        iat: now.unix_timestamp() as usize,
        exp: (now + TOKEN_DURATION).unix_timestamp() as usize,
    };

    encode(&Header::default(), &claims, encoding_key).map_err(|error| {
        tracing::error!("Error encoding token: {error}");
        Error::TokenCreation
    })
}

/// Validate `token` and return its claims.
///
/// # Errors
///
/// Returns [Error::InvalidToken] if the token is malformed, expired, or was
/// signed with a different key.
pub fn decode_token(token: &str, decoding_key: &DecodingKey) -> Result<Claims, Error> {
    decode::<Claims>(token, decoding_key, &Validation::default())
        .map(|token_data| token_data.claims)
        .map_err(|_| Error::InvalidToken)
}
