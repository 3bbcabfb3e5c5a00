//! Implements a struct that holds the state of the REST server.

use axum::extract::{FromRef, FromRequestParts};
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::{Error, pagination::PaginationConfig, stores::Store};

/// The keys used to sign and validate bearer tokens.
///
/// Both keys are derived from the one secret the server is configured with.
#[derive(Clone)]
pub struct TokenConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenConfig {
    /// Create signing keys from a `secret` string.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// The key for signing new tokens.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// The key for validating presented tokens.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl<S> FromRequestParts<S> for TokenConfig
where
    Self: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        _: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_ref(state))
    }
}

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState<S>
where
    S: Store,
{
    /// The keys used to sign and validate bearer tokens.
    pub token_config: TokenConfig,

    /// The config that controls how lists of data are paged.
    pub pagination_config: PaginationConfig,

    /// The bcrypt cost used when hashing new passwords.
    ///
    /// Tests lower this to keep registration fast.
    pub hash_cost: u32,

    /// The record store holding every entity kind.
    ///
    /// Constructed once in the composition root and cloned into each request
    /// handler; there is no ambient global store.
    pub store: S,
}

impl<S> AppState<S>
where
    S: Store,
{
    /// Create a new [AppState] from the token signing `secret` and a `store`.
    pub fn new(secret: &str, store: S) -> Self {
        Self {
            token_config: TokenConfig::from_secret(secret),
            pagination_config: PaginationConfig::default(),
            hash_cost: crate::auth::PasswordHash::DEFAULT_COST,
            store,
        }
    }
}

// this impl lets the bearer token extractor get the keys from our state
impl<S> FromRef<AppState<S>> for TokenConfig
where
    S: Store,
{
    fn from_ref(state: &AppState<S>) -> Self {
        state.token_config.clone()
    }
}
