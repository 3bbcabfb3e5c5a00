//! Registration, log-in, profile management, and the bearer token machinery
//! that protects the rest of the API.

mod log_in;
mod password;
mod profile;
mod register;
mod token;

use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

pub use log_in::log_in;
pub use password::{MIN_PASSWORD_LENGTH, PasswordHash, ValidatedPassword};
pub use profile::{get_profile, update_profile};
pub use register::register_user;
pub use token::{Claims, TOKEN_DURATION, decode_token, encode_token};

/// The response to a successful registration or log-in.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// A signed bearer token for the authenticated user.
    pub token: String,
    /// The authenticated user's profile.
    pub user: UserProfile,
}

/// Lowercase and trim a submitted email so lookups are case-insensitive.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
