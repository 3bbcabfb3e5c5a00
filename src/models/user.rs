//! This file defines the application user and the profile view of it that is
//! safe to send to clients.

use std::fmt::Display;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::PasswordHash;

/// A newtype wrapper for integer user IDs.
///
/// This helps disambiguate user IDs from other types of IDs, leading to better compile time
/// errors, and more flexible generics that can have distinct implementations for multiple ID types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserID(i64);

impl UserID {
    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered user of the application.
///
/// This type holds the password hash and must never be serialized into a
/// response. Use [User::profile] for anything that leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The user's ID in the record store.
    pub id: UserID,
    /// The email the user registered and logs in with. Unique across users.
    pub email: EmailAddress,
    /// The user's password hash.
    pub password_hash: PasswordHash,
    /// The display name chosen at registration.
    pub name: String,
    /// When the user registered.
    pub created_at: OffsetDateTime,
}

impl User {
    /// The client-facing view of this user, without the password hash.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// The subset of [User] that is returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user's ID in the record store.
    pub id: UserID,
    /// The email the user registered with.
    pub email: EmailAddress,
    /// The display name chosen at registration.
    pub name: String,
}
