//! Defines the user store trait and the types used to create and update users.

use email_address::EmailAddress;

use crate::{
    auth::PasswordHash,
    models::{User, UserID},
};

/// Handles the creation and retrieval of users.
pub trait UserStore {
    /// Create a new user in the store.
    ///
    /// The caller should ensure the email is not already registered; the
    /// store does not enforce uniqueness.
    fn insert_user(&self, new_user: NewUser) -> User;

    /// Retrieve a user by their ID, or `None` if no user has that ID.
    fn get_user(&self, id: UserID) -> Option<User>;

    /// Retrieve a user by their email, or `None` if no user has that email.
    fn get_user_by_email(&self, email: &str) -> Option<User>;

    /// Apply `patch` to the user with `id` and return the updated user, or
    /// `None` if no user has that ID.
    fn update_user(&self, id: UserID, patch: UserPatch) -> Option<User>;
}

/// The data needed to create a user. The store assigns the ID and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// The email the user registers with.
    pub email: EmailAddress,
    /// The hash of the password the user registers with.
    pub password_hash: PasswordHash,
    /// The user's display name.
    pub name: String,
}

/// The fields of a user that a profile update may change.
///
/// `None` leaves the stored value unchanged. The HTTP layer validates and
/// normalizes the raw request body before building one of these.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// A new display name.
    pub name: Option<String>,
    /// A new email, already validated and normalized.
    pub email: Option<EmailAddress>,
}

impl UserPatch {
    /// Merge the set fields of this patch into `user`, field by field.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }

        if let Some(email) = self.email {
            user.email = email;
        }
    }
}
