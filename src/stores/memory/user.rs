//! Implements the in-memory user store.

use time::OffsetDateTime;

use crate::{
    models::{User, UserID},
    stores::{NewUser, UserPatch, UserStore, memory::MemoryStore},
};

impl UserStore for MemoryStore {
    fn insert_user(&self, new_user: NewUser) -> User {
        let user = User {
            id: UserID::new(self.next_id()),
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            created_at: OffsetDateTime::now_utc(),
        };

        self.users.lock().unwrap().push(user.clone());

        user
    }

    fn get_user(&self, id: UserID) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned()
    }

    fn update_user(&self, id: UserID, patch: UserPatch) -> Option<User> {
        let mut users = self.users.lock().unwrap();
        let user = users.iter_mut().find(|user| user.id == id)?;

        patch.apply(user);

        Some(user.clone())
    }
}
