//! Helpers shared by the HTTP-level tests.

use axum_test::TestServer;
use serde_json::json;

use crate::{AppState, auth::AuthResponse, build_router, models::UserID, stores::memory::MemoryStore};

/// The bcrypt cost used in tests; the weakest allowed, to keep them fast.
const TEST_HASH_COST: u32 = 4;

/// A registered user's bearer token and ID.
pub struct TestSession {
    /// The bearer token for the user.
    pub token: String,
    /// The user's ID.
    pub user_id: UserID,
}

/// Create a test server around a fresh in-memory store.
///
/// Returns the store too, so tests can inspect records directly.
pub fn test_server() -> (TestServer, MemoryStore) {
    let store = MemoryStore::new();
    let mut state = AppState::new("a test secret", store.clone());
    state.hash_cost = TEST_HASH_COST;

    let server =
        TestServer::try_new(build_router(state, "static")).expect("Could not create test server.");

    (server, store)
}

/// Register a user with `email` and return their session.
pub async fn create_test_user(server: &TestServer, email: &str) -> TestSession {
    let response = server
        .post(crate::endpoints::REGISTER)
        .json(&json!({
            "email": email,
            "password": "averysafepassword",
            "name": "Test User",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let auth = response.json::<AuthResponse>();

    TestSession {
        token: auth.token,
        user_id: auth.user.id,
    }
}
