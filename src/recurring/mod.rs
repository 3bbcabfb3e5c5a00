//! Creating, listing, editing, deleting, and processing recurring items.
//!
//! Nothing here runs on a timer: a recurring item only materializes an
//! expense when the process endpoint is called explicitly.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod process_endpoint;

pub use create_endpoint::{RecurringPayload, create_recurring_endpoint};
pub use delete_endpoint::delete_recurring_endpoint;
pub use edit_endpoint::edit_recurring_endpoint;
pub use get_endpoint::get_recurring_endpoint;
pub use list_endpoint::list_recurring_endpoint;
pub use process_endpoint::{ProcessResponse, process_recurring_endpoint};

use crate::{
    Error,
    models::{DatabaseID, Recurring, UserID},
    stores::Store,
};

/// Fetch the recurring item with `id` if it belongs to `user_id`.
///
/// A missing item and someone else's item produce the same
/// [Error::NotFound] so that clients cannot probe for other users' records.
fn get_owned_recurring<S: Store>(
    store: &S,
    id: DatabaseID,
    user_id: UserID,
) -> Result<Recurring, Error> {
    store
        .get_recurring(id)
        .filter(|recurring| recurring.user_id == user_id)
        .ok_or(Error::NotFound)
}
