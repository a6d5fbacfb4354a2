//! User storage abstraction.
//!
//! The store owns the authoritative, ordered sequence of users and the id
//! sequence used to name new ones. Every read hands out owned copies, so a
//! caller can never mutate a stored record behind the store's back.

pub mod in_memory;

use std::sync::Arc;

use friendbook_core::{User, UserId};
use thiserror::Error;

pub use in_memory::InMemoryUserStore;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No stored user carries this id.
    #[error("user {0} not found")]
    NotFound(UserId),

    /// A writer panicked while holding the lock.
    #[error("user store lock poisoned")]
    Poisoned,
}

/// Storage contract for user records.
pub trait UserStore: Send + Sync {
    /// All users in stored order (creation order, compacted on delete).
    fn list(&self) -> StoreResult<Vec<User>>;

    /// First user whose id matches.
    fn get(&self, id: UserId) -> StoreResult<User>;

    /// Replace the record at the first matching position.
    ///
    /// Returns the record as it was *before* the replacement.
    fn update(&self, id: UserId, replacement: User) -> StoreResult<User>;

    /// Append a user. Id uniqueness is the caller's responsibility.
    fn create(&self, user: User) -> StoreResult<()>;

    /// Strip `id` from every friend list, then remove the user itself.
    ///
    /// The friend-list pass runs even when no user carries `id`. Returns the
    /// removed record.
    fn delete(&self, id: UserId) -> StoreResult<User>;

    /// Allocate the next id from the store-owned sequence (starts at 1).
    fn next_id(&self) -> StoreResult<UserId>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list(&self) -> StoreResult<Vec<User>> {
        (**self).list()
    }

    fn get(&self, id: UserId) -> StoreResult<User> {
        (**self).get(id)
    }

    fn update(&self, id: UserId, replacement: User) -> StoreResult<User> {
        (**self).update(id, replacement)
    }

    fn create(&self, user: User) -> StoreResult<()> {
        (**self).create(user)
    }

    fn delete(&self, id: UserId) -> StoreResult<User> {
        (**self).delete(id)
    }

    fn next_id(&self) -> StoreResult<UserId> {
        (**self).next_id()
    }
}
