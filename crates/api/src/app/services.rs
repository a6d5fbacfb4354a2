//! Service wiring and the user workflows the routes delegate to.
//!
//! Reads go straight to the store. Every workflow that mutates takes the
//! writer gate first, so read-check-write sequences (friendship, age update)
//! never interleave with another writer.

use std::sync::{Arc, Mutex, MutexGuard};

use friendbook_core::{User, UserId};
use friendbook_infra::{InMemoryUserStore, UserStore};

use crate::app::errors::ApiError;

/// A user together with the display names its friend list resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendsView {
    pub user: User,
    pub friend_names: Vec<String>,
}

pub struct AppServices {
    users: Arc<dyn UserStore>,
    writer: Mutex<()>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            writer: Mutex::new(()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }

    fn write_gate(&self) -> Result<MutexGuard<'_, ()>, ApiError> {
        self.writer
            .lock()
            .map_err(|_| ApiError::internal("writer gate poisoned"))
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.list()?)
    }

    /// Look up a user and resolve its friend ids to names, in directory order.
    pub fn friends_of(&self, id: UserId) -> Result<FriendsView, ApiError> {
        let user = self.users.get(id)?;
        let users = self.users.list()?;
        // One name per matching friend entry, so a repeated id repeats the name.
        let friend_names = users
            .iter()
            .flat_map(|u| {
                user.friends
                    .iter()
                    .filter(move |f| **f == u.id)
                    .map(move |_| u.name.clone())
            })
            .collect();

        Ok(FriendsView { user, friend_names })
    }

    pub fn create_user(&self, name: String, age: i64, friends: Vec<UserId>) -> Result<User, ApiError> {
        let _gate = self.write_gate()?;
        let user = User::new(self.users.next_id()?, name, age, friends);
        self.users.create(user.clone())?;
        Ok(user)
    }

    /// Link two users in both directions. Returns both updated records.
    pub fn make_friends(&self, source_id: UserId, target_id: UserId) -> Result<(User, User), ApiError> {
        if source_id == target_id {
            return Err(ApiError::bad_request("source_id and target_id must differ"));
        }
        if source_id.is_unset() || target_id.is_unset() {
            return Err(ApiError::bad_request("invalid user id"));
        }

        let _gate = self.write_gate()?;
        let users = self.users.list()?;
        let find = |id: UserId| users.iter().find(|u| u.id == id).cloned();

        let (mut source, mut target) = match (find(source_id), find(target_id)) {
            (Some(s), Some(t)) => (s, t),
            _ => {
                return Err(ApiError::not_found(format!(
                    "users {source_id} and {target_id} must both exist"
                )));
            }
        };

        if source.is_friend_of(target.id) || target.is_friend_of(source.id) {
            return Err(ApiError::bad_request("already friends"));
        }

        source.add_friend(target.id);
        target.add_friend(source.id);

        // Both were just seen under the gate, so a miss here is our bug.
        for user in [&source, &target] {
            self.users
                .update(user.id, user.clone())
                .map_err(|e| ApiError::internal(format!("friendship write-back failed: {e}")))?;
        }

        Ok((source, target))
    }

    /// Change only the age of a stored user. Returns the record as stored now.
    pub fn update_age(&self, id: UserId, new_age: i64) -> Result<User, ApiError> {
        let _gate = self.write_gate()?;
        let mut replacement = self.users.get(id)?;
        replacement.age = new_age;
        self.users.update(id, replacement.clone())?;
        Ok(replacement)
    }

    /// Remove a user and scrub it from every friend list. Returns the removed record.
    pub fn delete_user(&self, id: UserId) -> Result<User, ApiError> {
        let _gate = self.write_gate()?;
        Ok(self.users.delete(id)?)
    }
}
