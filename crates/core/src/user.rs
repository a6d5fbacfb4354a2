//! The user record and its friend-list helpers.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::UserId;

/// A user record as stored and as serialized on the wire.
///
/// `friends` is an ordered list of other users' ids. The relation is meant to
/// be symmetric, but nothing here enforces that: only the friendship workflow
/// keeps both sides in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i64,
    pub friends: Vec<UserId>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, age: i64, friends: Vec<UserId>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            friends,
        }
    }

    /// Whether `other` appears anywhere in this user's friend list.
    pub fn is_friend_of(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Append `other` to the friend list (no de-duplication).
    pub fn add_friend(&mut self, other: UserId) {
        self.friends.push(other);
    }

    /// Drop every occurrence of `other` from the friend list.
    ///
    /// Returns the number of entries removed.
    pub fn forget_friend(&mut self, other: UserId) -> usize {
        let before = self.friends.len();
        self.friends.retain(|f| *f != other);
        before - self.friends.len()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}
