use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use friendbook_core::{Entity, User, UserId};

use super::{StoreError, StoreResult, UserStore};

#[derive(Debug, Default)]
struct Directory {
    users: Vec<User>,
    last_id: i64,
}

impl Directory {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }
}

/// In-memory user store backed by a single vector.
///
/// Lookups are linear scans; the first match wins. One `RwLock` guards both
/// the users and the id sequence, so each operation is atomic on its own.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Directory>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Directory>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Directory>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    fn get(&self, id: UserId) -> StoreResult<User> {
        let dir = self.read()?;
        dir.users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: UserId, replacement: User) -> StoreResult<User> {
        let mut dir = self.write()?;
        let idx = dir.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(std::mem::replace(&mut dir.users[idx], replacement))
    }

    fn create(&self, user: User) -> StoreResult<()> {
        let mut dir = self.write()?;
        tracing::debug!(user_id = %user.id, name = %user.name, "storing user");
        dir.users.push(user);
        Ok(())
    }

    fn delete(&self, id: UserId) -> StoreResult<User> {
        let mut dir = self.write()?;

        for user in dir.users.iter_mut() {
            user.forget_friend(id);
        }

        let idx = dir.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(dir.users.remove(idx))
    }

    fn next_id(&self) -> StoreResult<UserId> {
        let mut dir = self.write()?;
        dir.last_id += 1;
        Ok(UserId::new(dir.last_id))
    }
}
