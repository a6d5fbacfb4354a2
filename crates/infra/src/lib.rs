//! Infrastructure layer: storage adapters for the user directory.

pub mod user_store;

pub use user_store::{InMemoryUserStore, StoreError, StoreResult, UserStore};
