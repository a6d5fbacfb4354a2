//! `friendbook-core` — domain building blocks for the user directory.
//!
//! This crate contains **pure domain** types (no storage or HTTP concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod user;

pub use entity::Entity;
pub use error::DomainError;
pub use id::UserId;
pub use user::User;
