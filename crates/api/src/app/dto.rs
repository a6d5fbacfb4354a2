use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;

use friendbook_core::UserId;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------
//
// Missing or `null` fields fall back to their zero value; unknown fields are ignored.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub friends: Vec<UserId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MakeFriendsRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub source_id: UserId,
    #[serde(deserialize_with = "null_as_default")]
    pub target_id: UserId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub new_age: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteUserRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub target_id: UserId,
}

// -------------------------
// JSON mapping helpers
// -------------------------

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the first JSON value of a request body regardless of its declared
/// content type. Anything after that value is left unread.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(decoded) => decoded.map_err(|e| ApiError::bad_request(e.to_string())),
        None => Err(ApiError::bad_request("empty request body")),
    }
}

/// Render a friend list the way it is returned as text: `[2 3]`.
pub fn friend_ids_text(friends: &[UserId]) -> String {
    let ids: Vec<String> = friends.iter().map(UserId::to_string).collect();
    format!("[{}]", ids.join(" "))
}
