use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};

use friendbook_core::UserId;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user).delete(delete_user))
        .route("/make_friends", post(make_friends))
        .route("/:id", put(update_user))
        .route("/:id/friends", get(get_friends))
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Response, ApiError> {
    let users = services.list_users()?;
    let body = serde_json::to_vec(&users)
        .map_err(|e| ApiError::internal(format!("encoding user list: {e}")))?;

    tracing::info!(count = users.len(), "listed all users");
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

pub async fn get_friends(
    Extension(services): Extension<Arc<AppServices>>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id: UserId = raw_id.parse()?;
    let view = services.friends_of(id)?;

    tracing::info!(
        user_id = %id,
        friends = ?view.user.friends,
        "friends of {}: {}",
        view.user.name,
        view.friend_names.join(", ")
    );
    Ok((StatusCode::OK, dto::friend_ids_text(&view.user.friends)).into_response())
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: dto::CreateUserRequest = dto::decode_json(&body)?;
    let user = services.create_user(req.name, req.age, req.friends)?;

    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, user.id.to_string()).into_response())
}

pub async fn make_friends(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: dto::MakeFriendsRequest = dto::decode_json(&body)?;
    let (source, target) = services.make_friends(req.source_id, req.target_id)?;

    let message = format!("{} and {} are now friends", source.name, target.name);
    tracing::info!(source_id = %source.id, target_id = %target.id, "{message}");
    Ok((StatusCode::CREATED, message).into_response())
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Body first: a malformed body wins over a malformed path id.
    let req: dto::UpdateUserRequest = dto::decode_json(&body)?;
    let id: UserId = raw_id.parse()?;
    let user = services.update_age(id, req.new_age)?;

    tracing::info!(user_id = %user.id, "age of {} changed to {}", user.name, user.age);
    Ok((StatusCode::OK, "User age updated successfully").into_response())
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: dto::DeleteUserRequest = dto::decode_json(&body)?;
    let removed = services.delete_user(req.target_id)?;

    tracing::info!(user_id = %removed.id, name = %removed.name, "user deleted");
    Ok((StatusCode::OK, removed.name).into_response())
}
