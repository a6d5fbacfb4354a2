use axum::{routing::get, Router};

pub mod system;
pub mod users;

/// Router for every public endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        // A nested "/" only matches "/users", so the slash form is routed here.
        .route(
            "/users/",
            get(users::list_users)
                .post(users::create_user)
                .delete(users::delete_user),
        )
        .nest("/users", users::router())
}
