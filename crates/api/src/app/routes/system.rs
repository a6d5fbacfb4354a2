use axum::http::StatusCode;

pub async fn root() -> &'static str {
    "OK"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
