use crate::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

pub fn new() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// 健康檢查, 不碰資料庫
pub async fn health() -> &'static str {
    "OK"
}

pub async fn handler_404() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
