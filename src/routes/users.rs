use crate::{errors::AppError, state::AppState, structs::users::User};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/{id}", get(get_user))
}

/// 取 users 清單
async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.find_all().await?;

    Ok(Json(users))
}

/// 取單一 user
async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id.map_err(|rejection| AppError::InvalidId(rejection.body_text()))?;

    let user = state.users.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(user))
}
