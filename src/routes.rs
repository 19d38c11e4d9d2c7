mod root;
mod users;

use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/health", root::new())
        .nest("/users", users::new())
        .fallback(root::handler_404)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// 沒設定 origin 時全部放行
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE])
}
