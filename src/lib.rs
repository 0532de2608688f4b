pub mod db;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .with_state(state);

    with_middleware(routes)
}

/// Error fallbacks, panic recovery, CORS and request tracing around `routes`.
pub fn with_middleware(routes: Router) -> Router {
    routes
        .fallback(rejections::fallback)
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .layer(CatchPanicLayer::custom(rejections::handle_panic))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

/// Any frontend origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
