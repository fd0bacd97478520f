//! Router assembly: resource routers nested under their prefixes, the
//! process-wide middleware chain, static files, and the terminal 404.

pub mod catalog;
pub mod common;

pub use catalog::catalog_routes;
pub use common::common_routes;

use axum::{
    handler::HandlerWithoutStateExt,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer, services::ServeDir,
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::handlers::pages;
use crate::middleware::headers::security_headers;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimitConfig, RateLimiter};
use crate::state::AppState;

// Matches the body-parser default of roughly 100 KB per form or JSON body.
const BODY_LIMIT_BYTES: usize = 100 * 1024;

async fn not_found() -> Response {
    AppError::NotFound("Not Found".into()).into_response()
}

/// Full application router with the default rate-limit policy.
pub fn app(state: AppState) -> Router {
    app_with_limiter(state, RateLimiter::new(RateLimitConfig::default()))
}

/// Router assembly with an injectable limiter. Unmatched paths fall through
/// to the static directory and then to the rendered 404 page; middleware
/// runs outermost-first in the order security headers, access log,
/// compression, body limit, cookies, rate limit.
pub fn app_with_limiter(state: AppState, limiter: RateLimiter) -> Router {
    let static_files = ServeDir::new(&state.settings.static_dir)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(pages::site_index))
        .route("/users", get(pages::users_index))
        .nest("/catalog", catalog_routes(state.clone()))
        .merge(common_routes(state))
        .fallback_service(static_files)
        .layer(from_fn(rate_limit_middleware))
        .layer(Extension(limiter))
        .layer(tower_cookies::CookieManagerLayer::new())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(security_headers))
}
