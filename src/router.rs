use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    middleware,
    routing::get,
};
use axum_extra::extract::cookie::Key;

use crate::db::UserStore;
use crate::handlers::{greet, pages, users};
use crate::middleware::rate_limit::IpRateLimiter;
use crate::middleware::{csrf, rate_limit, security_headers};

/// 1 MiB cap on request bodies. The GET surface reads no body, but any
/// future POST route inherits a bounded parser through this stage.
pub const BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub limiter: Arc<IpRateLimiter>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(store: UserStore, cookie_key: Key) -> Self {
        Self {
            store,
            limiter: rate_limit::build_limiter(),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/// Middleware ordering is a contract: security headers, then rate limiting,
/// then the body stage, then CSRF. Axum applies the last `layer` call
/// outermost, so the chain reads innermost-first below.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/user", get(users::lookup))
        .route("/greet", get(greet::greet))
        .layer(middleware::from_fn_with_state(state.clone(), csrf::verify))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ))
        .layer(middleware::from_fn(security_headers::apply))
        .with_state(state)
}
