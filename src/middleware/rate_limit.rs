use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use tracing::warn;

use crate::router::AppState;

pub const WINDOW: Duration = Duration::from_secs(15 * 60);
pub const MAX_REQUESTS: NonZeroU32 = NonZeroU32::new(100).unwrap();

pub type IpRateLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// GCRA quota equivalent to 100 requests per 15-minute window and client:
/// a full burst of 100, replenishing one slot every 9 seconds.
pub fn build_limiter() -> Arc<IpRateLimiter> {
    let quota = Quota::with_period(WINDOW / MAX_REQUESTS.get())
        .unwrap_or_else(|| Quota::per_hour(MAX_REQUESTS))
        .allow_burst(MAX_REQUESTS);
    Arc::new(RateLimiter::keyed(quota))
}

/// Keyed per client IP; state is process-wide and updated atomically by the
/// limiter's internal store, so concurrent requests cannot undercount.
pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if state.limiter.check_key(&client).is_err() {
        warn!(client = %client, "rate limit exceeded");
        return (StatusCode::TOO_MANY_REQUESTS, "too many requests").into_response();
    }
    next.run(req).await
}
