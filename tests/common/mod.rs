#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, Response, StatusCode, header};
use axum_extra::extract::cookie::Key;
use tower::ServiceExt;

use devseclab::db::UserStore;
use devseclab::middleware::csrf::CSRF_HEADER;
use devseclab::router::{AppState, app_router};

pub struct TestApp {
    pub app: Router,
    pub db_url: String,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn temp_db(tag: &str) -> (String, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "devseclab-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));
    (format!("sqlite://{}", path.display()), path)
}

/// Fresh app over a fresh temp database, with a mock client address so the
/// rate limiter sees a key.
pub async fn spawn_app(tag: &str) -> TestApp {
    let (url, db_path) = temp_db(tag);
    let store = UserStore::connect(&url)
        .await
        .expect("failed to open sqlite store");
    store.init_schema().await.expect("failed to init schema");
    store.seed().await.expect("failed to seed store");

    let state = AppState::new(store, Key::generate());
    let app =
        app_router(state).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4711))));
    TestApp {
        app,
        db_url: url,
        db_path,
    }
}

/// Same as `spawn_app`, but the pool is closed before the router is built,
/// so every query fails at acquire time.
pub async fn spawn_broken_app(tag: &str) -> TestApp {
    let (url, db_path) = temp_db(tag);
    let store = UserStore::connect(&url)
        .await
        .expect("failed to open sqlite store");
    store.init_schema().await.expect("failed to init schema");
    store.seed().await.expect("failed to seed store");
    store.pool().close().await;

    let state = AppState::new(store, Key::generate());
    let app =
        app_router(state).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4711))));
    TestApp {
        app,
        db_url: url,
        db_path,
    }
}

pub async fn get(app: &Router, uri: &str, pair: Option<(&str, &str)>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some((cookie, token)) = pair {
        builder = builder
            .header(header::COOKIE, cookie)
            .header(CSRF_HEADER, token);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).expect("failed to build request"))
        .await
        .expect("request failed")
}

/// Send only the cookie; the token (if any) must travel in the URI itself.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

/// Bootstrap a valid CSRF pair: the first request is rejected but carries
/// the freshly minted cookie and the expected token header.
pub async fn csrf_pair(app: &Router) -> (String, String) {
    let resp = get(app, "/", None).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let token = resp
        .headers()
        .get(CSRF_HEADER)
        .expect("bootstrap response missing token header")
        .to_str()
        .expect("token header was not utf-8")
        .to_string();
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("bootstrap response missing set-cookie")
        .to_str()
        .expect("set-cookie was not utf-8")
        .split(';')
        .next()
        .expect("empty set-cookie")
        .to_string();
    (cookie, token)
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
