use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Encrypted cookie holding the per-client secret.
pub const CSRF_COOKIE: &str = "csrf";
/// Header carrying the token on requests; also set on rejection responses.
pub const CSRF_HEADER: &str = "x-csrf-token";
/// Query-string fallback for the token.
pub const CSRF_PARAM: &str = "_csrf";

const SECRET_BYTES: usize = 32;

pub fn mint_secret() -> String {
    let mut buf = [0u8; SECRET_BYTES];
    rand::thread_rng().fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

fn presented_token(req: &Request) -> Option<String> {
    if let Some(v) = req.headers().get(CSRF_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(v.to_string());
    }
    let qs = req.uri().query()?;
    url::form_urlencoded::parse(qs.as_bytes())
        .find(|(k, _)| k == CSRF_PARAM)
        .map(|(_, v)| v.into_owned())
}

/// Double-submit verification, applied to every request including GET: the
/// token presented in the header or query string must match the secret held
/// in the encrypted cookie. On failure the handler never runs; the rejection
/// mints or re-sends the cookie and echoes the expected token in a response
/// header so a first-party client can retry with a valid pair. Cross-origin
/// callers cannot read that header.
pub async fn verify(jar: PrivateCookieJar, req: Request, next: Next) -> Response {
    let secret = jar.get(CSRF_COOKIE).map(|c| c.value().to_string());
    let token = presented_token(&req);

    if let (Some(secret), Some(token)) = (secret.as_deref(), token.as_deref())
        && bool::from(secret.as_bytes().ct_eq(token.as_bytes()))
    {
        return next.run(req).await;
    }

    warn!(path = %req.uri().path(), "csrf verification failed");

    let secret = secret.unwrap_or_else(mint_secret);
    let jar = jar.add(secret_cookie(&secret));
    let mut response = (StatusCode::FORBIDDEN, "invalid csrf token").into_response();
    if let Ok(value) = HeaderValue::from_str(&secret) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(CSRF_HEADER), value);
    }
    (jar, response).into_response()
}

fn secret_cookie(secret: &str) -> Cookie<'static> {
    Cookie::build((CSRF_COOKIE, secret.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}
