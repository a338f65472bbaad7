//! Request middleware, applied in a fixed order to every request:
//! security headers, rate limiting, the body stage, CSRF verification.
//! Each stage either calls onward or terminates the request.

pub mod csrf;
pub mod rate_limit;
pub mod security_headers;
