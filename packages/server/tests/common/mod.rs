//! Shared test infrastructure.

pub mod fixtures;
pub mod harness;

pub use harness::TestHarness;

use axum::body::Body;
use axum::http::Request;

/// Build a GET request, optionally authenticated.
///
/// Every request carries an X-Forwarded-For header: the rate limiter keys on
/// client IP, so each test uses its own address to stay under the limit.
pub fn get(uri: &str, token: Option<&str>, ip: &str) -> Request<Body> {
    request("GET", uri, token, ip)
}

/// Build a POST request, optionally authenticated.
pub fn post(uri: &str, token: Option<&str>, ip: &str) -> Request<Body> {
    request("POST", uri, token, ip)
}

fn request(method: &str, uri: &str, token: Option<&str>, ip: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-forwarded-for", ip);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder.body(Body::empty()).expect("valid test request")
}

/// A throwaway client IP so each test gets its own rate-limit bucket.
pub fn unique_ip() -> String {
    let bytes = *uuid::Uuid::new_v4().as_bytes();
    format!("10.{}.{}.{}", bytes[0], bytes[1], bytes[2])
}

/// Read a response body to a string.
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body readable");
    String::from_utf8(bytes.to_vec()).expect("response body is UTF-8")
}
