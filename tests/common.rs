#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::header::COOKIE;
use axum::http::{Method, Request, Response};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use storefront_gate::config::{extract_config, ConfigV1};
use storefront_gate::routes::create_router;
use storefront_gate::state::AppState;

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
gate:
  locales: [vi, en]
  protected_prefixes: [/checkout, /account]
  auth_cookie: auth_token
bind_address: 127.0.0.1:8081
"#;

pub fn load_test_config() -> ConfigV1 {
    extract_config(Figment::new().merge(Yaml::string(TEST_CONFIG)))
        .expect("Failed to parse test config YAML")
}

pub fn build_app(config: ConfigV1) -> (Router, AppState) {
    let state = AppState::new(Arc::new(config)).expect("metrics should register");
    (create_router(state.clone()), state)
}

pub fn request(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn request_with_cookie(path: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("Location")
        .expect("Location header missing")
        .to_str()
        .expect("Location header not valid UTF-8")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
