//! Tests for the auth module

use super::*;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    auth.apply(client.get("https://api.github.com/user/organizations"))
        .build()
        .unwrap()
}

#[test]
fn test_no_auth() {
    let req = build(&Authenticator::new(AuthConfig::None));
    assert!(req.headers().get("Authorization").is_none());
}

#[test]
fn test_basic_auth() {
    let req = build(&Authenticator::new(AuthConfig::basic("user", "pass")));

    // "user:pass" base64 encoded
    assert_eq!(
        req.headers().get("Authorization").unwrap(),
        "Basic dXNlcjpwYXNz"
    );
}

#[test]
fn test_bearer_auth() {
    let req = build(&Authenticator::new(AuthConfig::bearer("ghp_token123")));

    assert_eq!(
        req.headers().get("Authorization").unwrap(),
        "Bearer ghp_token123"
    );
}

#[test]
fn test_authenticator_config() {
    let auth = Authenticator::new(AuthConfig::bearer("t"));
    assert_eq!(auth.config().kind(), "bearer");
}
