//! Registration and login flow tests

mod support;

use std::sync::Arc;

use focusflow_core::AuthService;
use focusflow_domain::FocusFlowError;
use support::repositories::{FakePasswordHasher, FakeTokenService, MockUserRepository};

fn service() -> AuthService {
    AuthService::new(
        Arc::new(MockUserRepository::default()),
        Arc::new(FakePasswordHasher),
        Arc::new(FakeTokenService),
    )
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let service = service();

    let (user, token) =
        service.register("Ada", "Ada@Example.com", "hunter22", 100).await.expect("register");
    assert_eq!(user.email, "ada@example.com");
    assert!(!token.is_empty());

    let (logged_in, _) = service.login("ada@example.com", "hunter22").await.expect("login");
    assert_eq!(logged_in.id, user.id);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let service = service();
    service.register("Ada", "ada@example.com", "hunter22", 100).await.expect("register");

    let result = service.register("Eve", "ADA@example.com", "other", 200).await;
    assert!(matches!(result, Err(FocusFlowError::Conflict(_))));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_fail_alike() {
    let service = service();
    service.register("Ada", "ada@example.com", "hunter22", 100).await.expect("register");

    let wrong_password = service.login("ada@example.com", "nope").await;
    let unknown_email = service.login("ghost@example.com", "hunter22").await;

    let msg = |err: FocusFlowError| err.to_string();
    match (wrong_password, unknown_email) {
        (Err(a), Err(b)) => assert_eq!(msg(a), msg(b)),
        other => panic!("expected both logins to fail, got {other:?}"),
    }
}

#[tokio::test]
async fn authenticate_resolves_token_to_user() {
    let service = service();
    let (user, token) =
        service.register("Ada", "ada@example.com", "hunter22", 100).await.expect("register");

    let resolved = service.authenticate(&token).await.expect("authenticate");
    assert_eq!(resolved.id, user.id);

    let bad = service.authenticate("garbage").await;
    assert!(matches!(bad, Err(FocusFlowError::Auth(_))));
}

#[tokio::test]
async fn fcm_token_is_stored_on_the_profile() {
    let service = service();
    let (user, _) =
        service.register("Ada", "ada@example.com", "hunter22", 100).await.expect("register");

    service.update_fcm_token(&user.id, "fcm-abc").await.expect("update token");
    let me = service.me(&user.id).await.expect("me");
    assert_eq!(me.fcm_token.as_deref(), Some("fcm-abc"));
}
