//! Unit tests for OtpService covering the store/verify/clear lifecycle

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::services::verification::{OtpService, OtpServiceConfig, OtpStoreTrait};

use super::mocks::{MockEmailService, MockOtpStore};

fn service_with(
    email_service: MockEmailService,
    store: MockOtpStore,
) -> (
    OtpService<MockEmailService, MockOtpStore>,
    Arc<MockEmailService>,
    Arc<MockOtpStore>,
) {
    let email_service = Arc::new(email_service);
    let store = Arc::new(store);
    let service = OtpService::new(
        Arc::clone(&email_service),
        Arc::clone(&store),
        OtpServiceConfig::default(),
    );
    (service, email_service, store)
}

#[tokio::test]
async fn test_request_code_stores_and_sends() {
    let (service, email_service, store) = service_with(MockEmailService::new(), MockOtpStore::new());

    let message_id = service.request_code("a@x.com").await.unwrap();
    assert!(!message_id.is_empty());
    assert!(store.contains("a@x.com").await);

    // The delivered code verifies against the store
    let code = email_service.last_code_for("a@x.com").await.unwrap();
    assert!(service.verify_code("a@x.com", &code).await.unwrap());
}

#[tokio::test]
async fn test_verify_then_clear_scenario() {
    // Scenario: store, verify -> true, clear, verify -> false
    let (service, _, store) = service_with(MockEmailService::new(), MockOtpStore::new());

    store.store("a@x.com", "123456").await.unwrap();
    assert!(service.verify_code("a@x.com", "123456").await.unwrap());

    // Successful verification does not consume the entry
    assert!(service.verify_code("a@x.com", "123456").await.unwrap());

    service.clear("a@x.com").await.unwrap();
    assert!(!service.verify_code("a@x.com", "123456").await.unwrap());
}

#[tokio::test]
async fn test_verify_unknown_email_is_false() {
    let (service, _, _) = service_with(MockEmailService::new(), MockOtpStore::new());
    assert!(!service.verify_code("nobody@x.com", "123456").await.unwrap());
}

#[tokio::test]
async fn test_expired_code_is_rejected_and_evicted() {
    let (service, _, store) = service_with(MockEmailService::new(), MockOtpStore::new());

    store.store("a@x.com", "123456").await.unwrap();
    store.expire_now("a@x.com").await;

    assert!(!service.verify_code("a@x.com", "123456").await.unwrap());
    // Lazy eviction removed the entry
    assert!(!store.contains("a@x.com").await);
}

#[tokio::test]
async fn test_new_request_supersedes_previous_code() {
    let (service, email_service, _) = service_with(MockEmailService::new(), MockOtpStore::new());

    service.request_code("a@x.com").await.unwrap();
    let first = email_service.last_code_for("a@x.com").await.unwrap();

    service.request_code("a@x.com").await.unwrap();
    let second = email_service.last_code_for("a@x.com").await.unwrap();

    // The old code is permanently invalid once replaced
    if first != second {
        assert!(!service.verify_code("a@x.com", &first).await.unwrap());
    }
    assert!(service.verify_code("a@x.com", &second).await.unwrap());
}

#[tokio::test]
async fn test_malformed_candidates_never_reach_the_store() {
    let (service, _, store) = service_with(MockEmailService::new(), MockOtpStore::new());
    store.store("a@x.com", "123456").await.unwrap();

    assert!(!service.verify_code("a@x.com", "12345").await.unwrap());
    assert!(!service.verify_code("a@x.com", "1234567").await.unwrap());
    assert!(!service.verify_code("a@x.com", "12a456").await.unwrap());
    assert!(!service.verify_code("a@x.com", "").await.unwrap());

    // The well-formed, matching code still works afterwards
    assert!(service.verify_code("a@x.com", "123456").await.unwrap());
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let (service, _, _) = service_with(MockEmailService::new(), MockOtpStore::new());

    // Clearing a never-set email is a no-op and never fails
    service.clear("nobody@x.com").await.unwrap();
    service.clear("nobody@x.com").await.unwrap();
}

#[tokio::test]
async fn test_delivery_failure_surfaces_as_otp_delivery_failed() {
    let (service, _, store) =
        service_with(MockEmailService::failing(), MockOtpStore::new());

    let err = service.request_code("a@x.com").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::OtpDeliveryFailed)
    ));

    // The code was stored before the send attempt; a resend will
    // replace it, so no cleanup is required here
    assert!(store.contains("a@x.com").await);
}
