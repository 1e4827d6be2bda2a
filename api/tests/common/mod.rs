//! Shared harness for the API integration tests.
//!
//! Assembles the same app the binary runs, with the in-memory OTP
//! store, mock repositories, and the recording mock email service so
//! tests can read delivered codes back out.

// Each test binary compiles its own copy; not every test uses every
// helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use nv_core::repositories::{MockAccountRepository, MockNoteRepository};
use nv_core::services::auth::{AuthService, SessionAuthenticator};
use nv_core::services::notes::NoteService;
use nv_core::services::token::{TokenService, TokenServiceConfig};
use nv_core::services::verification::{OtpService, OtpServiceConfig, OtpStoreTrait};
use nv_infra::cache::InMemoryOtpStore;
use nv_infra::email::MockEmailService;

use nv_api::middleware::RateLimiter;
use nv_api::routes::AppState;

/// Secret shared by the app under test and any tokens tests mint
/// themselves.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub type TestAppState =
    AppState<MockAccountRepository, MockEmailService, InMemoryOtpStore, MockNoteRepository>;

pub struct TestContext {
    pub accounts: MockAccountRepository,
    pub email: MockEmailService,
    pub store: Arc<InMemoryOtpStore>,
    pub app_state: web::Data<TestAppState>,
    pub authenticator: web::Data<Arc<dyn SessionAuthenticator>>,
    pub otp_limiter: RateLimiter,
    pub api_limiter: RateLimiter,
}

impl TestContext {
    /// Context with limits high enough to stay out of the way.
    pub fn new() -> Self {
        Self::with_limits(1000, 10_000)
    }

    /// Context with explicit OTP and general request limits.
    pub fn with_limits(otp_limit: u32, api_limit: u32) -> Self {
        let accounts = MockAccountRepository::new();
        let email = MockEmailService::new();
        let store = Arc::new(InMemoryOtpStore::new());

        let otp_service = Arc::new(OtpService::new(
            Arc::new(email.clone()),
            Arc::clone(&store),
            OtpServiceConfig::default(),
        ));
        let token_service = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            ..Default::default()
        }));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(accounts.clone()),
            otp_service,
            token_service,
        ));
        let note_service = Arc::new(NoteService::new(Arc::new(MockNoteRepository::new())));

        let app_state = web::Data::new(AppState {
            auth_service: Arc::clone(&auth_service),
            note_service,
        });
        let session_authenticator: Arc<dyn SessionAuthenticator> = auth_service;

        Self {
            accounts,
            email,
            store,
            app_state,
            authenticator: web::Data::new(session_authenticator),
            otp_limiter: RateLimiter::new(
                otp_limit,
                Duration::from_secs(60),
                "Too many OTP requests. Please wait a minute before requesting again.",
            ),
            api_limiter: RateLimiter::new(
                api_limit,
                Duration::from_secs(15 * 60),
                "Too many requests from this IP, please try again later.",
            ),
        }
    }

    /// Plant a pending code directly in the store.
    pub async fn plant_otp(&self, email: &str, code: &str) {
        self.store.store(email, code).await.unwrap();
    }

    /// Check whether a code is still pending for an email.
    pub async fn otp_matches(&self, email: &str, code: &str) -> bool {
        self.store.verify(email, code).await.unwrap()
    }
}

/// Build the app for `actix_web::test::init_service` from a context.
#[macro_export]
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(nv_api::app::create_app(
            $ctx.app_state.clone(),
            $ctx.authenticator.clone(),
            $ctx.otp_limiter.clone(),
            $ctx.api_limiter.clone(),
        ))
        .await
    };
}
