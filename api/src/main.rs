//! NoteVault API server binary.
//!
//! Wires configuration, the database pool, the OTP store, email
//! delivery, and the core services together, then serves the app.

use std::env;
use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use nv_core::services::auth::{AuthService, SessionAuthenticator};
use nv_core::services::notes::NoteService;
use nv_core::services::token::TokenService;
use nv_core::services::verification::{
    EmailServiceTrait, OtpService, OtpServiceConfig, OtpStoreTrait,
};
use nv_infra::cache::{InMemoryOtpStore, RedisOtpStore, RedisOtpStoreConfig};
use nv_infra::database::{create_pool, MySqlAccountRepository, MySqlNoteRepository};
use nv_infra::email::{HttpEmailService, MockEmailService};
use nv_shared::config::email::EmailProvider;
use nv_shared::config::AppConfig;

use nv_api::app::create_app;
use nv_api::middleware::RateLimiter;
use nv_api::routes::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting NoteVault API server");

    let config = AppConfig::from_env();

    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; all sessions will be signed with the default secret");
    }

    // Database pool and repositories
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let account_repository = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let note_repository = Arc::new(MySqlNoteRepository::new(pool));

    // Pending-OTP store: in-memory by default, Redis when configured.
    // Codes never survive a restart of their backing store either way.
    let otp_store: Arc<dyn OtpStoreTrait> = match env::var("REDIS_URL") {
        Ok(url) => {
            info!("Using Redis OTP store");
            Arc::new(
                RedisOtpStore::new(&url, RedisOtpStoreConfig::default())
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
            )
        }
        Err(_) => {
            info!("Using in-memory OTP store");
            Arc::new(InMemoryOtpStore::new())
        }
    };

    // Email delivery
    let email_service: Arc<dyn EmailServiceTrait> = match config.email.provider {
        EmailProvider::Http => Arc::new(
            HttpEmailService::new(config.email.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
        ),
        EmailProvider::Mock => {
            warn!("EMAIL_API_KEY not set; OTP codes will be logged instead of emailed");
            Arc::new(MockEmailService::new())
        }
    };

    // Core services
    let otp_service = Arc::new(OtpService::new(
        Arc::new(email_service),
        Arc::new(otp_store),
        OtpServiceConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(config.jwt.clone().into()));
    let auth_service = Arc::new(AuthService::new(
        account_repository,
        otp_service,
        token_service,
    ));
    let note_service = Arc::new(NoteService::new(note_repository));

    let app_state = web::Data::new(AppState {
        auth_service: Arc::clone(&auth_service),
        note_service,
    });
    let session_authenticator: Arc<dyn SessionAuthenticator> = auth_service;
    let authenticator = web::Data::new(session_authenticator);

    // Rate limiters are created once so all workers share counters
    let otp_limiter = RateLimiter::from_limit(
        &config.rate_limit.otp,
        config.rate_limit.enabled,
        "Too many OTP requests. Please wait a minute before requesting again.",
    );
    let api_limiter = RateLimiter::from_limit(
        &config.rate_limit.api,
        config.rate_limit.enabled,
        "Too many requests from this IP, please try again later.",
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        create_app(
            app_state.clone(),
            authenticator.clone(),
            otp_limiter.clone(),
            api_limiter.clone(),
        )
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}
