//! Application factory.
//!
//! Assembles the actix-web application from injected services so the
//! binary and the integration tests build the exact same app.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::auth::SessionAuthenticator;
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};
use nv_shared::types::ErrorBody;

use crate::middleware::{cors::create_cors, RateLimiter, SessionAuth};
use crate::routes::auth::{me, request_otp, signin, signup};
use crate::routes::notes::{create_note, delete_note, get_note, list_notes, update_note};
use crate::routes::AppState;

/// Maximum JSON payload size (10 MB)
const JSON_PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Create and configure the application with all dependencies.
///
/// The rate limiters are taken by value but share their counters with
/// every clone, so the caller must construct them once and clone them
/// into each worker's factory invocation.
pub fn create_app<A, E, S, N>(
    app_state: web::Data<AppState<A, E, S, N>>,
    authenticator: web::Data<Arc<dyn SessionAuthenticator>>,
    otp_limiter: RateLimiter,
    api_limiter: RateLimiter,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    let cors = create_cors();

    let json_config = web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorBody::new("Invalid request body")),
            )
            .into()
        });

    App::new()
        // Shared state and JSON handling
        .app_data(app_state)
        .app_data(authenticator)
        .app_data(json_config)
        // Middleware (outermost last: CORS, then rate limiting, then logging)
        .wrap(Logger::default())
        .wrap(api_limiter)
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .service(
                            web::resource("/request-otp")
                                .wrap(otp_limiter)
                                .route(web::post().to(request_otp::<A, E, S, N>)),
                        )
                        .route("/signup", web::post().to(signup::<A, E, S, N>))
                        .route("/signin", web::post().to(signin::<A, E, S, N>))
                        .service(
                            web::resource("/me")
                                .wrap(SessionAuth::new())
                                .route(web::get().to(me)),
                        ),
                )
                .service(
                    web::scope("/notes")
                        .wrap(SessionAuth::new())
                        .route("", web::get().to(list_notes::<A, E, S, N>))
                        .route("", web::post().to(create_note::<A, E, S, N>))
                        .route("/{id}", web::get().to(get_note::<A, E, S, N>))
                        .route("/{id}", web::put().to(update_note::<A, E, S, N>))
                        .route("/{id}", web::delete().to(delete_note::<A, E, S, N>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Server is running!",
        "service": "notevault-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Route not found"))
}
