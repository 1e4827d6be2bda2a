//! Handler for POST /api/auth/request-otp

use actix_web::{web, HttpResponse};
use validator::Validate;

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};
use nv_shared::types::ApiMessage;
use nv_shared::utils::mask_email;

use crate::dto::auth::RequestOtpRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Request a one-time passcode by email.
///
/// Used ahead of both signup and signin. Responds 200 with a plain
/// success envelope; the code itself only ever travels by email.
pub async fn request_otp<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &["email"]);
    }

    log::info!(
        "Processing OTP request for {}",
        mask_email(&request.email)
    );

    match state.auth_service.request_otp(&request.email).await {
        Ok(message_id) => {
            log::info!(
                "OTP delivered to {} (message {})",
                mask_email(&request.email),
                message_id
            );
            HttpResponse::Ok().json(ApiMessage::ok(
                "OTP sent successfully to your email. Please check your inbox and spam folder.",
            ))
        }
        Err(error) => {
            log::warn!(
                "OTP request failed for {}: {}",
                mask_email(&request.email),
                error
            );
            domain_error_response(&error)
        }
    }
}
