//! Handler for POST /api/auth/signin

use actix_web::{web, HttpResponse};
use validator::Validate;

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};
use nv_shared::utils::mask_email;

use crate::dto::auth::{AuthSuccessResponse, SignInRequest, UserDto};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Sign in to an existing account with OTP verification.
pub async fn signin<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    request: web::Json<SignInRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &["email", "otp"]);
    }

    log::info!("Processing signin for {}", mask_email(&request.email));

    match state
        .auth_service
        .sign_in(&request.email, &request.otp)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(AuthSuccessResponse::new(
            "Login successful",
            outcome.token,
            UserDto::from(outcome.identity),
        )),
        Err(error) => {
            log::warn!(
                "Signin failed for {}: {}",
                mask_email(&request.email),
                error
            );
            domain_error_response(&error)
        }
    }
}
