//! Handler for POST /api/auth/signup

use actix_web::{web, HttpResponse};
use validator::Validate;

use nv_core::repositories::{AccountRepository, NoteRepository};
use nv_core::services::auth::SignUpData;
use nv_core::services::verification::{EmailServiceTrait, OtpStoreTrait};
use nv_shared::utils::mask_email;

use crate::dto::auth::{AuthSuccessResponse, SignUpRequest, UserDto};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::auth::parse_date_of_birth;
use crate::routes::AppState;

/// Create an account with OTP verification.
///
/// Requires all four fields well-formed. On success responds 201 with
/// the session token and the public user payload.
pub async fn signup<A, E, S, N>(
    state: web::Data<AppState<A, E, S, N>>,
    request: web::Json<SignUpRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    E: EmailServiceTrait + 'static,
    S: OtpStoreTrait + 'static,
    N: NoteRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors, &["name", "email", "date_of_birth", "otp"]);
    }

    let date_of_birth = match parse_date_of_birth(&request.date_of_birth) {
        Ok(date) => date,
        Err(error) => return domain_error_response(&error),
    };

    log::info!("Processing signup for {}", mask_email(&request.email));

    let data = SignUpData {
        name: request.name.clone(),
        email: request.email.clone(),
        date_of_birth,
        otp: request.otp.clone(),
    };

    match state.auth_service.sign_up(data).await {
        Ok(outcome) => HttpResponse::Created().json(AuthSuccessResponse::new(
            "Account created successfully",
            outcome.token,
            UserDto::from(outcome.identity),
        )),
        Err(error) => {
            log::warn!(
                "Signup failed for {}: {}",
                mask_email(&request.email),
                error
            );
            domain_error_response(&error)
        }
    }
}
