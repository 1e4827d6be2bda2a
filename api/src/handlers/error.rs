//! Mapping from domain errors to HTTP responses.
//!
//! Every failure body is `{success: false, message}`. Internal errors
//! are logged with full detail server-side and surfaced to clients as
//! a generic message.

use actix_web::HttpResponse;

use nv_core::errors::{AuthError, DomainError, TokenError};
use nv_shared::types::ErrorBody;

/// Convert a domain error into the wire response.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(e) => HttpResponse::BadRequest().json(ErrorBody::new(e.to_string())),

        DomainError::Auth(e) => match e {
            AuthError::InvalidOrExpiredOtp | AuthError::AccountExists | AuthError::NoSuchAccount => {
                HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
            }
            AuthError::RateLimitExceeded => {
                HttpResponse::TooManyRequests().json(ErrorBody::new(e.to_string()))
            }
            AuthError::OtpDeliveryFailed => {
                HttpResponse::InternalServerError().json(ErrorBody::new(e.to_string()))
            }
        },

        DomainError::Token(e) => {
            let message = match e {
                // The orphaned-account case keeps its own message so
                // clients can tell a stale session from a bad token
                TokenError::AccountGone => e.to_string(),
                _ => "Invalid token.".to_string(),
            };
            HttpResponse::Unauthorized().json(ErrorBody::new(message))
        }

        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{} not found", resource)))
        }

        DomainError::Internal { message } => {
            // Full detail stays on the server
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}

/// Convert `validator` field errors into the wire response, honoring
/// a stable field order so the first offending field wins.
pub fn validation_error_response(
    errors: &validator::ValidationErrors,
    field_order: &[&str],
) -> HttpResponse {
    let field_errors = errors.field_errors();

    for field in field_order {
        if let Some(list) = field_errors.get(field) {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                return HttpResponse::BadRequest().json(ErrorBody::new(message));
            }
        }
    }

    HttpResponse::BadRequest().json(ErrorBody::new("Invalid request"))
}
