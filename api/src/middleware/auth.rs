//! Session authentication middleware for protected endpoints.
//!
//! Extracts the bearer token from the Authorization header and hands
//! it to the session authenticator, which verifies signature and
//! expiry and resolves the subject against the account repository.
//! The request suspends until the identity is resolved, then proceeds
//! with the identity attached or is rejected with a 401.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use nv_core::domain::value_objects::Identity;
use nv_core::errors::{DomainError, TokenError};
use nv_core::services::auth::SessionAuthenticator;
use nv_shared::types::ErrorBody;

/// Authenticated user context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Resolved identity of the caller
    pub identity: Identity,
}

/// Session authentication middleware factory
#[derive(Clone, Default)]
pub struct SessionAuth;

impl SessionAuth {
    /// Creates a new session authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized("Access denied. No token provided."));
                }
            };

            let authenticator =
                match req.app_data::<web::Data<Arc<dyn SessionAuthenticator>>>() {
                    Some(authenticator) => Arc::clone(authenticator.get_ref()),
                    None => {
                        log::error!("SessionAuth middleware mounted without an authenticator");
                        return Err(unauthorized("Invalid token."));
                    }
                };

            match authenticator.authenticate(&token).await {
                Ok(identity) => {
                    req.extensions_mut().insert(AuthContext { identity });
                    service.call(req).await
                }
                Err(error) => Err(auth_failure_response(&error)),
            }
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Builds a 401 with the JSON error envelope
fn unauthorized(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(ErrorBody::new(message)),
    )
    .into()
}

/// Maps an authentication failure to its 401 message.
fn auth_failure_response(error: &DomainError) -> Error {
    let message = match error {
        // Distinguish a valid token whose account is gone
        DomainError::Token(TokenError::AccountGone) => error.to_string(),
        DomainError::Token(_) => "Invalid token.".to_string(),
        other => {
            log::error!("Authentication error: {}", other);
            "Invalid token.".to_string()
        }
    };
    unauthorized(&message)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Access denied. No token provided."));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
