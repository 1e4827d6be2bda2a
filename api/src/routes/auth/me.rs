//! Handler for GET /api/auth/me

use actix_web::HttpResponse;

use crate::dto::auth::{MeResponse, UserDto};
use crate::middleware::AuthContext;

/// Return the authenticated caller's public user payload.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        success: true,
        user: UserDto::from(auth.identity),
    })
}
