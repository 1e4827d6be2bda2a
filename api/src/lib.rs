//! # NoteVault API
//!
//! HTTP layer of the NoteVault backend: request/response DTOs,
//! middleware (session authentication, CORS, rate limiting), route
//! handlers, and the application factory. Exposed as a library so the
//! integration tests can assemble the same app the binary runs.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
