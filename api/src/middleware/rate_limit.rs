//! Rate limiting middleware.
//!
//! Fixed-window counters per client address, held in-process. Two
//! instances guard the API: a strict one on OTP issuance (3 per
//! 60 seconds) and a general one on all traffic (100 per 15 minutes).
//! Violations get a 429 with a fixed advisory message.
//!
//! Instances must be constructed once and cloned into the app factory
//! so every worker shares the same counters.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    collections::HashMap,
    future::{ready, Ready},
    rc::Rc,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::{Duration, Instant},
};

use nv_shared::config::WindowLimit;
use nv_shared::types::ErrorBody;

/// Counter map entries beyond this size trigger a sweep of stale
/// windows on the next insert
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    count: u32,
    window_start: Instant,
}

/// Fixed-window per-client-address rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    message: String,
    enabled: bool,
    counters: Arc<Mutex<HashMap<String, WindowCounter>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(limit: u32, window: Duration, message: impl Into<String>) -> Self {
        Self {
            limit,
            window,
            message: message.into(),
            enabled: true,
            counters: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create from a configured window limit
    pub fn from_limit(limit: &WindowLimit, enabled: bool, message: impl Into<String>) -> Self {
        let mut limiter = Self::new(
            limit.max_requests,
            Duration::from_secs(limit.window_seconds),
            message,
        );
        limiter.enabled = enabled;
        limiter
    }

    /// Record a hit for a client address.
    ///
    /// Returns `false` when the client is over its budget for the
    /// current window.
    fn check(&self, client: &str) -> bool {
        let now = Instant::now();
        let mut counters = self.counters.lock().expect("rate limiter lock poisoned");

        if counters.len() > PRUNE_THRESHOLD {
            let window = self.window;
            counters.retain(|_, c| now.duration_since(c.window_start) < window);
        }

        let counter = counters.entry(client.to_string()).or_insert(WindowCounter {
            count: 0,
            window_start: now,
        });

        if now.duration_since(counter.window_start) >= self.window {
            counter.count = 0;
            counter.window_start = now;
        }

        if counter.count >= self.limit {
            return false;
        }

        counter.count += 1;
        true
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.clone(),
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: RateLimiter,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limiter = self.limiter.clone();

        Box::pin(async move {
            if limiter.enabled {
                let client = get_client_ip(&req);

                if !limiter.check(&client) {
                    log::warn!(
                        "Rate limit exceeded for {} on {}",
                        client,
                        req.path()
                    );
                    return Err(too_many_requests(&limiter.message));
                }
            }

            service.call(req).await
        })
    }
}

/// Builds a 429 with the JSON error envelope
fn too_many_requests(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::TooManyRequests().json(ErrorBody::new(message)),
    )
    .into()
}

/// Get the client address from the request.
///
/// Honors X-Forwarded-For and X-Real-IP for reverse proxy setups,
/// falling back to the peer address.
pub(crate) fn get_client_ip(req: &ServiceRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            // Take the first IP from the comma-separated list
            if let Some(ip) = forwarded_str.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return ip.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
