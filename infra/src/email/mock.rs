//! Logging mock of the email service.
//!
//! Used in development (no provider credentials) and by the API
//! integration tests, which read delivered codes back out of it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use nv_core::services::verification::EmailServiceTrait;
use nv_shared::utils::mask_email;

/// A delivered message
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub code: String,
}

/// Mock email service that records every send
#[derive(Clone)]
pub struct MockEmailService {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All messages delivered so far
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    /// The code most recently delivered to an address, if any
    pub async fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .read()
            .await
            .iter()
            .rev()
            .find(|m| m.to == email)
            .map(|m| m.code.clone())
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        // The code is intentionally logged here: this mock replaces a
        // real inbox during development
        info!(
            to = %mask_email(email),
            code = %code,
            "Mock email delivery"
        );

        let mut sent = self.sent.write().await;
        sent.push(SentEmail {
            to: email.to_string(),
            code: code.to_string(),
        });

        Ok(format!("mock-{}", sent.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_sends() {
        let service = MockEmailService::new();

        service.send_otp("a@x.com", "111111").await.unwrap();
        service.send_otp("a@x.com", "222222").await.unwrap();
        service.send_otp("b@x.com", "333333").await.unwrap();

        assert_eq!(service.sent().await.len(), 3);
        assert_eq!(
            service.last_code_for("a@x.com").await.as_deref(),
            Some("222222")
        );
        assert_eq!(service.last_code_for("c@x.com").await, None);
    }
}
