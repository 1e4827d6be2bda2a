//! HTTP mail-provider client.
//!
//! Posts JSON to a configurable mail API endpoint with bounded retry.
//! Client errors (4xx other than 429) fail immediately; rate limiting
//! and server errors back off and retry up to the configured limit.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info, warn};

use nv_core::services::verification::EmailServiceTrait;
use nv_shared::config::EmailConfig;
use nv_shared::utils::mask_email;

use crate::InfrastructureError;

use super::{otp_message_body, OTP_SUBJECT};

/// Response shape returned by the mail API on success
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// HTTP mail API implementation of the email service
pub struct HttpEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Email(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            api_url = %config.api_url,
            from = %config.from_address,
            "HTTP email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Send with retry and exponential backoff
    async fn send_with_retry(&self, to: &str, code: &str) -> Result<String, String> {
        let payload = json!({
            "from": self.config.from_address,
            "to": to,
            "subject": OTP_SUBJECT,
            "text": otp_message_body(code),
        });

        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                to = %mask_email(to),
                attempt = attempts,
                max_attempts = self.config.max_retries,
                "Sending OTP email"
            );

            let result = self
                .client
                .post(&self.config.api_url)
                .bearer_auth(&self.config.api_key)
                .json(&payload)
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    let message_id = match response.json::<SendResponse>().await {
                        Ok(body) => body.id,
                        // Some providers return an empty body; the send
                        // still succeeded
                        Err(_) => String::from("unknown"),
                    };

                    info!(
                        to = %mask_email(to),
                        message_id = %message_id,
                        "OTP email accepted by provider"
                    );
                    return Ok(message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    let retryable = status.as_u16() == 429 || status.is_server_error();

                    if !retryable {
                        error!(
                            to = %mask_email(to),
                            status = %status,
                            "Mail provider rejected the request"
                        );
                        return Err(format!("Mail provider rejected the request: {}", status));
                    }

                    if attempts >= self.config.max_retries {
                        return Err(format!(
                            "Failed to send email after {} attempts: {}",
                            self.config.max_retries, status
                        ));
                    }

                    warn!(
                        to = %mask_email(to),
                        status = %status,
                        backoff = ?delay,
                        "Transient provider error, backing off"
                    );
                }
                Err(e) => {
                    if attempts >= self.config.max_retries {
                        return Err(format!(
                            "Failed to send email after {} attempts: {}",
                            self.config.max_retries, e
                        ));
                    }

                    warn!(
                        to = %mask_email(to),
                        error = %e,
                        backoff = ?delay,
                        "Request error, backing off"
                    );
                }
            }

            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailService {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        self.send_with_retry(email, code).await
    }
}
