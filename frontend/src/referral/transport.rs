use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use super::request::ReferralRequest;
use crate::config::{self, SubmitMode};

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never got a response: build failure, network down, CORS, timeout.
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

impl TransportError {
    /// Text for the failure notification.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Rejected { message: Some(message), .. } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Pulls the `error` string out of a failed response body, if there is a usable one.
pub fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.error)
        .filter(|message| !message.trim().is_empty())
}

/// Maps a non-success response to the error shown to the user.
pub fn rejection(status: u16, body: &str) -> TransportError {
    TransportError::Rejected {
        status,
        message: server_error_message(body),
    }
}

/// Where a validated referral gets delivered.
pub trait ReferralTransport {
    async fn submit(&self, request: &ReferralRequest) -> Result<(), TransportError>;
}

pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ReferralTransport for HttpTransport {
    async fn submit(&self, request: &ReferralRequest) -> Result<(), TransportError> {
        info!("Posting referral to {}", self.url);
        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("Network error: {}", e);
                TransportError::Request(e.to_string())
            })?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("Referral rejected with status {}: {}", status, body);
        Err(rejection(status, &body))
    }
}

/// Stand-in for sites deployed without a referrals backend.
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ReferralTransport for SimulatedTransport {
    async fn submit(&self, _request: &ReferralRequest) -> Result<(), TransportError> {
        info!("Simulating referral submission ({} ms)", self.delay_ms);
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// The transport selected by build configuration.
pub enum ConfiguredTransport {
    Http(HttpTransport),
    Simulated(SimulatedTransport),
}

impl ConfiguredTransport {
    pub fn from_config() -> Self {
        match config::submit_mode() {
            SubmitMode::Live => Self::Http(HttpTransport::new(config::referrals_url())),
            SubmitMode::Simulated => Self::Simulated(SimulatedTransport::new(config::SIMULATED_DELAY_MS)),
        }
    }
}

impl ReferralTransport for ConfiguredTransport {
    async fn submit(&self, request: &ReferralRequest) -> Result<(), TransportError> {
        match self {
            Self::Http(transport) => transport.submit(request).await,
            Self::Simulated(transport) => transport.submit(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_used_verbatim() {
        assert_eq!(
            server_error_message(r#"{"error":"Email already referred"}"#),
            Some("Email already referred".to_string())
        );
    }

    #[test]
    fn unusable_bodies_yield_no_message() {
        for body in ["", "<html>502</html>", "{}", r#"{"error":null}"#, r#"{"error":"  "}"#, r#"{"message":"x"}"#] {
            assert_eq!(server_error_message(body), None, "body {:?}", body);
        }
    }

    #[test]
    fn rejected_response_carries_status_and_server_text() {
        let err = rejection(400, r#"{"error":"Email already referred"}"#);
        assert_eq!(
            err,
            TransportError::Rejected {
                status: 400,
                message: Some("Email already referred".to_string()),
            }
        );
        assert_eq!(err.user_message(), "Email already referred");
        assert_eq!(err.to_string(), "server responded with status 400");
    }

    #[test]
    fn rejected_response_without_json_uses_fallback() {
        let err = rejection(502, "<html>Bad Gateway</html>");
        assert_eq!(err, TransportError::Rejected { status: 502, message: None });
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn user_message_falls_back_when_server_is_silent() {
        let rejected = TransportError::Rejected { status: 500, message: None };
        assert_eq!(rejected.user_message(), FALLBACK_ERROR_MESSAGE);

        let network = TransportError::Request("Failed to fetch".to_string());
        assert_eq!(network.user_message(), FALLBACK_ERROR_MESSAGE);

        let explained = TransportError::Rejected {
            status: 400,
            message: Some("Email already referred".to_string()),
        };
        assert_eq!(explained.user_message(), "Email already referred");
    }
}
