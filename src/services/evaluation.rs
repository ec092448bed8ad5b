//! Client for the external strategy evaluation service

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use super::error::{error_message, ApiError};
use crate::models::payload::SubmissionPayload;

/// Acknowledged submission: status plus the raw response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResponse {
    pub status: u16,
    pub body: String,
}

impl EvaluationResponse {
    /// Body parsed as JSON, if it is JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Anything that accepts a strategy payload for evaluation.
///
/// One call is one request: implementations must not retry.
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn evaluate(&self, payload: &SubmissionPayload) -> Result<EvaluationResponse, ApiError>;
}

pub struct HttpEvaluationClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpEvaluationClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: Url, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EvaluationService for HttpEvaluationClient {
    async fn evaluate(&self, payload: &SubmissionPayload) -> Result<EvaluationResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            info!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                terms = payload.strategy.len(),
                "Strategy submitted for evaluation"
            );
            Ok(EvaluationResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            let fallback = status.canonical_reason().unwrap_or("request failed");
            let message = error_message(&body, fallback);
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                message = %message,
                "Evaluation service rejected strategy"
            );
            Err(ApiError::Application {
                status: status.as_u16(),
                message,
            })
        }
    }
}
