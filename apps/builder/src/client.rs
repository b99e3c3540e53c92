use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::store::ResumeState;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to resume API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resume API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

#[derive(Deserialize)]
struct CreatedBody {
    id: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the resume persistence endpoint.
#[derive(Clone)]
pub struct ResumeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResumeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/resume", self.base_url.trim_end_matches('/'))
    }

    /// Stores the whole document and returns its server-assigned id.
    pub async fn push(&self, state: &ResumeState) -> Result<String, ClientError> {
        let response = self.http.post(self.endpoint()).json(state).send().await?;
        let response = check_status(response).await?;

        let body: CreatedBody = response.json().await?;
        info!("Pushed resume as {}", body.id);
        Ok(body.id)
    }

    /// Fetches a stored document. Sections the document lacks come back empty.
    pub async fn pull(&self, id: &str) -> Result<ResumeState, ClientError> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&[("id", id)])
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status,
        message: error_message(&text),
    })
}

/// Pulls the message out of an `{"error": "..."}` body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}
