//! Remote inspection capability
//!
//! The [`InspectService`] trait is the seam between request assembly and the
//! network. Production code uses [`HttpInspectService`]; tests substitute
//! their own implementation.

use crate::types::{InspectContentRequest, InspectContentResponse};
use crate::InspectError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

/// Default service endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dlp.googleapis.com";

/// One-operation capability: submit content for inspection
#[async_trait]
pub trait InspectService: Send + Sync {
    /// Inspect `request` under the location-scoped `parent` resource path
    async fn inspect_content(
        &self,
        parent: &str,
        request: &InspectContentRequest,
    ) -> Result<InspectContentResponse, InspectError>;
}

/// HTTP implementation of [`InspectService`]
///
/// Holds a reusable connection pool; callers construct one service and share
/// it across many inspections. Authentication is a provided bearer token, the
/// client never acquires or refreshes credentials itself.
pub struct HttpInspectService {
    base_url: Url,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl HttpInspectService {
    /// Create a service against `base_url` with an optional bearer token
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self, InspectError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            access_token: access_token.map(String::from),
            client: reqwest::Client::new(),
        })
    }

    fn request_url(&self, parent: &str) -> String {
        format!(
            "{}/v2/{}/content:inspect",
            self.base_url.as_str().trim_end_matches('/'),
            parent
        )
    }
}

#[async_trait]
impl InspectService for HttpInspectService {
    async fn inspect_content(
        &self,
        parent: &str,
        request: &InspectContentRequest,
    ) -> Result<InspectContentResponse, InspectError> {
        let url = self.request_url(parent);
        tracing::debug!(%url, "submitting content:inspect request");

        let mut req = self.client.post(&url).json(request);
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }

        // Classification only; nothing here is retried or recovered.
        let message = error_message(status, &resp.text().await.unwrap_or_default());
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => InspectError::Auth(message),
            StatusCode::BAD_REQUEST => InspectError::InvalidArgument(message),
            StatusCode::TOO_MANY_REQUESTS => InspectError::QuotaExceeded(message),
            _ => InspectError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull the human-readable message out of a service error body
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error.message;
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
