//! OpenDLP Client - Cloud Content Inspection
//!
//! Typed client for a cloud-hosted DLP inspection service. Builds
//! `content:inspect` requests with a substring exclusion dictionary, submits
//! them through an injectable service capability, and reports the findings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Inspector                            │
//! │                                                             │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐    │
//! │  │   Request    │   │   Inspect    │   │   Findings   │    │
//! │  │   Builder    │──▶│   Service    │──▶│   Reporter   │    │
//! │  │ (wire model) │   │ (HTTP/mock)  │   │ (plain text) │    │
//! │  └──────────────┘   └──────────────┘   └──────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All detection, matching, and likelihood scoring happens inside the remote
//! service; this crate only shapes the request and reads the response.
//!
//! # Example
//!
//! ```no_run
//! use opendlp_client::{HttpInspectService, Inspector};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpInspectService::new("https://dlp.googleapis.com", Some("token"))?;
//! let inspector = Inspector::new(service);
//!
//! let excluded = vec!["jane@example.com".to_string()];
//! let outcome = inspector
//!     .inspect("my-project", "Contact jane@example.com", &excluded)
//!     .await?;
//! opendlp_client::report::print_findings(&outcome)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod inspector;
pub mod report;
pub mod request;
pub mod service;
pub mod types;

use thiserror::Error;

pub use inspector::{Inspector, InspectionOutcome};
pub use request::{parent_path, InspectRequestBuilder, DEFAULT_INFO_TYPES};
pub use service::{HttpInspectService, InspectService, DEFAULT_ENDPOINT};
pub use types::{Finding, InfoType, Likelihood};

/// Client error types
///
/// Every variant is fatal to the call it came from. The client performs no
/// retries and no recovery; remote failures surface unchanged.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Authentication or authorization rejected by the remote service
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Remote service rejected the request contents
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Remote quota or rate limit exhausted
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-success status from the remote service
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Network-level failure before a response was received
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint URL could not be parsed
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
