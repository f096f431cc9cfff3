//! High-level inspection facade

use crate::request::{parent_path, InspectRequestBuilder};
use crate::service::InspectService;
use crate::types::{Finding, InspectContentResponse};
use crate::InspectError;
use serde::{Deserialize, Serialize};

/// Result of one inspection call
///
/// Pure data, created per call and never persisted. Rendering lives in
/// [`crate::report`] so callers can consume findings without touching any
/// output sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionOutcome {
    findings: Vec<Finding>,
}

impl InspectionOutcome {
    /// Findings in the order the service returned them
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Number of findings
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }

    /// Whether any sensitive content was reported
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

impl From<InspectContentResponse> for InspectionOutcome {
    fn from(response: InspectContentResponse) -> Self {
        Self {
            findings: response.result.findings,
        }
    }
}

/// Stateless single-shot content inspector
///
/// Wraps an [`InspectService`] capability with a configured request builder.
/// Every call is independent; the only shared state is the service's own
/// connection pool.
pub struct Inspector<S> {
    service: S,
    builder: InspectRequestBuilder,
}

impl<S: InspectService> Inspector<S> {
    /// Inspector with the default request configuration
    pub fn new(service: S) -> Self {
        Self::with_request(service, InspectRequestBuilder::new())
    }

    /// Inspector with a custom request configuration
    pub fn with_request(service: S, builder: InspectRequestBuilder) -> Self {
        Self { service, builder }
    }

    /// Run one inspection: single request, single response, no retries
    ///
    /// `excluded_substrings` suppress findings whose matched span contains
    /// any of them; the containment check itself happens in the remote
    /// service. Errors from the service propagate unmodified.
    pub async fn inspect(
        &self,
        project_id: &str,
        text: &str,
        excluded_substrings: &[String],
    ) -> Result<InspectionOutcome, InspectError> {
        let parent = parent_path(project_id);
        let request = self.builder.build(text, excluded_substrings);

        tracing::debug!(
            %parent,
            excluded = excluded_substrings.len(),
            bytes = text.len(),
            "dispatching inspection"
        );

        let response = self.service.inspect_content(&parent, &request).await?;
        let outcome = InspectionOutcome::from(response);

        tracing::info!(findings = outcome.finding_count(), "inspection complete");
        Ok(outcome)
    }
}
