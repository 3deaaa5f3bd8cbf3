//! HTTP response bodies.

use serde::Serialize;
use vitrine_core::{DeploymentRecord, GeneratedSite};

/// Success body of `POST /api/website/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSiteResponse {
    /// Backend model identifier, or the fallback sentinel.
    pub model: String,
    /// Complete HTML document.
    pub html: String,
    /// Non-blocking notices; empty unless a fallback path ran.
    pub warnings: Vec<String>,
}

impl From<GeneratedSite> for GenerateSiteResponse {
    fn from(site: GeneratedSite) -> Self {
        Self {
            model: site.model,
            html: site.html,
            warnings: site.warnings,
        }
    }
}

/// Success body of `POST /api/website/deploy`.
///
/// Fields the provider omitted serialize as explicit nulls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploySiteResponse {
    /// Provider-assigned deployment identifier.
    pub id: Option<String>,
    /// Public URL of the deployment.
    pub url: Option<String>,
    /// Inspector/debug URL.
    pub inspector_url: Option<String>,
}

impl From<DeploymentRecord> for DeploySiteResponse {
    fn from(record: DeploymentRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            inspector_url: record.inspector_url,
        }
    }
}

/// Error body shared by every failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error message.
    pub error: String,
}

impl ErrorBody {
    /// Creates an error body.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
