//! Deployment order and record types.

use serde::{Deserialize, Serialize};

/// A named file included in a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFile {
    /// Path of the file inside the deployment, e.g. `index.html`.
    pub path: String,
    /// UTF-8 file contents. Providers encode these for their wire
    /// format; the order keeps them readable.
    pub contents: String,
}

impl SiteFile {
    /// Creates a file entry.
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Everything a deployment host needs to publish a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentOrder {
    /// Deployment name (slug plus collision suffix).
    pub name: String,
    /// Files to publish.
    pub files: Vec<SiteFile>,
    /// Original user prompt, attached as provider metadata.
    pub source_prompt: Option<String>,
}

/// What the deployment provider reported back.
///
/// Every field is optional: providers may omit any of them, and the
/// HTTP layer passes the nulls through to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeploymentRecord {
    /// Provider-assigned deployment identifier.
    pub id: Option<String>,
    /// Public URL of the deployment.
    pub url: Option<String>,
    /// Inspector/debug URL.
    pub inspector_url: Option<String>,
}
