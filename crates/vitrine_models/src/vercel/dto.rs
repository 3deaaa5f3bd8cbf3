//! Data transfer objects for the Vercel v13 deployments API.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `POST /v13/deployments`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into), pattern = "owned")]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPayload {
    /// Deployment name (slug plus collision suffix).
    name: String,
    /// Files to publish, base64-encoded.
    files: Vec<DeploymentFile>,
    /// Framework/build overrides; all explicit nulls for a static site.
    project_settings: ProjectSettings,
    /// Target project by id. Takes precedence over `project`.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    /// Target project by name.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    /// Request metadata.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<DeploymentMeta>,
}

impl DeploymentPayload {
    /// Creates a builder for `DeploymentPayload`.
    pub fn builder() -> DeploymentPayloadBuilder {
        DeploymentPayloadBuilder::default()
    }
}

/// A single file entry in a deployment payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Getters)]
pub struct DeploymentFile {
    /// Path of the file inside the deployment.
    file: String,
    /// Base64-encoded contents.
    data: String,
    /// Encoding marker, always `"base64"`.
    encoding: String,
}

impl DeploymentFile {
    /// Creates a base64-encoded file entry from UTF-8 contents.
    pub fn base64(file: impl Into<String>, contents: &str) -> Self {
        Self {
            file: file.into(),
            data: STANDARD.encode(contents.as_bytes()),
            encoding: "base64".to_string(),
        }
    }
}

/// Project settings for a raw static deployment.
///
/// The provider distinguishes "field absent" from "field null"; a
/// static HTML drop wants explicit nulls, so none of these fields skip
/// serialization.
#[derive(Debug, Clone, Serialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Framework preset.
    framework: Option<String>,
    /// Build command override.
    build_command: Option<String>,
    /// Dev command override.
    dev_command: Option<String>,
    /// Output directory override.
    output_directory: Option<String>,
}

/// Metadata attached to a deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Getters)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentMeta {
    /// The prompt the site was generated from, bounded in length.
    source_prompt: String,
}

impl DeploymentMeta {
    /// Creates metadata carrying the source prompt.
    pub fn new(source_prompt: impl Into<String>) -> Self {
        Self {
            source_prompt: source_prompt.into(),
        }
    }
}

/// Deployment record returned by the provider.
///
/// Every field is optional; absent fields default to `None` rather
/// than failing the decode.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResponse {
    /// Opaque deployment identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Bare deployment hostname, no scheme.
    #[serde(default)]
    pub url: Option<String>,
    /// Inspector/debug URL.
    #[serde(default)]
    pub inspector_url: Option<String>,
}
