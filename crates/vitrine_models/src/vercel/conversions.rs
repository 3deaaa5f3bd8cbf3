//! Type conversions between Vitrine and Vercel formats.

use crate::vercel::{
    DeploymentFile, DeploymentMeta, DeploymentPayload, DeploymentResponse, ProjectSettings,
};
use vitrine_core::{DeploymentOrder, DeploymentRecord};

/// Longest source prompt the provider accepts as a metadata value.
const META_PROMPT_MAX_CHARS: usize = 1024;

/// Converts a domain deployment order to the provider wire payload.
///
/// File contents are base64-encoded; the source prompt is truncated to
/// 1024 characters; a project id wins over a project name when both
/// are configured.
pub fn to_deployment_payload(
    order: &DeploymentOrder,
    project_id: Option<&str>,
    project_name: Option<&str>,
) -> DeploymentPayload {
    let files = order
        .files
        .iter()
        .map(|f| DeploymentFile::base64(f.path.clone(), &f.contents))
        .collect::<Vec<_>>();

    let mut builder = DeploymentPayload::builder()
        .name(order.name.clone())
        .files(files)
        .project_settings(ProjectSettings::default());

    if let Some(id) = project_id {
        builder = builder.project_id(Some(id.to_string()));
    } else if let Some(name) = project_name {
        builder = builder.project(Some(name.to_string()));
    }

    if let Some(prompt) = &order.source_prompt {
        let bounded: String = prompt.chars().take(META_PROMPT_MAX_CHARS).collect();
        builder = builder.meta(Some(DeploymentMeta::new(bounded)));
    }

    builder.build().expect("Valid DeploymentPayload")
}

/// Maps the provider's deployment record into domain terms.
///
/// The provider returns a bare hostname; when present it is prefixed
/// with `https://`. Absent fields stay `None`.
pub fn from_deployment_response(response: DeploymentResponse) -> DeploymentRecord {
    DeploymentRecord {
        id: response.id,
        url: response.url.map(|host| format!("https://{}", host)),
        inspector_url: response.inspector_url,
    }
}
