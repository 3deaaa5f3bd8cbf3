//! Vercel v13 deployments client.
//!
//! Converts a domain [`vitrine_core::DeploymentOrder`] into the wire
//! payload (base64-encoded files, explicit-null project settings) and
//! maps the provider's record back into domain terms.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_BASE_URL, VercelClient};
pub use conversions::{from_deployment_response, to_deployment_payload};
pub use dto::{
    DeploymentFile, DeploymentMeta, DeploymentPayload, DeploymentResponse, ProjectSettings,
};
