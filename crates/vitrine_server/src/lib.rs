//! HTTP API for Vitrine website generation and deployment.
//!
//! Two independent request/response procedures behind an axum router:
//! site generation (prompt compilation, backend call or fallback
//! template, HTML normalization) and site publishing (naming, manifest
//! construction, deployment submission). No state is shared between
//! requests beyond immutable configuration and pooled HTTP clients.

mod api;
mod config;
mod request;
mod response;
pub mod site;

pub use api::{AppState, create_router, deploy_website, generate_website};
pub use config::{
    GeneratorConfig, GeneratorConfigBuilder, PublisherConfig, PublisherConfigBuilder, ServerConfig,
    ServerConfigBuilder,
};
pub use request::{DeploySiteBody, GenerateSiteBody};
pub use response::{DeploySiteResponse, ErrorBody, GenerateSiteResponse};
