//! Core data types for the Vitrine website generation service.
//!
//! Everything here is request-scoped: created when an HTTP request
//! arrives, discarded when the response is sent. Nothing is persisted.

mod deploy;
mod escape;
mod generation;
mod plan;
mod slug;

pub use deploy::{DeploymentOrder, DeploymentRecord, SiteFile};
pub use escape::escape_html;
pub use generation::{
    GeneratedSite, TextGenerationRequest, TextGenerationRequestBuilder, TextGenerationResponse,
};
pub use plan::SitePlan;
pub use slug::slugify;
