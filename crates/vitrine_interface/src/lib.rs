//! Trait definitions for the Vitrine website generation service.
//!
//! The server logic talks to the generation backend and the deployment
//! provider only through these seams, so tests can substitute
//! deterministic fakes instead of performing network I/O.

mod deployment_host;
mod text_generator;

pub use deployment_host::DeploymentHost;
pub use text_generator::TextGenerator;
