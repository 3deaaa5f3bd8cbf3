//! Configuration for the Vitrine HTTP service.
//!
//! Read once at process start and passed down; components never read
//! ambient environment state themselves.

use derive_getters::Getters;

/// Default generation model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default listen address when `VITRINE_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:4000";

/// Configuration for the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeneratorConfig {
    /// API key. Absence enables fallback-template mode, not an error.
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier.
    model: String,
}

impl GeneratorConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (optional; fallback mode when unset)
    /// - `GEMINI_MODEL` (default: "gemini-1.5-flash")
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        GeneratorConfigBuilder::default()
            .api_key(api_key)
            .model(model)
            .build()
            .expect("Valid GeneratorConfig")
    }
}

/// Configuration for the deployment provider.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[derive(Default)]
pub struct PublisherConfig {
    /// Deployment token. Absence is a hard error at deploy time only.
    token: Option<String>,
    /// Optional project targeting by id. Wins over the project name.
    project_id: Option<String>,
    /// Optional project targeting by name.
    project_name: Option<String>,
    /// Optional team scoping, sent as a query parameter.
    team_id: Option<String>,
}

impl PublisherConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `VERCEL_TOKEN` (optional here; required when deploying)
    /// - `VERCEL_PROJECT_ID` (optional)
    /// - `VERCEL_PROJECT_NAME` (optional)
    /// - `VERCEL_TEAM_ID` (optional)
    pub fn from_env() -> Self {
        PublisherConfigBuilder::default()
            .token(std::env::var("VERCEL_TOKEN").ok())
            .project_id(std::env::var("VERCEL_PROJECT_ID").ok())
            .project_name(std::env::var("VERCEL_PROJECT_NAME").ok())
            .team_id(std::env::var("VERCEL_TEAM_ID").ok())
            .build()
            .expect("Valid PublisherConfig")
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Listen address, e.g. "127.0.0.1:4000".
    addr: String,
    /// Front-end origin, logged for operators.
    #[builder(default)]
    web_origin: Option<String>,
    /// Generation backend settings.
    generator: GeneratorConfig,
    /// Deployment provider settings.
    publisher: PublisherConfig,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// Reads `VITRINE_ADDR` (default: "127.0.0.1:4000") and
    /// `WEB_ORIGIN` (optional) in addition to the generator and
    /// publisher variables.
    pub fn from_env() -> Self {
        let addr = std::env::var("VITRINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        ServerConfigBuilder::default()
            .addr(addr)
            .web_origin(std::env::var("WEB_ORIGIN").ok())
            .generator(GeneratorConfig::from_env())
            .publisher(PublisherConfig::from_env())
            .build()
            .expect("Valid ServerConfig")
    }
}
