//! Client for the Vercel v13 deployments endpoint.

use crate::vercel::{DeploymentResponse, conversions};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use vitrine_core::{DeploymentOrder, DeploymentRecord};
use vitrine_error::{VercelError, VercelErrorKind, VitrineResult};
use vitrine_interface::DeploymentHost;

/// Production endpoint for the deployments API.
pub const DEFAULT_BASE_URL: &str = "https://api.vercel.com";

/// Client for Vercel deployments.
///
/// Performs exactly one POST per call. Failures carry the provider's
/// status code and raw body; nothing is retried.
#[derive(Debug, Clone)]
pub struct VercelClient {
    client: Client,
    token: String,
    project_id: Option<String>,
    project_name: Option<String>,
    team_id: Option<String>,
    base_url: String,
}

impl VercelClient {
    /// Creates a new Vercel client with no project or team targeting.
    #[instrument(skip(token))]
    pub fn new(token: impl Into<String>) -> Self {
        debug!("Created Vercel client");
        Self {
            client: Client::new(),
            token: token.into(),
            project_id: None,
            project_name: None,
            team_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Targets an existing project by id. Wins over a project name.
    pub fn with_project_id(mut self, project_id: Option<String>) -> Self {
        self.project_id = project_id;
        self
    }

    /// Targets an existing project by name.
    pub fn with_project_name(mut self, project_name: Option<String>) -> Self {
        self.project_name = project_name;
        self
    }

    /// Scopes requests to a team via the `teamId` query parameter.
    pub fn with_team_id(mut self, team_id: Option<String>) -> Self {
        self.team_id = team_id;
        self
    }

    /// Overrides the endpoint base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Submits one deployment and returns the provider's record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the provider
    /// answers with a non-success status, or the body cannot be
    /// decoded.
    #[instrument(skip(self, order), fields(name = %order.name, files = order.files.len()))]
    pub async fn create_deployment(
        &self,
        order: &DeploymentOrder,
    ) -> Result<DeploymentRecord, VercelError> {
        let payload = conversions::to_deployment_payload(
            order,
            self.project_id.as_deref(),
            self.project_name.as_deref(),
        );

        let url = format!("{}/v13/deployments", self.base_url);
        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&payload);

        if let Some(team_id) = &self.team_id {
            request = request.query(&[("teamId", team_id.as_str())]);
        }

        debug!(name = %order.name, "Submitting deployment");

        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            VercelError::new(VercelErrorKind::ApiRequest(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Vercel API error");
            return Err(VercelError::new(VercelErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let parsed: DeploymentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            VercelError::new(VercelErrorKind::ResponseParsing(e.to_string()))
        })?;

        let record = conversions::from_deployment_response(parsed);
        debug!(id = ?record.id, url = ?record.url, "Deployment accepted");
        Ok(record)
    }
}

#[async_trait]
impl DeploymentHost for VercelClient {
    async fn deploy(&self, order: &DeploymentOrder) -> VitrineResult<DeploymentRecord> {
        Ok(self.create_deployment(order).await?)
    }
}
