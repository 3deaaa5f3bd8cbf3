//! Client for the Gemini `generateContent` endpoint.

use crate::gemini::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use vitrine_core::{TextGenerationRequest, TextGenerationResponse};
use vitrine_error::{GeminiError, GeminiErrorKind, VitrineResult};
use vitrine_interface::TextGenerator;

/// Production endpoint for the generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for Gemini text generation.
///
/// Performs exactly one request/response exchange per call. Failures
/// carry the upstream status code and raw body; nothing is retried.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    #[instrument(skip(api_key), fields(model = %model.as_ref()))]
    pub fn new(api_key: impl Into<String>, model: impl AsRef<str>) -> Self {
        let model = model.as_ref().to_string();
        debug!(model = %model, "Created Gemini client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint base URL (self-hosted proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Sends one `generateContent` request and concatenates the
    /// candidate text parts into a single response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the API answers
    /// with a non-success status, or the body cannot be decoded.
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate_content(
        &self,
        request: &TextGenerationRequest,
    ) -> Result<TextGenerationResponse, GeminiError> {
        let payload = GenerateContentRequest::builder()
            .contents(vec![Content::user_text(request.prompt.clone())])
            .generation_config(
                GenerationConfig::builder()
                    .temperature(request.temperature)
                    .top_k(request.top_k)
                    .top_p(request.top_p)
                    .max_output_tokens(request.max_output_tokens)
                    .build()
                    .expect("Valid GenerationConfig"),
            )
            .build()
            .expect("Valid GenerateContentRequest");

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(model = %self.model, prompt_len = request.prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;

        let model = parsed
            .model
            .clone()
            .or_else(|| parsed.model_version.clone())
            .unwrap_or_else(|| self.model.clone());

        let text = parsed.combined_text();
        debug!(model = %model, candidates = parsed.candidates.len(), text_len = text.len(), "Received response");

        Ok(TextGenerationResponse { model, text })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        request: &TextGenerationRequest,
    ) -> VitrineResult<TextGenerationResponse> {
        Ok(self.generate_content(request).await?)
    }
}
