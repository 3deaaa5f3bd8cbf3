//! Generation backend seam.

use async_trait::async_trait;
use vitrine_core::{TextGenerationRequest, TextGenerationResponse};
use vitrine_error::VitrineResult;

/// A backend that turns a compiled prompt into model-attributed text.
///
/// Implementations perform exactly one request/response exchange per
/// call: no retries, no streaming, no partial results. A non-success
/// upstream response is an error carrying the upstream status code and
/// raw body.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for the given prompt and sampling parameters.
    async fn generate(
        &self,
        request: &TextGenerationRequest,
    ) -> VitrineResult<TextGenerationResponse>;
}
