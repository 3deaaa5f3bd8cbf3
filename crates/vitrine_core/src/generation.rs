//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// A single prompt sent to a generation backend with fixed sampling
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct TextGenerationRequest {
    /// Fully compiled prompt text.
    pub prompt: String,
    /// Sampling temperature.
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Nucleus-sampling parameter.
    #[builder(default)]
    pub top_p: Option<f32>,
    /// Top-k sampling parameter.
    #[builder(default)]
    pub top_k: Option<u32>,
    /// Maximum tokens to generate.
    #[builder(default)]
    pub max_output_tokens: Option<u32>,
}

impl TextGenerationRequest {
    /// Creates a builder for `TextGenerationRequest`.
    pub fn builder() -> TextGenerationRequestBuilder {
        TextGenerationRequestBuilder::default()
    }
}

/// Model-attributed text returned by a generation backend.
///
/// `text` is the concatenation of every text part of every candidate,
/// in order, newline-joined. It may be empty when the backend produced
/// no usable content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationResponse {
    /// Identifier of the model that produced the output.
    pub model: String,
    /// Combined candidate text.
    pub text: String,
}

/// A finished generation: a complete HTML document plus provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSite {
    /// Backend model identifier, or the fallback sentinel.
    pub model: String,
    /// Complete HTML document (doctype through `</html>`).
    pub html: String,
    /// Human-readable notices; empty unless a fallback path ran.
    pub warnings: Vec<String>,
}
