//! Data transfer objects for the Gemini `generateContent` API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into), pattern = "owned")]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents (a single user turn for this service).
    contents: Vec<Content>,
    /// Sampling parameters.
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    /// Role of the content author ("user" or "model").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a user-role content block holding one text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// One part of a content block.
///
/// Only text parts are used here; other part kinds (inline media,
/// function calls) deserialize with `text: None` and are skipped
/// during concatenation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    /// Text payload, absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Sampling parameters for a generation request.
#[derive(Debug, Clone, Serialize, Default, Builder, Getters)]
#[builder(setter(into), pattern = "owned", default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Top-k sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    /// Nucleus-sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Creates a builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions, possibly empty.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Model identifier, when the provider includes one.
    #[serde(default)]
    pub model: Option<String>,
    /// Model version identifier, when the provider includes one.
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates every text part of every candidate, in order,
    /// newline-joined. Non-text and empty parts are skipped.
    pub fn combined_text(&self) -> String {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Candidate completion item.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    /// Candidate content, absent on safety-blocked candidates.
    #[serde(default)]
    pub content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_parts_across_candidates_in_order() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"role": "model", "parts": [{"text": "first"}, {"text": "second"}]}},
                    {"content": {"parts": [{"text": "third"}]}}
                ]
            }"#,
        )
        .expect("valid response JSON");

        assert_eq!(response.combined_text(), "first\nsecond\nthird");
    }

    #[test]
    fn tolerates_missing_and_foreign_fields() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"finishReason": "SAFETY"},
                    {"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "AA=="}}, {"text": "kept"}]}}
                ],
                "usageMetadata": {"totalTokenCount": 12}
            }"#,
        )
        .expect("valid response JSON");

        assert_eq!(response.combined_text(), "kept");
    }

    #[test]
    fn empty_envelope_yields_empty_text() {
        let response: GenerateContentResponse =
            serde_json::from_str("{}").expect("valid response JSON");
        assert!(response.combined_text().is_empty());
        assert!(response.model.is_none());
    }

    #[test]
    fn request_serializes_camel_case_and_skips_absent_params() {
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::user_text("hello")])
            .generation_config(
                GenerationConfig::builder()
                    .temperature(Some(0.5))
                    .top_k(Some(40u32))
                    .build()
                    .expect("valid config"),
            )
            .build()
            .expect("valid request");

        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["temperature"], 0.5);
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert!(value["generationConfig"].get("topP").is_none());
        assert!(value["generationConfig"].get("maxOutputTokens").is_none());
    }
}
