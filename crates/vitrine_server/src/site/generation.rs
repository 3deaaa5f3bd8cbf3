//! Site generation orchestration.

use crate::site::{html, prompt, template};
use tracing::{debug, instrument, warn};
use vitrine_core::{GeneratedSite, SitePlan, TextGenerationRequest};
use vitrine_error::VitrineResult;
use vitrine_interface::TextGenerator;

/// Sentinel model identifier for fallback-template output.
pub const FALLBACK_MODEL: &str = "fallback-template";

/// Warning attached when no generation credential is configured.
const MISSING_KEY_WARNING: &str =
    "GEMINI_API_KEY is not set. Returned the fallback template instead of a live model response.";

/// Warning attached when the backend succeeded but produced no text.
const EMPTY_RESPONSE_WARNING: &str =
    "The model returned no usable content. Returned the fallback template instead.";

/// Placeholder prompt shown by the fallback template when the backend
/// produced no text.
const NO_CONTENT_PROMPT: &str = "No content generated.";

// Fixed sampling parameters; not caller-configurable.
const TEMPERATURE: f32 = 0.5;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Generates a complete HTML document for a plan.
///
/// Without a backend, renders the fallback template and attaches one
/// warning naming the missing credential. With a backend, performs a
/// single generation call: an upstream failure propagates as an error,
/// while a successful-but-empty response degrades to the fallback
/// template with its own warning.
#[instrument(skip_all, fields(has_backend = backend.is_some(), prompt_len = plan.prompt.len()))]
pub async fn generate_site(
    plan: &SitePlan,
    backend: Option<&dyn TextGenerator>,
) -> VitrineResult<GeneratedSite> {
    let Some(backend) = backend else {
        debug!("No generation credential configured; rendering fallback template");
        return Ok(GeneratedSite {
            model: FALLBACK_MODEL.to_string(),
            html: template::fallback_site_html(plan),
            warnings: vec![MISSING_KEY_WARNING.to_string()],
        });
    };

    let request = TextGenerationRequest::builder()
        .prompt(prompt::compile_prompt(plan))
        .temperature(Some(TEMPERATURE))
        .top_p(Some(TOP_P))
        .top_k(Some(TOP_K))
        .max_output_tokens(Some(MAX_OUTPUT_TOKENS))
        .build()
        .expect("Valid TextGenerationRequest");

    let response = backend.generate(&request).await?;

    if response.text.is_empty() {
        warn!(model = %response.model, "Backend returned no usable content; rendering fallback template");
        return Ok(GeneratedSite {
            model: response.model,
            html: template::fallback_site_html(&SitePlan::new(NO_CONTENT_PROMPT)),
            warnings: vec![EMPTY_RESPONSE_WARNING.to_string()],
        });
    }

    debug!(model = %response.model, text_len = response.text.len(), "Normalizing backend output");
    Ok(GeneratedSite {
        model: response.model,
        html: html::normalize_document(&response.text),
        warnings: Vec::new(),
    })
}
