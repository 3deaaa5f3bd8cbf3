//! Provider integrations for Vitrine.
//!
//! One module per upstream service: `gemini` wraps the generative-text
//! `generateContent` endpoint, `vercel` wraps the v13 deployments
//! endpoint. Both expose a thin reqwest client behind the trait seams
//! defined in `vitrine_interface`.

pub mod gemini;
pub mod vercel;

pub use gemini::GeminiClient;
pub use vercel::VercelClient;
