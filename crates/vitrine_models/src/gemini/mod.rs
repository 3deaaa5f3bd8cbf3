//! Gemini `generateContent` client.
//!
//! The wire shape is modeled explicitly (candidates containing ordered
//! text parts, every level optional) so unexpected response shapes
//! default instead of panicking on missing fields.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
