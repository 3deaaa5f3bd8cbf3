//! Error types for the Vitrine website generation service.
//!
//! Each upstream or subsystem gets its own error family with a kind enum
//! and source-location tracking; `VitrineError` aggregates them for
//! callers that cross family boundaries.

mod config;
mod gemini;
mod vercel;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use vercel::{VercelError, VercelErrorKind};

/// Aggregate error for operations that can fail in more than one family.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum VitrineError {
    /// Generation backend failure.
    #[display("{}", _0)]
    Gemini(GeminiError),
    /// Deployment provider failure.
    #[display("{}", _0)]
    Vercel(VercelError),
    /// Missing or invalid configuration.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VitrineError::Gemini(e) => Some(e),
            VitrineError::Vercel(e) => Some(e),
            VitrineError::Config(e) => Some(e),
        }
    }
}

/// Result alias used across the Vitrine crates.
pub type VitrineResult<T> = Result<T, VitrineError>;
