//! Vercel-specific error types.

/// Vercel-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VercelErrorKind {
    /// Request could not be sent
    ApiRequest(String),
    /// HTTP error with status code and raw response body
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        message: String,
    },
    /// Response body could not be decoded
    ResponseParsing(String),
}

impl std::fmt::Display for VercelErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VercelErrorKind::ApiRequest(msg) => write!(f, "Vercel API request failed: {}", msg),
            VercelErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "Vercel API {}: {}", status_code, message),
            VercelErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse Vercel response: {}", msg)
            }
        }
    }
}

/// Vercel error with source location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VercelError, VercelErrorKind};
///
/// let err = VercelError::new(VercelErrorKind::HttpError {
///     status_code: 402,
///     message: "payment required".to_string(),
/// });
/// assert!(format!("{}", err).contains("402"));
/// ```
#[derive(Debug, Clone)]
pub struct VercelError {
    /// The kind of error that occurred
    pub kind: VercelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl VercelError {
    /// Create a new VercelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VercelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for VercelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vercel Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for VercelError {}
