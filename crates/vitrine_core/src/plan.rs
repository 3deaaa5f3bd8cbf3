//! The structured brief a site is generated from.

use serde::{Deserialize, Serialize};

/// Structured inputs for a single site generation.
///
/// The free-text `prompt` is the only required field; callers that omit
/// it are rejected before any backend work happens. The optional lists
/// keep their caller-supplied order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SitePlan {
    /// Free-text instructions for the page.
    pub prompt: String,
    /// Display name inserted into headers and deployment names.
    pub company_name: Option<String>,
    /// Ordered navigation labels.
    pub menu: Option<Vec<String>>,
    /// Ordered layout-section identifiers.
    pub layout: Option<Vec<String>>,
    /// Ordered preferred color strings.
    pub palette: Option<Vec<String>>,
}

impl SitePlan {
    /// Creates a plan carrying only the free-text prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}
