//! HTTP request bodies.
//!
//! Bodies are parsed leniently: optional fields keep their raw JSON
//! shape and are only used when they have the expected type, so a
//! wrong-typed `menu` never fails the whole request. Only the required
//! field gates a 400.

use serde::Deserialize;
use serde_json::Value;
use vitrine_core::SitePlan;

/// Body of `POST /api/website/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateSiteBody {
    /// Free-text prompt. Required; must be a non-empty string.
    pub prompt: Option<Value>,
    /// Optional company display name.
    pub company_name: Option<Value>,
    /// Optional ordered navigation labels.
    pub menu: Option<Value>,
    /// Optional ordered layout-section identifiers.
    pub layout_parts: Option<Value>,
    /// Optional ordered color strings.
    pub palette: Option<Value>,
}

impl GenerateSiteBody {
    /// Validates the body into a [`SitePlan`].
    ///
    /// Returns `None` when the prompt is missing, not a string, or
    /// empty — the caller maps that to a 400 before any backend work.
    pub fn into_plan(self) -> Option<SitePlan> {
        let prompt = as_nonempty_string(self.prompt.as_ref())?;

        Some(SitePlan {
            prompt,
            company_name: as_nonempty_string(self.company_name.as_ref()),
            menu: as_string_list(self.menu.as_ref()),
            layout: as_string_list(self.layout_parts.as_ref()),
            palette: as_string_list(self.palette.as_ref()),
        })
    }
}

/// Body of `POST /api/website/deploy`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploySiteBody {
    /// Finished HTML document. Required; must be a non-empty string.
    pub html: Option<Value>,
    /// Optional company display name, used for deployment naming.
    pub company_name: Option<Value>,
    /// Optional original prompt, attached as deployment metadata.
    pub prompt: Option<Value>,
}

impl DeploySiteBody {
    /// Returns the HTML document when it is a non-empty string.
    pub fn html(&self) -> Option<String> {
        as_nonempty_string(self.html.as_ref())
    }

    /// Returns the company name when it is a non-empty string.
    pub fn company_name(&self) -> Option<String> {
        as_nonempty_string(self.company_name.as_ref())
    }

    /// Returns the source prompt when it is a non-empty string.
    pub fn prompt(&self) -> Option<String> {
        as_nonempty_string(self.prompt.as_ref())
    }
}

fn as_nonempty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Accepts a JSON array, keeping only its string elements.
fn as_string_list(value: Option<&Value>) -> Option<Vec<String>> {
    value.and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}
