//! Site publishing orchestration.

use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;
use vitrine_core::{DeploymentOrder, DeploymentRecord, SiteFile, slugify};
use vitrine_error::VitrineResult;
use vitrine_interface::DeploymentHost;

/// Name source used when the caller supplied no company name.
const DEFAULT_NAME_SOURCE: &str = "promo-site";

/// Length of the random collision suffix.
const SUFFIX_LEN: usize = 6;

/// Derives a deployment name: company-name slug plus a short random
/// suffix so repeated deployments of the same company never collide.
pub fn deployment_name(company_name: Option<&str>) -> String {
    let source = company_name.unwrap_or(DEFAULT_NAME_SOURCE);
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SUFFIX_LEN)
        .collect();
    format!("{}-{}", slugify(source), suffix)
}

/// Renders the host-routing manifest: every path rewrites to the
/// single generated page.
fn routing_manifest() -> String {
    let manifest = json!({
        "rewrites": [
            { "source": "/(.*)", "destination": "/index.html" }
        ]
    });
    serde_json::to_string_pretty(&manifest).expect("serializable manifest")
}

/// Assembles the deployment order: the HTML document as `index.html`
/// plus the generated `vercel.json` routing manifest.
pub fn build_order(
    html: &str,
    company_name: Option<&str>,
    source_prompt: Option<&str>,
) -> DeploymentOrder {
    DeploymentOrder {
        name: deployment_name(company_name),
        files: vec![
            SiteFile::new("index.html", html),
            SiteFile::new("vercel.json", routing_manifest()),
        ],
        source_prompt: source_prompt.map(str::to_string),
    }
}

/// Publishes a finished document through the deployment host.
#[instrument(skip_all, fields(html_len = html.len()))]
pub async fn publish_site(
    html: &str,
    company_name: Option<&str>,
    source_prompt: Option<&str>,
    host: &dyn DeploymentHost,
) -> VitrineResult<DeploymentRecord> {
    let order = build_order(html, company_name, source_prompt);
    info!(name = %order.name, files = order.files.len(), "Publishing site");
    host.deploy(&order).await
}
