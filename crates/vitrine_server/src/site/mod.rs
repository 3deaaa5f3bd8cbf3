//! Site generation and publishing procedures.
//!
//! Two independent flows. Generation compiles a prompt from the
//! structured plan, asks the backend for a document (or renders the
//! fallback template), and normalizes the result into a complete HTML
//! page. Publishing names the deployment, assembles the two-file
//! manifest, and submits it to the deployment host.

mod generation;
mod html;
mod prompt;
mod publishing;
mod template;

pub use generation::{FALLBACK_MODEL, generate_site};
pub use html::normalize_document;
pub use prompt::compile_prompt;
pub use publishing::{build_order, publish_site};
pub use template::fallback_site_html;
