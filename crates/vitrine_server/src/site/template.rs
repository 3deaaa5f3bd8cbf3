//! Deterministic fallback template.
//!
//! Used whenever no generation credential is configured or the backend
//! returns no usable content. Everything user-supplied is escaped
//! before insertion.

use vitrine_core::{SitePlan, escape_html};

/// Company name used when the plan has none.
const DEFAULT_COMPANY_NAME: &str = "AI Website";

/// Navigation labels used when the plan has none.
const DEFAULT_MENU: [&str; 3] = ["Home", "About", "Contact"];

/// Primary/accent colors used when the plan has no palette.
const DEFAULT_PRIMARY: &str = "#2563eb";
const DEFAULT_ACCENT: &str = "#f97316";

/// Renders the complete fallback document for a plan.
///
/// The first two palette entries become the `--primary` and `--accent`
/// CSS custom properties; a missing second color falls back to the
/// first, and a missing palette falls back to the fixed defaults.
pub fn fallback_site_html(plan: &SitePlan) -> String {
    let menu_items: Vec<String> = match plan.menu.as_deref().filter(|m| !m.is_empty()) {
        Some(items) => items.iter().map(|i| i.as_str()).map(nav_link).collect(),
        None => DEFAULT_MENU.iter().copied().map(nav_link).collect(),
    };
    let menu = menu_items.join("");

    let (primary, accent) = match plan.palette.as_deref().unwrap_or(&[]) {
        [] => (DEFAULT_PRIMARY, DEFAULT_ACCENT),
        [only] => (only.as_str(), only.as_str()),
        [first, second, ..] => (first.as_str(), second.as_str()),
    };

    let safe_primary = escape_html(primary);
    let safe_accent = escape_html(accent);
    let safe_prompt = escape_html(&plan.prompt);
    let safe_name = escape_html(plan.company_name.as_deref().unwrap_or(DEFAULT_COMPANY_NAME));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{safe_name}</title>
    <style>
      :root {{ --primary: {safe_primary}; --accent: {safe_accent}; }}
      * {{ box-sizing: border-box; }}
      body {{ font-family: 'Inter', Arial, sans-serif; margin: 0; padding: 0; background: #f8fafc; color: #1f2937; }}
      header {{ background: var(--primary); color: white; padding: 48px 24px; }}
      nav {{ display: flex; gap: 16px; justify-content: center; margin-top: 16px; }}
      nav a {{ color: white; text-decoration: none; font-weight: 500; }}
      main {{ padding: 48px 24px; max-width: 960px; margin: 0 auto; }}
      .card {{ background: white; border-radius: 24px; padding: 32px; box-shadow: 0 20px 45px rgba(15, 23, 42, 0.08); margin-bottom: 32px; }}
      footer {{ background: #0f172a; color: white; padding: 32px 24px; text-align: center; }}
    </style>
  </head>
  <body>
    <header>
      <h1>{safe_name}</h1>
      <p>{safe_prompt}</p>
      <nav>{menu}</nav>
    </header>
    <main>
      <div class="card">
        <h2>Website generator is not fully configured</h2>
        <p>Add your <strong>GEMINI_API_KEY</strong> to enable live AI output.</p>
        <p>The site prompt was:</p>
        <pre style="white-space: pre-wrap; background: #f1f5f9; padding: 16px; border-radius: 16px;">{safe_prompt}</pre>
      </div>
    </main>
    <footer>Powered by Vitrine</footer>
  </body>
</html>"#
    )
}

fn nav_link(label: &str) -> String {
    format!(r##"<a href="#">{}</a>"##, escape_html(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_appear_as_custom_properties() {
        let html = fallback_site_html(&SitePlan::new("Make a bakery site"));
        assert!(html.contains("--primary: #2563eb;"));
        assert!(html.contains("--accent: #f97316;"));
    }

    #[test]
    fn single_palette_entry_reuses_primary_as_accent() {
        let plan = SitePlan {
            prompt: "p".to_string(),
            palette: Some(vec!["#112233".to_string()]),
            ..SitePlan::default()
        };
        let html = fallback_site_html(&plan);
        assert!(html.contains("--primary: #112233;"));
        assert!(html.contains("--accent: #112233;"));
    }

    #[test]
    fn company_name_markup_is_escaped() {
        let plan = SitePlan {
            prompt: "p".to_string(),
            company_name: Some("<script>alert('x')</script>".to_string()),
            ..SitePlan::default()
        };
        let html = fallback_site_html(&plan);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn default_menu_renders_three_links() {
        let html = fallback_site_html(&SitePlan::new("p"));
        for label in ["Home", "About", "Contact"] {
            assert!(html.contains(&format!(r##"<a href="#">{label}</a>"##)));
        }
    }

    #[test]
    fn custom_menu_replaces_defaults_and_is_escaped() {
        let plan = SitePlan {
            prompt: "p".to_string(),
            menu: Some(vec!["Shop & Save".to_string()]),
            ..SitePlan::default()
        };
        let html = fallback_site_html(&plan);
        assert!(html.contains(r##"<a href="#">Shop &amp; Save</a>"##));
        assert!(!html.contains(r##"<a href="#">About</a>"##));
    }

    #[test]
    fn notice_names_the_missing_credential() {
        let html = fallback_site_html(&SitePlan::new("p"));
        assert!(html.contains("GEMINI_API_KEY"));
        assert!(html.contains("not fully configured"));
    }
}
