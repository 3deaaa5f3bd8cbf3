//! Normalization of model output into a complete HTML document.

use once_cell::sync::Lazy;
use regex::Regex;

/// First fenced code block, optionally tagged `html`.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)```(?:html)?\s*(.*?)```").expect("valid fence pattern"));

/// Normalizes backend text into a complete HTML document.
///
/// When the text contains a fenced code block, only the first block's
/// contents are kept. The result is trimmed; if it already carries a
/// doctype or an `<html` opening tag it is used verbatim, otherwise it
/// becomes the body of the minimal skeleton.
pub fn normalize_document(text: &str) -> String {
    let raw = FENCE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);
    let trimmed = raw.trim();

    if has_document_markers(trimmed) {
        trimmed.to_string()
    } else {
        wrap_html(trimmed)
    }
}

fn has_document_markers(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("<!doctype html") || lower.contains("<html")
}

/// Wraps bare markup in the minimal document skeleton.
pub(crate) fn wrap_html(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Generated Website</title>
    <style>
      * {{ box-sizing: border-box; }}
      body {{ margin: 0; font-family: 'Inter', Arial, sans-serif; color: #1f2937; background: #f8fafc; }}
      a {{ color: inherit; }}
    </style>
  </head>
  <body>
    {content}
  </body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_fenced_block() {
        let text = "Here is your site:\n```html\n<section>Hello</section>\n```\nEnjoy!";
        let html = normalize_document(text);
        assert!(html.contains("<section>Hello</section>"));
        assert!(!html.contains("```"));
        assert!(!html.contains("Enjoy!"));
    }

    #[test]
    fn fence_tag_is_optional_and_case_insensitive() {
        let plain = normalize_document("```\n<p>a</p>\n```");
        assert!(plain.contains("<p>a</p>"));

        let upper = normalize_document("```HTML\n<p>b</p>\n```");
        assert!(upper.contains("<p>b</p>"));
        assert!(!upper.contains("HTML\n"));
    }

    #[test]
    fn fenced_full_document_is_kept_verbatim() {
        let document = "<!DOCTYPE html>\n<html><body>ok</body></html>";
        let text = format!("```html\n{document}\n```");
        assert_eq!(normalize_document(&text), document);
    }

    #[test]
    fn complete_documents_pass_through_unwrapped() {
        let document = "<!doctype html>\n<html><body>hi</body></html>";
        assert_eq!(normalize_document(document), document);

        let spaced = format!("\n\n{document}\n");
        assert_eq!(normalize_document(&spaced), document);

        // No double-wrapping on a bare <html> tag either.
        let bare = "<HTML><body>hi</body></HTML>";
        assert_eq!(normalize_document(bare), bare);
    }

    #[test]
    fn bare_markup_is_wrapped_in_the_skeleton() {
        let html = normalize_document("  <h1>Title</h1>  ");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains("<title>Generated Website</title>"));
        assert!(html.contains("    <h1>Title</h1>\n"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
