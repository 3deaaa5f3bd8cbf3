//! URL-safe slugs for deployment names.

/// Maximum slug length accepted by the deployment provider naming rules.
const MAX_SLUG_LEN: usize = 48;

/// Used when the input has no usable characters at all.
const DEFAULT_SLUG: &str = "site";

/// Derives a URL-safe slug from a display name.
///
/// Lowercases the input, collapses every run of characters outside
/// `a-z0-9` into a single hyphen, strips leading/trailing hyphens, and
/// truncates to 48 characters. An empty result becomes `"site"`.
///
/// # Examples
///
/// ```
/// use vitrine_core::slugify;
///
/// assert_eq!(slugify("Flour & Co"), "flour-co");
/// assert_eq!(slugify("!!!"), "site");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug.truncate(MAX_SLUG_LEN);
    // Truncation can land on a hyphen boundary.
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_symbol_runs_to_single_hyphens() {
        assert_eq!(slugify("Joe's Café & Grill!!"), "joe-s-caf-grill");
        assert_eq!(slugify("A  --  B"), "a-b");
    }

    #[test]
    fn strips_leading_and_trailing_hyphens() {
        assert_eq!(slugify("  hello world  "), "hello-world");
        assert_eq!(slugify("--already-dashed--"), "already-dashed");
    }

    #[test]
    fn empty_and_all_symbol_inputs_use_default() {
        assert_eq!(slugify(""), "site");
        assert_eq!(slugify("!!!&&&***"), "site");
        assert_eq!(slugify("日本語"), "site");
    }

    #[test]
    fn truncates_to_48_characters() {
        let long = "x".repeat(100);
        let slug = slugify(&long);
        assert_eq!(slug.len(), 48);

        // A hyphen landing exactly on the cut is stripped.
        let spaced = "ab ".repeat(20);
        let slug = slugify(&spaced);
        assert!(slug.len() <= 48);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn output_is_always_url_safe() {
        for input in ["Joe's Café & Grill!!", "UPPER case", "a_b.c/d", "123"] {
            let slug = slugify(input);
            assert!(!slug.is_empty() && slug.len() <= 48);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad slug {:?} for {:?}",
                slug,
                input
            );
        }
    }
}
