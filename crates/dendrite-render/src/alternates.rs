//! The alternates ("other variants") page renderer.

use crate::chrome;
use crate::escape::escape_html;
use crate::model::VariantSummary;

/// Render the sibling listing for a page. Each visible sibling gets a link
/// with a five-word content preview.
#[must_use]
pub fn alternates_page(page_number: i64, variants: &[VariantSummary]) -> String {
    let items: String = variants
        .iter()
        .map(|variant| {
            let preview: String = variant
                .content
                .split_whitespace()
                .take(5)
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "<li><a href=\"/p/{page_number}{}.html\">{}</a></li>",
                variant.name,
                escape_html(&preview)
            )
        })
        .collect();

    format!(
        "<!doctype html>\n<html lang=\"en\">\n{head}\n  <body>\n{header}\n    <main><ol>{items}</ol></main>\n  </body>\n</html>",
        head = chrome::head(chrome::SITE_NAME),
        header = chrome::HEADER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_gets_a_five_word_preview_link() {
        let variants = vec![
            VariantSummary {
                name: "a".into(),
                content: "one two three four five six seven".into(),
            },
            VariantSummary {
                name: "b".into(),
                content: "short".into(),
            },
        ];

        let html = alternates_page(3, &variants);

        assert!(html.contains("<li><a href=\"/p/3a.html\">one two three four five</a></li>"));
        assert!(html.contains("<li><a href=\"/p/3b.html\">short</a></li>"));
    }

    #[test]
    fn test_preview_is_escaped() {
        let variants = vec![VariantSummary {
            name: "a".into(),
            content: "<script> & more words here".into(),
        }];

        let html = alternates_page(1, &variants);

        assert!(html.contains("&lt;script&gt; &amp; more words here"));
        assert!(!html.contains("<li><a href=\"/p/1a.html\"><script>"));
    }

    #[test]
    fn test_empty_sibling_set_renders_empty_list() {
        let html = alternates_page(2, &[]);
        assert!(html.contains("<main><ol></ol></main>"));
    }
}
