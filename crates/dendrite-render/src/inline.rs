//! Minimal inline-markdown pass.
//!
//! Escapes first, then wraps bold spans (`**` / `__`), then italic spans
//! (`*` / `_`). Running bold first means its delimiters are consumed before
//! the italic pass ever sees them, so a bold span is never double-wrapped.

use crate::escape::escape_html;

/// Escape `text` and apply the inline emphasis markers.
#[must_use]
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = wrap_pairs(&escaped, &["**", "__"], "strong");
    wrap_pairs(&bold, &["*", "_"], "em")
}

/// Replace each balanced, non-greedy pair of any marker in `markers` with
/// `<tag>…</tag>`. An unpaired marker is emitted verbatim and scanning
/// continues after it.
fn wrap_pairs(text: &str, markers: &[&str], tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((start, marker)) = find_first_marker(rest, markers) {
        let after_open = start + marker.len();
        if let Some(close) = rest[after_open..].find(marker) {
            out.push_str(&rest[..start]);
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push_str(&rest[after_open..after_open + close]);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            rest = &rest[after_open + close + marker.len()..];
        } else {
            out.push_str(&rest[..after_open]);
            rest = &rest[after_open..];
        }
    }
    out.push_str(rest);
    out
}

/// Leftmost occurrence of any marker.
fn find_first_marker<'m>(text: &str, markers: &[&'m str]) -> Option<(usize, &'m str)> {
    markers
        .iter()
        .filter_map(|m| text.find(m).map(|i| (i, *m)))
        .min_by_key(|(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_with_asterisks_and_underscores() {
        assert_eq!(render_inline("a **b** c"), "a <strong>b</strong> c");
        assert_eq!(render_inline("a __b__ c"), "a <strong>b</strong> c");
    }

    #[test]
    fn test_italic_with_asterisk_and_underscore() {
        assert_eq!(render_inline("a *b* c"), "a <em>b</em> c");
        assert_eq!(render_inline("a _b_ c"), "a <em>b</em> c");
    }

    #[test]
    fn test_bold_is_matched_before_italic() {
        assert_eq!(
            render_inline("**bold** and *slanted*"),
            "<strong>bold</strong> and <em>slanted</em>"
        );
    }

    #[test]
    fn test_underscore_bold_span_is_not_italicized() {
        assert_eq!(render_inline("__b__"), "<strong>b</strong>");
    }

    #[test]
    fn test_unpaired_marker_is_left_verbatim() {
        assert_eq!(render_inline("2 * 3 is 6"), "2 * 3 is 6");
    }

    #[test]
    fn test_escaping_happens_before_emphasis() {
        assert_eq!(
            render_inline("*<b>*"),
            "<em>&lt;b&gt;</em>"
        );
    }

    #[test]
    fn test_multiple_pairs_in_one_line() {
        assert_eq!(
            render_inline("*a* then *b*"),
            "<em>a</em> then <em>b</em>"
        );
    }
}
