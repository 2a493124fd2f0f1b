//! The author landing page renderer.

use crate::chrome::SITE_NAME;
use crate::escape::escape_html;

/// Render the one-time author landing page. Written create-if-absent and
/// never overwritten, so it deliberately carries no mutable content.
#[must_use]
pub fn author_page(author_name: &str) -> String {
    let name = escape_html(author_name);
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"UTF-8\" />\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\
         <title>{SITE_NAME} - {name}</title><link rel=\"icon\" href=\"/favicon.ico\" />\
         <link rel=\"stylesheet\" href=\"/dendrite.css\" /></head>\
         <body><main><h1>{name}</h1></main></body></html>"
    )
}
