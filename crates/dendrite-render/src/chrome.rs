//! Shared page chrome: document head and site header.

use crate::escape::escape_html;

pub(crate) const SITE_NAME: &str = "Dendrite";

/// `<head>` element with the shared stylesheet links.
pub(crate) fn head(title: &str) -> String {
    format!(
        r#"  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <link rel="icon" href="/favicon.ico" />
    <link
      rel="stylesheet"
      href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.fluid.classless.min.css"
    />
    <link rel="stylesheet" href="/dendrite.css" />
  </head>"#
    )
}

/// Document title: `Dendrite - {story}` when a story title exists.
pub(crate) fn head_title(story_title: &str) -> String {
    if story_title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{SITE_NAME} - {}", escape_html(story_title))
    }
}

/// Site header with brand and primary navigation.
pub(crate) const HEADER: &str = r#"    <header class="site-header">
      <a class="brand" href="/">
        <img src="/img/logo.png" alt="Dendrite logo" />
        Dendrite
      </a>
      <nav class="nav-inline" aria-label="Primary">
        <a href="/new-story.html">New story</a>
        <a href="/about.html">About</a>
      </nav>
    </header>"#;
