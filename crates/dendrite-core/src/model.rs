//! Typed document model for stories, pages, variants, options, and authors.
//!
//! Field names mirror the stored document shape (camelCase); every type is
//! lenient about missing fields so that a partially written document never
//! aborts a render.

use serde::{Deserialize, Serialize};

use crate::path::DocPath;

/// Root document of a story tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Story title shown in headings and document titles.
    #[serde(default)]
    pub title: String,
    /// Reference to the story's root page, when one has been created.
    #[serde(default)]
    pub root_page: Option<DocPath>,
}

/// A page groups one or more variants of the same narrative beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Position of the page in the reading order.
    pub number: i64,
    /// Back-reference to the option that led here; `None` for the root page.
    #[serde(default)]
    pub incoming_option: Option<DocPath>,
}

/// One authored alternative of a page's text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Single-letter-style variant identifier, appended to the page number
    /// in routes (`/p/5a.html`).
    #[serde(default)]
    pub name: String,
    /// Narrative body text; newlines separate paragraphs.
    #[serde(default)]
    pub content: String,
    /// Legacy author display name, superseded by `author_name`.
    #[serde(default)]
    pub author: Option<String>,
    /// Identifier of the author document under `authors/`.
    #[serde(default)]
    pub author_id: Option<String>,
    /// Author display name.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Continuous moderation score in `[0, 1]` gating publication.
    #[serde(default)]
    pub visibility: Option<f64>,
    /// Back-reference to the option this variant was written for; `None`
    /// for root-page variants.
    #[serde(default)]
    pub incoming_option: Option<DocPath>,
    /// Transient marker requesting a forced re-render.
    #[serde(default)]
    pub dirty: bool,
}

impl Variant {
    /// Display name for the author credit: `authorName` first, then the
    /// legacy `author` field. Empty when neither carries text.
    #[must_use]
    pub fn display_author(&self) -> &str {
        [&self.author_name, &self.author]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or("")
    }

    /// Whether this variant is publicly served. An unset visibility counts
    /// as fully visible.
    #[must_use]
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility.unwrap_or(1.0) >= threshold
    }
}

/// Where a reader choice leads.
///
/// Stored documents carry at most one of `targetPage` / `targetPageNumber`;
/// collapsing them into one enum rules out the state where both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionTarget {
    /// A live reference to the destination page document.
    #[serde(rename_all = "camelCase")]
    Page {
        /// Path of the destination page.
        target_page: DocPath,
    },
    /// A fixed destination page number with no live reference.
    #[serde(rename_all = "camelCase")]
    Number {
        /// Destination page number.
        target_page_number: i64,
    },
    /// Unresolved: the option links to the authoring form.
    Open {},
}

impl Default for OptionTarget {
    fn default() -> Self {
        Self::Open {}
    }
}

/// A reader choice attached to a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryOption {
    /// Choice text, rendered with the inline-markdown pass.
    #[serde(default)]
    pub content: String,
    /// Sort key; options render in ascending position order.
    #[serde(default)]
    pub position: i64,
    /// Destination of the choice.
    #[serde(flatten)]
    pub target: OptionTarget,
}

/// An author document, looked up by the variant's `authorId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Stable public identifier keying the author landing page.
    #[serde(default)]
    pub uuid: Option<String>,
}
