//! Resolved content consumed by the renderers.

/// A reader choice after target resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOption {
    /// Choice text.
    pub content: String,
    /// Sort key, also part of the option slug.
    pub position: i64,
    /// Where the choice leads.
    pub target: ResolvedTarget,
}

/// Destination of a resolved option.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget {
    /// No destination yet: the anchor links to the authoring form.
    Open,
    /// A fixed page number; `variant_name` is set when the target page had
    /// no visible variants but its number is still known.
    Fixed {
        /// Destination page number.
        page_number: i64,
        /// Variant suffix appended to the route, when known.
        variant_name: Option<String>,
    },
    /// A live target with one or more visible variants to choose between.
    Weighted {
        /// Destination page number.
        page_number: i64,
        /// Default variant (first visible, by name order) used as the
        /// static href.
        default_variant: String,
        /// All visible variants with their selection weights.
        candidates: Vec<WeightedVariant>,
    },
}

/// One candidate in a weighted choice; weight is the variant's visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVariant {
    /// Variant name.
    pub name: String,
    /// Selection weight.
    pub weight: f64,
}

/// A sibling variant listed on the alternates page.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSummary {
    /// Variant name.
    pub name: String,
    /// Full content; the listing shows a five-word preview.
    pub content: String,
}

/// Everything the variant-page renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Page number of the variant being rendered.
    pub page_number: i64,
    /// Name of the variant being rendered.
    pub variant_name: String,
    /// Narrative body text.
    pub content: String,
    /// Reader choices, already sorted by position.
    pub options: Vec<ResolvedOption>,
    /// Story title; empty when the story could not be loaded.
    pub story_title: String,
    /// Author display name; empty hides the credit.
    pub author_name: String,
    /// Link to the author landing page.
    pub author_url: Option<String>,
    /// Link back to the parent variant.
    pub parent_url: Option<String>,
    /// Link to the story's first page (only set off the root).
    pub first_page_url: Option<String>,
    /// Whether to render the story title as an `<h1>`. Suppressed for
    /// non-root pages, which reuse the root's heading context.
    pub show_title_heading: bool,
}
