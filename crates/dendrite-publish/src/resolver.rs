//! Tree-walk content resolution.
//!
//! Starting from a variant document, the resolver gathers everything the
//! renderers need: the containing page, the sorted reader options with
//! their targets dereferenced, story title and navigation URLs, the author
//! credit (creating the author landing page on first sight), and the
//! visible sibling set for the alternates listing.
//!
//! Lookups that only feed an optional page feature degrade on failure: the
//! error is logged and the feature is omitted. Only the page fetch, the
//! option listing, and the sibling listing are load-bearing enough to abort
//! the render.

use std::sync::Arc;

use dendrite_core::error::PublishError;
use dendrite_core::model::{Author, OptionTarget, Page, Story, StoryOption, Variant};
use dendrite_core::path::DocPath;
use dendrite_core::storage::{FileMetadata, ObjectStore};
use dendrite_core::store::DocumentStore;
use dendrite_render::author::author_page;
use dendrite_render::{
    PageContext, ResolvedOption, ResolvedTarget, VariantSummary, WeightedVariant,
};
use tracing::{instrument, warn};

/// Fully resolved render model for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContent {
    /// Input to the variant-page renderer.
    pub context: PageContext,
    /// Visible siblings, by name order, for the alternates page.
    pub siblings: Vec<VariantSummary>,
    /// Whether any option still links to the authoring form. Open variants
    /// are published with `no-store` since their option list will change.
    pub has_open_option: bool,
}

/// Walks the story tree and assembles [`ResolvedContent`].
pub struct ContentResolver {
    store: Arc<dyn DocumentStore>,
    objects: Arc<dyn ObjectStore>,
    threshold: f64,
}

impl ContentResolver {
    /// Create a resolver over the given stores.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, objects: Arc<dyn ObjectStore>, threshold: f64) -> Self {
        Self {
            store,
            objects,
            threshold,
        }
    }

    /// Resolve the render model for `variant` at `variant_path`.
    ///
    /// Returns `Ok(None)` when the variant has no reachable page document,
    /// which ends the pipeline as a skip.
    ///
    /// # Errors
    ///
    /// Fails when the page fetch, the option listing, or the sibling
    /// listing fails; optional lookups degrade instead.
    #[instrument(skip_all, fields(variant = %variant_path))]
    pub async fn resolve(
        &self,
        variant_path: &DocPath,
        variant: &Variant,
    ) -> Result<Option<ResolvedContent>, PublishError> {
        let Some(page_path) = variant_path.ancestor(2) else {
            warn!(variant = %variant_path, "variant has no containing page");
            return Ok(None);
        };
        let Some(page_doc) = self.store.get(&page_path).await? else {
            warn!(page = %page_path, "page document missing");
            return Ok(None);
        };
        let page: Page = page_doc.decode()?;

        let options = self.resolve_options(variant_path).await?;
        let (story_title, first_page_url) = self.story_metadata(&page_path, &page).await;
        let author_name = variant.display_author().to_string();
        let author_url = self.author_url(variant, &author_name).await;
        let parent_url = self.parent_url(variant).await;
        let siblings = self.visible_siblings(variant_path).await?;

        let has_open_option = options
            .iter()
            .any(|option| matches!(option.target, ResolvedTarget::Open));

        Ok(Some(ResolvedContent {
            context: PageContext {
                page_number: page.number,
                variant_name: variant.name.clone(),
                content: variant.content.clone(),
                options,
                story_title,
                author_name,
                author_url,
                parent_url,
                first_page_url,
                show_title_heading: page.incoming_option.is_none(),
            },
            siblings,
            has_open_option,
        }))
    }

    /// Load, sort, and dereference the variant's options. Target
    /// dereferencing fans out concurrently since each target is an
    /// independent lookup.
    async fn resolve_options(
        &self,
        variant_path: &DocPath,
    ) -> Result<Vec<ResolvedOption>, PublishError> {
        let docs = self
            .store
            .list(&variant_path.collection("options"), None, None)
            .await?;
        let mut options = Vec::with_capacity(docs.len());
        for doc in docs {
            options.push(doc.decode::<StoryOption>()?);
        }
        options.sort_by_key(|option| option.position);

        let resolved =
            futures::future::join_all(options.into_iter().map(|o| self.resolve_option(o))).await;
        Ok(resolved)
    }

    async fn resolve_option(&self, option: StoryOption) -> ResolvedOption {
        let target = match &option.target {
            OptionTarget::Open {} => ResolvedTarget::Open,
            OptionTarget::Number { target_page_number } => ResolvedTarget::Fixed {
                page_number: *target_page_number,
                variant_name: None,
            },
            OptionTarget::Page { target_page } => self.resolve_target_page(target_page).await,
        };
        ResolvedOption {
            content: option.content,
            position: option.position,
            target,
        }
    }

    async fn resolve_target_page(&self, target_page: &DocPath) -> ResolvedTarget {
        match self.target_page_metadata(target_page).await {
            Ok(Some(target)) => target,
            Ok(None) => ResolvedTarget::Open,
            Err(error) => {
                warn!(target = %target_page, error = %error, "target page lookup failed");
                ResolvedTarget::Open
            }
        }
    }

    /// Dereference a live target page: its number, plus every visible
    /// variant reinterpreted as a weighted candidate for client-side
    /// selection.
    async fn target_page_metadata(
        &self,
        target_page: &DocPath,
    ) -> Result<Option<ResolvedTarget>, PublishError> {
        let Some(doc) = self.store.get(target_page).await? else {
            return Ok(None);
        };
        let page: Page = doc.decode()?;

        let variants = self
            .store
            .list(&target_page.collection("variants"), Some("name"), None)
            .await?;
        let mut candidates = Vec::new();
        for doc in variants {
            let variant: Variant = doc.decode()?;
            if variant.is_visible(self.threshold) {
                candidates.push(WeightedVariant {
                    weight: variant.visibility.unwrap_or(1.0),
                    name: variant.name,
                });
            }
        }

        if candidates.is_empty() {
            return Ok(Some(ResolvedTarget::Fixed {
                page_number: page.number,
                variant_name: None,
            }));
        }
        let default_variant = candidates[0].name.clone();
        Ok(Some(ResolvedTarget::Weighted {
            page_number: page.number,
            default_variant,
            candidates,
        }))
    }

    /// Story title plus the first-page link. The link only renders off the
    /// root page, pointing at the root page's first variant by name order.
    async fn story_metadata(&self, page_path: &DocPath, page: &Page) -> (String, Option<String>) {
        let Some(story_path) = page_path.ancestor(2) else {
            return (String::new(), None);
        };
        let story = match self.fetch_story(&story_path).await {
            Ok(Some(story)) => story,
            Ok(None) => return (String::new(), None),
            Err(error) => {
                warn!(story = %story_path, error = %error, "story lookup failed");
                return (String::new(), None);
            }
        };

        let first_page_url = match (&page.incoming_option, &story.root_page) {
            (Some(_), Some(root_page)) => self.first_page_url(root_page).await,
            _ => None,
        };
        (story.title, first_page_url)
    }

    async fn fetch_story(&self, story_path: &DocPath) -> Result<Option<Story>, PublishError> {
        match self.store.get(story_path).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    async fn first_page_url(&self, root_page: &DocPath) -> Option<String> {
        match self.root_page_url(root_page).await {
            Ok(url) => url,
            Err(error) => {
                warn!(root = %root_page, error = %error, "root page lookup failed");
                None
            }
        }
    }

    async fn root_page_url(&self, root_page: &DocPath) -> Result<Option<String>, PublishError> {
        let Some(doc) = self.store.get(root_page).await? else {
            return Ok(None);
        };
        let page: Page = doc.decode()?;

        let variants = self
            .store
            .list(&root_page.collection("variants"), Some("name"), Some(1))
            .await?;
        let Some(first) = variants.first() else {
            return Ok(None);
        };
        let variant: Variant = first.decode()?;
        Ok(Some(format!("/p/{}{}.html", page.number, variant.name)))
    }

    /// Resolve the author credit link, writing the landing page the first
    /// time this author is seen. The landing page is create-if-absent and
    /// never overwritten.
    async fn author_url(&self, variant: &Variant, author_name: &str) -> Option<String> {
        let author_id = variant.author_id.as_deref().filter(|id| !id.is_empty())?;
        if author_name.is_empty() {
            warn!(author_id, "variant has no author display name");
            return None;
        }
        match self.ensure_author_page(author_id, author_name).await {
            Ok(url) => url,
            Err(error) => {
                warn!(author_id, error = %error, "author lookup failed");
                None
            }
        }
    }

    async fn ensure_author_page(
        &self,
        author_id: &str,
        author_name: &str,
    ) -> Result<Option<String>, PublishError> {
        let author_doc_path = DocPath::new(format!("authors/{author_id}"));
        let Some(doc) = self.store.get(&author_doc_path).await? else {
            return Ok(None);
        };
        let author: Author = doc.decode()?;
        let Some(uuid) = author.uuid.filter(|uuid| !uuid.is_empty()) else {
            warn!(author_id, "author document has no uuid");
            return Ok(None);
        };

        let landing_path = format!("a/{uuid}.html");
        if !self.objects.exists(&landing_path).await? {
            self.objects
                .write(&landing_path, &author_page(author_name), &FileMetadata::html())
                .await?;
        }
        Ok(Some(format!("/{landing_path}")))
    }

    /// URL of the variant the reader came from, derived from the incoming
    /// option's ancestors. Both parent documents are fetched concurrently.
    async fn parent_url(&self, variant: &Variant) -> Option<String> {
        let option_path = variant.incoming_option.as_ref()?;
        let parent_variant_path = option_path.ancestor(2)?;
        let parent_page_path = option_path.ancestor(4)?;

        match self
            .parent_route(&parent_variant_path, &parent_page_path)
            .await
        {
            Ok(route) => route,
            Err(error) => {
                warn!(option = %option_path, error = %error, "parent lookup failed");
                None
            }
        }
    }

    async fn parent_route(
        &self,
        variant_path: &DocPath,
        page_path: &DocPath,
    ) -> Result<Option<String>, PublishError> {
        let (variant_doc, page_doc) =
            tokio::join!(self.store.get(variant_path), self.store.get(page_path));
        let (Some(variant_doc), Some(page_doc)) = (variant_doc?, page_doc?) else {
            return Ok(None);
        };

        let parent: Variant = variant_doc.decode()?;
        let page: Page = page_doc.decode()?;
        if parent.name.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!("/p/{}{}.html", page.number, parent.name)))
    }

    /// The current visible sibling set, recomputed live so the alternates
    /// page never serves a cached roster.
    async fn visible_siblings(
        &self,
        variant_path: &DocPath,
    ) -> Result<Vec<VariantSummary>, PublishError> {
        let Some(collection) = variant_path.parent() else {
            return Ok(Vec::new());
        };
        let docs = self.store.list(&collection, Some("name"), None).await?;

        let mut siblings = Vec::new();
        for doc in docs {
            let sibling: Variant = doc.decode()?;
            if sibling.is_visible(self.threshold) {
                siblings.push(VariantSummary {
                    name: sibling.name,
                    content: sibling.content,
                });
            }
        }
        Ok(siblings)
    }
}
