//! Configuration for the mention pipeline.

use crate::error::MentionError;
use crate::renderer::{LinkRenderer, RenderFn};
use crate::title::{TitleFn, TitleResolver};

pub const DEFAULT_URL: &str = "https://github.com";

/// Options for [`to_mention`](crate::to_mention). Defaults: markdown links
/// pointing at `https://github.com`, no titles.
///
/// ```
/// use mention_links::MentionOptions;
///
/// let options = MentionOptions::new()
///     .url("https://twitter.com")
///     .title("Assemble maintainers");
/// ```
#[derive(Debug)]
pub struct MentionOptions {
    pub url: String,
    pub title: TitleResolver,
    pub renderer: LinkRenderer,
}

impl Default for MentionOptions {
    fn default() -> Self {
        MentionOptions {
            url: DEFAULT_URL.to_string(),
            title: TitleResolver::None,
            renderer: LinkRenderer::Markdown,
        }
    }
}

impl MentionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the link-prefix base URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Attaches the same title to every mention link.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = TitleResolver::Fixed(title.into());
        self
    }

    /// Resolves titles per mention; the function receives the bare name and
    /// returns `None` to render that link without a title.
    pub fn title_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.title = TitleResolver::Lookup(Box::new(f) as TitleFn);
        self
    }

    /// Selects a built-in renderer by name (`"md"` or `"html"`). Fails on an
    /// unknown name, before any text is scanned.
    pub fn renderer(mut self, name: &str) -> Result<Self, MentionError> {
        self.renderer = LinkRenderer::from_name(name)?;
        Ok(self)
    }

    /// Installs a custom renderer, bypassing the built-in formats. The
    /// function receives the mention text (with `@` prefix), the link target,
    /// and the resolved title.
    pub fn renderer_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str, Option<&str>) -> String + Send + Sync + 'static,
    {
        self.renderer = LinkRenderer::Custom(Box::new(f) as RenderFn);
        self
    }
}
