//! Link renderers: markdown, HTML, or a caller-supplied function.

use std::fmt;

use crate::error::MentionError;

/// A custom renderer takes the mention text (with `@` prefix), the link
/// target, and an optional title, and returns the rendered link.
pub type RenderFn = Box<dyn Fn(&str, &str, Option<&str>) -> String + Send + Sync>;

/// Names accepted by [`LinkRenderer::from_name`], in registry order.
pub const RENDERER_NAMES: [&str; 2] = ["md", "html"];

/// Renders a mention, its URL and an optional title into a link string.
pub enum LinkRenderer {
    /// `[@name](url)` or `[@name](url "title")`.
    Markdown,
    /// `<a href="url">@name</a>` or `<a href="url" alt="title">@name</a>`.
    Html,
    /// Caller-supplied formatting, bypassing the built-in formats.
    Custom(RenderFn),
}

impl LinkRenderer {
    /// Selects a built-in renderer by registry name (`"md"` or `"html"`).
    pub fn from_name(name: &str) -> Result<Self, MentionError> {
        match name {
            "md" => Ok(LinkRenderer::Markdown),
            "html" => Ok(LinkRenderer::Html),
            _ => Err(MentionError::UnknownRenderer {
                name: name.to_string(),
            }),
        }
    }

    /// Formats one link. `mention` is used verbatim, `@` prefix included.
    pub fn render(&self, mention: &str, href: &str, title: Option<&str>) -> String {
        match self {
            LinkRenderer::Markdown => markdown_link(mention, href, title),
            LinkRenderer::Html => html_link(mention, href, title),
            LinkRenderer::Custom(f) => f(mention, href, title),
        }
    }
}

impl Default for LinkRenderer {
    fn default() -> Self {
        LinkRenderer::Markdown
    }
}

impl fmt::Debug for LinkRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkRenderer::Markdown => f.write_str("Markdown"),
            LinkRenderer::Html => f.write_str("Html"),
            LinkRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn markdown_link(mention: &str, href: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("[{mention}]({href} \"{title}\")"),
        None => format!("[{mention}]({href})"),
    }
}

fn html_link(mention: &str, href: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("<a href=\"{href}\" alt=\"{title}\">{mention}</a>"),
        None => format!("<a href=\"{href}\">{mention}</a>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_without_title() {
        let out = LinkRenderer::Markdown.render("@doowb", "https://github.com/doowb", None);
        assert_eq!(out, "[@doowb](https://github.com/doowb)");
    }

    #[test]
    fn markdown_with_title() {
        let out = LinkRenderer::Markdown.render(
            "@doowb",
            "https://github.com/doowb",
            Some("Brian Woodward"),
        );
        assert_eq!(out, "[@doowb](https://github.com/doowb \"Brian Woodward\")");
    }

    #[test]
    fn html_without_title() {
        let out = LinkRenderer::Html.render("@doowb", "https://github.com/doowb", None);
        assert_eq!(out, "<a href=\"https://github.com/doowb\">@doowb</a>");
    }

    #[test]
    fn html_with_title() {
        let out = LinkRenderer::Html.render(
            "@doowb",
            "https://github.com/doowb",
            Some("Brian Woodward"),
        );
        assert_eq!(
            out,
            "<a href=\"https://github.com/doowb\" alt=\"Brian Woodward\">@doowb</a>"
        );
    }

    #[test]
    fn custom_renderer_receives_all_parts() {
        let renderer = LinkRenderer::Custom(Box::new(|mention, href, title| {
            format!("{mention}|{href}|{}", title.unwrap_or("-"))
        }));
        let out = renderer.render("@doowb", "https://github.com/doowb", None);
        assert_eq!(out, "@doowb|https://github.com/doowb|-");
    }

    #[test]
    fn from_name_resolves_registry_entries() {
        assert!(matches!(LinkRenderer::from_name("md").unwrap(), LinkRenderer::Markdown));
        assert!(matches!(LinkRenderer::from_name("html").unwrap(), LinkRenderer::Html));
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        let err = LinkRenderer::from_name("textile").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected \"renderer\" to be one of the following [md, html]"
        );
    }
}
