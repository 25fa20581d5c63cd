//! Title resolution for mention links.

use std::fmt;

/// A title lookup takes the bare mention name (no `@` prefix) and returns the
/// title to attach, or `None` to render the link without one.
pub type TitleFn = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Maps a mention name to an optional display title.
#[derive(Default)]
pub enum TitleResolver {
    /// Links carry no title.
    #[default]
    None,
    /// Every link gets the same title, whatever the mention.
    Fixed(String),
    /// Per-mention title lookup.
    Lookup(TitleFn),
}

impl TitleResolver {
    pub fn resolve(&self, mention: &str) -> Option<String> {
        match self {
            TitleResolver::None => None,
            TitleResolver::Fixed(title) => Some(title.clone()),
            TitleResolver::Lookup(f) => f(mention),
        }
    }
}

impl fmt::Debug for TitleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleResolver::None => f.write_str("None"),
            TitleResolver::Fixed(title) => f.debug_tuple("Fixed").field(title).finish(),
            TitleResolver::Lookup(_) => f.write_str("Lookup(..)"),
        }
    }
}
