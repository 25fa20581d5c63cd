//! Turn `@name` mentions in a string into links.
//!
//! Defaults to markdown links against GitHub profile URLs; the URL prefix,
//! link titles, and the output format (markdown, HTML, or a custom function)
//! are configurable through [`MentionOptions`].
//!
//! ```
//! use mention_links::{to_mention, MentionOptions};
//!
//! let out = to_mention("- @doowb\n- @jonschlinkert", &MentionOptions::default()).unwrap();
//! assert_eq!(
//!     out,
//!     "- [@doowb](https://github.com/doowb)\n- [@jonschlinkert](https://github.com/jonschlinkert)"
//! );
//! ```

pub mod error;
pub mod href;
pub mod options;
pub mod renderer;
pub mod scanner;
pub mod title;

pub use crate::error::MentionError;
pub use crate::options::MentionOptions;
pub use crate::renderer::{LinkRenderer, RenderFn, RENDERER_NAMES};
pub use crate::scanner::Mention;
pub use crate::title::{TitleFn, TitleResolver};

/// Replaces every `@name` mention in `text` with a rendered link.
///
/// Non-mention text is returned byte-for-byte unchanged and mention order is
/// preserved. Each call is pure and independent; nothing is shared between
/// invocations.
pub fn to_mention(text: &str, options: &MentionOptions) -> Result<String, MentionError> {
    let mut replaced = 0usize;

    let out = scanner::replace_mentions(text, |mention| {
        let href = href::join(&options.url, mention.name)?;
        let title = options.title.resolve(mention.name);
        replaced += 1;
        Ok(options
            .renderer
            .render(&format!("@{}", mention.name), &href, title.as_deref()))
    })?;

    log::debug!("replaced {replaced} mention(s) in {} bytes of input", text.len());
    Ok(out)
}
