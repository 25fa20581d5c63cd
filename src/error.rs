//! Error types for mention linking.

use thiserror::Error;

use crate::renderer::RENDERER_NAMES;

#[derive(Debug, Error)]
pub enum MentionError {
    /// A renderer was selected by a name that is not registered.
    #[error("expected \"renderer\" to be one of the following [{}]", RENDERER_NAMES.join(", "))]
    UnknownRenderer { name: String },

    /// The configured URL prefix could not be parsed.
    #[error("invalid url prefix {prefix:?}: {source}")]
    InvalidUrl {
        prefix: String,
        source: url::ParseError,
    },

    /// The mention pattern failed at match time (backtracking limit).
    #[error("mention scan failed: {0}")]
    Scan(#[from] Box<fancy_regex::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_renderer_message_lists_valid_names() {
        let err = MentionError::UnknownRenderer {
            name: "textile".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expected \"renderer\" to be one of the following [md, html]"
        );
    }

    #[test]
    fn invalid_url_message_includes_prefix() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = MentionError::InvalidUrl {
            prefix: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().contains("not a url"));
    }
}
