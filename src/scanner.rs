//! Scanner for `@name` mention tokens.
//!
//! Finds mentions in order of appearance and supports rebuilding the input
//! with each mention replaced by a caller-supplied substitution, leaving all
//! other text byte-for-byte unchanged.

use fancy_regex::Regex as FancyRegex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::error::MentionError;

/// Matches an `@` that starts a mention: not preceded by a word character
/// (so `user@host` is left alone) or another `@`. The name is letters,
/// digits, hyphens and underscores.
static MENTION_REGEX: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<![\w@])@([A-Za-z0-9_-]+)").unwrap());

/// A single `@name` token found in input text. The name carries no `@` prefix;
/// `span` covers the full token including the `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention<'a> {
    pub name: &'a str,
    pub span: Range<usize>,
}

/// Returns all mentions in `text` in order of appearance.
pub fn mentions(text: &str) -> Result<Vec<Mention<'_>>, MentionError> {
    let mut found = Vec::new();
    for cap in MENTION_REGEX.captures_iter(text) {
        let cap = cap.map_err(Box::new)?;
        let whole = cap.get(0).expect("match group 0 always present");
        let name = cap.get(1).expect("mention pattern has one capture group");
        found.push(Mention {
            name: name.as_str(),
            span: whole.range(),
        });
    }
    Ok(found)
}

/// Rebuilds `text` with every mention replaced by the callback's output.
/// Non-mention text is copied through unchanged and mention order is
/// preserved. Callback errors abort the scan with no partial output.
pub fn replace_mentions<F>(text: &str, mut replacement: F) -> Result<String, MentionError>
where
    F: FnMut(&Mention<'_>) -> Result<String, MentionError>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for mention in mentions(text)? {
        out.push_str(&text[last..mention.span.start]);
        out.push_str(&replacement(&mention)?);
        last = mention.span.end;
    }

    out.push_str(&text[last..]);
    Ok(out)
}
