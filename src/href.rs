//! URL construction for mention links.

use url::Url;

use crate::error::MentionError;

/// Joins a URL prefix with a mention name.
///
/// The prefix's path is replaced wholesale by the mention name, and any query
/// string or fragment on the prefix is dropped; scheme, host and port are
/// kept. `https://github.com` + `doowb` gives `https://github.com/doowb`.
pub fn join(prefix: &str, mention: &str) -> Result<String, MentionError> {
    let mut url = Url::parse(prefix).map_err(|source| MentionError::InvalidUrl {
        prefix: prefix.to_string(),
        source,
    })?;

    url.set_path(mention);
    url.set_query(None);
    url.set_fragment(None);

    Ok(url.into())
}
