use crate::core::errors::{Error, Result};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::collections::HashSet;

/*-------------------------------------------------------------------------------------------------
  Download Link Extraction
-------------------------------------------------------------------------------------------------*/

lazy_static! {
    // Anchor href attribute whose value contains the substring "json". The confirmation
    // page offers the dataset as the only JSON download link.
    static ref JSON_DOWNLOAD_LINK: Regex =
        Regex::new(r#"(?i)<a\s[^>]*?href="([^"]*json[^"]*)""#).unwrap();
}

/// Extract every JSON download link from the confirmation page HTML, in document order.
pub fn extract_download_links(html: &str) -> Vec<&str> {
    JSON_DOWNLOAD_LINK
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|group| group.as_str())
        .collect()
}

/// Extract the dataset download link from the confirmation page HTML.
///
/// Returns the first matching link. When the page carries more than one distinct
/// candidate the ambiguity is surfaced with a warning rather than silently resolved.
/// Fails with [Error::LinkNotFound] when the page has no matching anchor.
pub fn extract_download_link(html: &str) -> Result<&str> {
    let links = extract_download_links(html);

    match links.first() {
        None => Err(Error::LinkNotFound),
        Some(first) => {
            let distinct: HashSet<&&str> = links.iter().collect();
            if distinct.len() > 1 {
                warn!(
                    "Confirmation page has {} distinct JSON download links; using the first: {}",
                    distinct.len(),
                    first
                );
            }
            debug!("Extracted dataset download link: {}", first);
            Ok(first)
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
