//! Markdown parsing and link extraction.

use std::path::Path;

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag};

use crate::domain::Document;
use crate::infra::fs::{FsError, decode_document};

/// Parses document bytes and exposes their link destinations.
pub trait LinkExtractor {
    /// Parses `bytes` read from `path` into a [`Document`].
    ///
    /// # Errors
    ///
    /// Returns `FsError` when the bytes cannot be decoded or parsed.
    fn parse(&self, bytes: Vec<u8>, path: &Path) -> Result<Document, FsError>;
}

/// CommonMark link extractor backed by `pulldown-cmark`.
///
/// Tables, footnotes, strikethrough and task lists are enabled so that links
/// inside them are seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkExtractor;

impl LinkExtractor for CommonMarkExtractor {
    fn parse(&self, bytes: Vec<u8>, path: &Path) -> Result<Document, FsError> {
        let text = decode_document(bytes, path)?;
        let destinations = extract_all_links(&text);
        Ok(Document::new(text, destinations))
    }
}

/// Extracts the destination of every link in `markdown`, in document order.
///
/// Email autolinks are returned with a `mailto:` prefix. Images are not links.
///
/// # Example
///
/// ```
/// use checkdoc::infra::extract_all_links;
///
/// let links = extract_all_links("See [setup](docs/setup.md) and <https://example.com>.");
/// assert_eq!(links, vec!["docs/setup.md", "https://example.com"]);
/// ```
pub fn extract_all_links(markdown: &str) -> Vec<String> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    Parser::new_ext(markdown, options)
        .filter_map(|event| match event {
            Event::Start(Tag::Link(LinkType::Email, dest, _)) => Some(format!("mailto:{dest}")),
            Event::Start(Tag::Link(_, dest, _)) => Some(dest.into_string()),
            _ => None,
        })
        .collect()
}
