//! Local-link classification.
//!
//! A link is local when it points into the documentation tree: it carries no
//! URI scheme, is not a mail link and is not a bare same-document anchor.

/// Keeps only the destinations that point to the local file system.
///
/// `path#anchor` destinations are kept untouched; the anchor is stripped
/// during normalization.
///
/// # Examples
///
/// ```
/// use checkdoc::domain::filter_local_links;
///
/// let links = vec![
///     "https://example.com".to_string(),
///     "docs/setup.md#install".to_string(),
///     "#top".to_string(),
/// ];
/// assert_eq!(filter_local_links(links), vec!["docs/setup.md#install"]);
/// ```
pub fn filter_local_links<I>(destinations: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    destinations
        .into_iter()
        .filter(|d| is_local_link(d))
        .collect()
}

/// Checks whether a single destination is local.
pub fn is_local_link(destination: &str) -> bool {
    !(destination.contains("://")
        || destination.starts_with("mailto:")
        || destination.starts_with('#'))
}

/// Returns the destination without its `#fragment`, if any.
pub fn strip_anchor(destination: &str) -> &str {
    match destination.find('#') {
        Some(idx) => &destination[..idx],
        None => destination,
    }
}
