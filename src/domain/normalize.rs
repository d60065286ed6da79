//! Normalization of local links to root-relative paths.
//!
//! Links can be written relative to the document (`../x`, `./y`, `z`) or
//! relative to the tree root (`/x/y`). Both end up in the same canonical form:
//! forward-slash separated, relative to the root, free of `.` and `..`.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::domain::links::strip_anchor;

/// A link resolved to a location outside of the documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("link '{link}' in {document} points outside of the tree root {}", root.display())]
pub struct NormalizeError {
    /// The link as written in the document.
    pub link: String,
    /// Root-relative path of the document containing the link.
    pub document: String,
    /// The tree root.
    pub root: PathBuf,
}

/// Normalizes the links found in `document` so that they are relative to `tree_root`.
///
/// Anchors are dropped. A link starting with `/` is resolved from the tree
/// root, every other link from the directory containing the document.
///
/// # Errors
///
/// Returns `NormalizeError` as soon as one link resolves outside of the tree
/// root (or to the root directory itself). No partial result is returned.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use checkdoc::domain::normalize_links_to_root;
///
/// let links = vec!["../back/one/level".to_string(), "/from/project-root".to_string()];
/// let normalized = normalize_links_to_root(Path::new("/path/to/root/"), "relative/file", &links).unwrap();
/// assert_eq!(normalized, vec!["back/one/level", "from/project-root"]);
/// ```
pub fn normalize_links_to_root(
    tree_root: &Path,
    document: &str,
    links: &[String],
) -> Result<Vec<String>, NormalizeError> {
    let root = clean(tree_root);
    let document_dir = clean(&root.join(document))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.clone());

    links
        .iter()
        .map(|link| normalize_link(&root, &document_dir, document, link))
        .collect()
}

fn normalize_link(
    root: &Path,
    document_dir: &Path,
    document: &str,
    link: &str,
) -> Result<String, NormalizeError> {
    let path = strip_anchor(link);

    let absolute = match path.strip_prefix('/') {
        Some(from_root) => clean(&root.join(from_root)),
        None => clean(&document_dir.join(path)),
    };

    let escapes = || NormalizeError {
        link: link.to_string(),
        document: document.to_string(),
        root: root.to_path_buf(),
    };

    let relative = absolute.strip_prefix(root).map_err(|_| escapes())?;
    if relative.as_os_str().is_empty() {
        return Err(escapes());
    }

    Ok(to_slash(relative))
}

/// Lexically resolves `.` and `..` components without touching the file system.
///
/// `..` above the file system root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() && !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Joins the components of a relative path with forward slashes.
pub(crate) fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
