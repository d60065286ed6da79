//! Discovery of documentation files by exact name or extension.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Errors while searching a tree for documents.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("need to specify at least one base name or extension")]
    NoSearchCriteria,

    #[error("tree root must be absolute, was: {}", root.display())]
    RelativeRoot { root: PathBuf },

    #[error("base name cannot be empty")]
    EmptyBaseName,

    #[error("extension must start with a dot (.): '{extension}'")]
    InvalidExtension { extension: String },

    #[error("index name must be a plain file name: '{name}'")]
    InvalidIndexName { name: String },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl DiscoverError {
    /// Returns true for errors caused by the search parameters rather than the tree.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DiscoverError::Walk { .. })
    }
}

/// Checks the search parameters without touching the file system.
///
/// # Errors
///
/// Returns a configuration error if both lists are empty, the root is
/// relative, a base name is empty or an extension does not start with `.`.
pub fn validate_search(
    tree_root: &Path,
    base_names: &[String],
    extensions: &[String],
) -> Result<(), DiscoverError> {
    if base_names.is_empty() && extensions.is_empty() {
        return Err(DiscoverError::NoSearchCriteria);
    }
    if !tree_root.is_absolute() {
        return Err(DiscoverError::RelativeRoot {
            root: tree_root.to_path_buf(),
        });
    }
    if base_names.iter().any(String::is_empty) {
        return Err(DiscoverError::EmptyBaseName);
    }
    if let Some(bad) = extensions.iter().find(|e| e.len() < 2 || !e.starts_with('.')) {
        return Err(DiscoverError::InvalidExtension {
            extension: bad.clone(),
        });
    }
    Ok(())
}

/// Checks that every implicit index is a plain file name, since each one is
/// joined onto a linked directory.
///
/// # Errors
///
/// Returns `DiscoverError::InvalidIndexName` for an empty name, `.`, `..`, or
/// a name containing `/` or `\`.
pub fn validate_index_names(implicit_indexes: &[String]) -> Result<(), DiscoverError> {
    let plain = |name: &str| {
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
    };
    match implicit_indexes.iter().find(|name| !plain(name.as_str())) {
        Some(bad) => Err(DiscoverError::InvalidIndexName { name: bad.clone() }),
        None => Ok(()),
    }
}

/// Finds every file below `tree_root` matching one of the base names or extensions.
///
/// Each base name, then each extension, triggers its own walk of the tree,
/// and the matches are concatenated in that order. Within one walk, entries
/// are visited in file-name order. A file matched by several criteria is
/// returned several times.
///
/// # Errors
///
/// See [`validate_search`] for configuration errors. Returns
/// `DiscoverError::Walk` if a directory cannot be read.
pub fn find_matching_files(
    tree_root: &Path,
    base_names: &[String],
    extensions: &[String],
) -> Result<Vec<PathBuf>, DiscoverError> {
    validate_search(tree_root, base_names, extensions)?;

    let mut collected = Vec::new();
    for base_name in base_names {
        let found = search(tree_root, |name| name == OsStr::new(base_name))?;
        debug!(base_name = %base_name, count = found.len(), "searched by base name");
        collected.extend(found);
    }
    for extension in extensions {
        let found = search(tree_root, |name| {
            extension_of(name) == Some(extension.as_bytes())
        })?;
        debug!(extension = %extension, count = found.len(), "searched by extension");
        collected.extend(found);
    }
    Ok(collected)
}

fn search<F>(tree_root: &Path, matches: F) -> Result<Vec<PathBuf>, DiscoverError>
where
    F: Fn(&OsStr) -> bool,
{
    let mut files = Vec::new();
    for entry in WalkDir::new(tree_root).sort_by_file_name() {
        let entry = entry.map_err(|e| DiscoverError::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| tree_root.to_path_buf()),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if matches(entry.file_name()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Returns the extension of a file name, dot included: the suffix starting
/// at the last `.`.
///
/// Works on the raw name so that names which are not valid UTF-8 still match.
fn extension_of(file_name: &OsStr) -> Option<&[u8]> {
    let bytes = file_name.as_encoded_bytes();
    bytes.iter().rposition(|&b| b == b'.').map(|idx| &bytes[idx..])
}
