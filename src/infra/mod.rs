//! File discovery, ignore rules, markdown parsing, file I/O

mod discover;
mod fs;
mod gitignore;
mod markdown;
mod repo_root;

pub use discover::{DiscoverError, find_matching_files, validate_index_names, validate_search};
pub use fs::{FsError, decode_document, read_document, write_atomic};
pub use gitignore::{GitIgnoreMatcher, IgnoreError, IgnoreMatcher};
pub use markdown::{CommonMarkExtractor, LinkExtractor, extract_all_links};
pub use repo_root::{RepoRootError, repository_root};
