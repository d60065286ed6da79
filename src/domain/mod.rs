//! Core types: configuration, graph nodes, link normalization, reports

mod config;
mod links;
mod node;
mod normalize;
mod report;
mod validate;

pub use config::CheckConfig;
pub use links::{filter_local_links, is_local_link, strip_anchor};
pub use node::{Document, LinkGraphNode, PathSet, build_path_set};
pub use normalize::{NormalizeError, normalize_links_to_root};
pub(crate) use normalize::to_slash;
pub use report::{LinkReport, NodeReport};
pub use validate::{find_dead_links, find_orphans};
