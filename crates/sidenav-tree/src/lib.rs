//! Documentation tree model and filesystem loader.
//!
//! Provides [`Node`], the category/document tree consumed by the ordering
//! resolver, and [`TreeLoader`] for building that tree from a directory of
//! markdown sources.
//!
//! # Path Convention
//!
//! Nodes are identified by their logical path: a sequence of string segments
//! such as `["javascript", "beginners-guide"]`. The joined form uses `/` as
//! separator (`"javascript/beginners-guide"`); the root is the empty path,
//! joined as `""`.

mod loader;
mod node;

pub use loader::{TreeError, TreeLoader};
pub use node::{Node, NodeKind, PATH_SEPARATOR};
