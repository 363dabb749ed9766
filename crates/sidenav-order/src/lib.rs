//! Sidebar ordering resolver.
//!
//! Computes the display order of every category's children in a
//! documentation tree, merging a sparse, path-keyed [`OrderConfig`] with the
//! children actually discovered by the loader. Paths with no configuration
//! keep their loader order; configured paths list their configured children
//! first (in configured order) and append the rest in original relative
//! order, so nothing is ever dropped.
//!
//! The resolver is a pure function of `(tree, config)`: no I/O, no shared
//! state, and resolving an already-resolved tree yields the same result.
//!
//! # Example
//!
//! ```
//! use sidenav_order::{OrderConfig, resolve};
//! use sidenav_tree::Node;
//!
//! let tree = Node::category(
//!     Vec::new(),
//!     vec![
//!         Node::document(vec!["strapi".to_owned()]),
//!         Node::document(vec!["java".to_owned()]),
//!         Node::document(vec!["aem".to_owned()]),
//!         Node::document(vec!["javascript".to_owned()]),
//!     ],
//! );
//!
//! let mut config = OrderConfig::new();
//! config.insert(OrderConfig::ROOT, vec!["javascript".to_owned(), "java".to_owned()]);
//!
//! let resolved = resolve(tree, &config)?;
//! let keys: Vec<_> = resolved.tree.children().iter().map(|n| n.key()).collect();
//! assert_eq!(keys, ["javascript", "java", "strapi", "aem"]);
//! # Ok::<(), sidenav_order::ResolveError>(())
//! ```

mod order_config;
mod report;
mod resolver;

pub use order_config::OrderConfig;
pub use report::{ResolveReport, UnknownKey, UnplacedChild};
pub use resolver::{Resolved, ResolveError, UnknownKeyPolicy, resolve, resolve_with};
