//! Order resolution over the documentation tree.
//!
//! Applies the merge algorithm independently at every category: configured
//! keys first in configured order, remaining children after them in their
//! original relative order. Subtrees are independent, so traversal order
//! does not affect the result.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use sidenav_tree::{Node, NodeKind};

use crate::order_config::OrderConfig;
use crate::report::{ResolveReport, UnknownKey, UnplacedChild};

/// How to treat a configured key with no matching child.
///
/// `Warn` keeps the build usable while surfacing the stale entry; `Error`
/// turns drift into a hard failure for stricter pipelines; `Ignore` drops
/// the key silently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Report the key and continue (default).
    #[default]
    Warn,
    /// Abort resolution with [`ResolveError::UnknownKey`].
    Error,
    /// Skip the key without reporting.
    Ignore,
}

/// Error returned when resolution fails.
///
/// Mismatched configuration is recoverable and never produces an error under
/// the default policy; only structural violations (and unknown keys under
/// [`UnknownKeyPolicy::Error`]) abort the pass.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Two siblings share a key; the input tree is malformed.
    #[error("Duplicate sibling key '{key}' under '{path}'")]
    DuplicateKey {
        /// Joined path of the offending category (`""` for root).
        path: String,
        /// The shared key.
        key: String,
    },
    /// A configured key matched no child (policy `error` only).
    #[error("Order entry '{path}' lists unknown key '{key}'")]
    UnknownKey {
        /// Joined path of the category whose entry lists the key.
        path: String,
        /// The configured key.
        key: String,
    },
}

/// Result of a resolution pass: the reordered tree plus collected drift.
#[derive(Clone, Debug)]
pub struct Resolved {
    /// Same nodes as the input tree, sibling order resolved at every level.
    pub tree: Node,
    /// Diagnostics collected across the whole pass.
    pub report: ResolveReport,
}

/// Resolve sibling order for every category under the default policy.
///
/// # Errors
///
/// Returns [`ResolveError::DuplicateKey`] if the tree violates the unique
/// sibling key invariant.
pub fn resolve(tree: Node, config: &OrderConfig) -> Result<Resolved, ResolveError> {
    resolve_with(tree, config, UnknownKeyPolicy::default())
}

/// Resolve sibling order with an explicit unknown-key policy.
///
/// # Errors
///
/// Returns [`ResolveError::DuplicateKey`] on a malformed tree, and
/// [`ResolveError::UnknownKey`] under [`UnknownKeyPolicy::Error`] when a
/// configured key matches no child.
pub fn resolve_with(
    tree: Node,
    config: &OrderConfig,
    policy: UnknownKeyPolicy,
) -> Result<Resolved, ResolveError> {
    let mut report = ResolveReport::default();
    let tree = resolve_node(tree, config, policy, &mut report)?;
    Ok(Resolved { tree, report })
}

/// Resolve one node and recurse into its children.
fn resolve_node(
    node: Node,
    config: &OrderConfig,
    policy: UnknownKeyPolicy,
    report: &mut ResolveReport,
) -> Result<Node, ResolveError> {
    let (key, path, kind, children) = node.into_parts();

    if kind == NodeKind::Document {
        return Ok(Node::from_parts(key, path, kind, children));
    }

    // Loaders guarantee unique sibling keys; reject trees that slipped past.
    let mut seen = HashSet::with_capacity(children.len());
    for child in &children {
        if !seen.insert(child.key()) {
            return Err(ResolveError::DuplicateKey {
                path,
                key: child.key().to_owned(),
            });
        }
    }

    let ordered = match config.get(&path) {
        None => children,
        Some(explicit) => order_children(&path, children, explicit, policy, report)?,
    };

    let resolved = ordered
        .into_iter()
        .map(|child| resolve_node(child, config, policy, report))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Node::from_parts(key, path, kind, resolved))
}

/// Merge one category's explicit key list with its actual children.
fn order_children(
    path: &str,
    children: Vec<Node>,
    explicit: &[String],
    policy: UnknownKeyPolicy,
    report: &mut ResolveReport,
) -> Result<Vec<Node>, ResolveError> {
    let position: HashMap<String, usize> = children
        .iter()
        .enumerate()
        .map(|(i, child)| (child.key().to_owned(), i))
        .collect();
    let mut slots: Vec<Option<Node>> = children.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(slots.len());

    for key in explicit {
        let Some(&i) = position.get(key) else {
            match policy {
                UnknownKeyPolicy::Warn => {
                    tracing::warn!(path = %path, key = %key, "Order entry lists unknown key");
                    report.warnings.push(UnknownKey {
                        path: path.to_owned(),
                        key: key.clone(),
                    });
                }
                UnknownKeyPolicy::Error => {
                    return Err(ResolveError::UnknownKey {
                        path: path.to_owned(),
                        key: key.clone(),
                    });
                }
                UnknownKeyPolicy::Ignore => {}
            }
            continue;
        };
        // A key listed more than once places its child at the first mention.
        if let Some(child) = slots[i].take() {
            ordered.push(child);
        }
    }

    for slot in slots {
        if let Some(child) = slot {
            tracing::debug!(path = %path, key = %child.key(), "Child has no configured position");
            report.notices.push(UnplacedChild {
                path: path.to_owned(),
                key: child.key().to_owned(),
            });
            ordered.push(child);
        }
    }

    Ok(ordered)
}
