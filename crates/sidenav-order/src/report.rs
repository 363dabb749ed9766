//! Diagnostics collected during resolution.
//!
//! Configuration drift is recoverable: the resolver finishes the whole pass
//! and hands back one report, so an editor sees every stale entry and every
//! unplaced page at once instead of fixing them one build at a time.

use std::fmt;

/// A configured key with no matching child.
///
/// Usually a typo or an entry left behind after content was renamed or
/// removed. The key contributes nothing to the output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKey {
    /// Joined path of the category whose entry lists the key (`""` for root).
    pub path: String,
    /// The configured key that matched no child.
    pub key: String,
}

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order entry '{}' lists unknown key '{}'",
            self.path, self.key
        )
    }
}

/// A child not mentioned by its category's order entry.
///
/// The child keeps its loader-relative order after all configured siblings.
/// Informational only: new content appearing on disk before the order entry
/// is updated lands here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnplacedChild {
    /// Joined path of the category owning the entry (`""` for root).
    pub path: String,
    /// Key of the child with no configured position.
    pub key: String,
}

impl fmt::Display for UnplacedChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "child '{}' of '{}' has no configured position; appended after ordered siblings",
            self.key, self.path
        )
    }
}

/// All diagnostics from one resolution pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Configured keys that matched no actual child.
    pub warnings: Vec<UnknownKey>,
    /// Children appended without an explicit position.
    pub notices: Vec<UnplacedChild>,
}

impl ResolveReport {
    /// True if the pass found no drift at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.notices.is_empty()
    }
}
