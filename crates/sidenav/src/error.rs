//! CLI error types.

use sidenav_config::ConfigError;
use sidenav_order::ResolveError;
use sidenav_tree::TreeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
