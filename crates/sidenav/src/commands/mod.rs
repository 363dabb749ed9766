//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;

use std::path::Path;

use clap::ValueEnum;
use sidenav_config::{CliSettings, Config};
use sidenav_order::{Resolved, ResolveReport, UnknownKeyPolicy, resolve_with};
use sidenav_tree::TreeLoader;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;

use crate::error::CliError;
use crate::output::Output;

/// Unknown-key policy as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum PolicyArg {
    /// Report stale keys and continue.
    Warn,
    /// Abort on the first stale key.
    Error,
    /// Drop stale keys silently.
    Ignore,
}

impl From<PolicyArg> for UnknownKeyPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Warn => Self::Warn,
            PolicyArg::Error => Self::Error,
            PolicyArg::Ignore => Self::Ignore,
        }
    }
}

/// Load configuration, scan the documentation tree, and resolve its order.
pub(crate) fn load_and_resolve(
    config_path: Option<&Path>,
    cli_settings: CliSettings,
) -> Result<Resolved, CliError> {
    let config = Config::load(config_path, Some(&cli_settings))?;
    let tree = TreeLoader::new(config.docs_resolved.source_dir.clone()).load()?;
    let resolved = resolve_with(tree, config.order(), config.policy.unknown_keys)?;
    tracing::info!(
        nodes = resolved.tree.node_count(),
        configured_paths = config.order().len(),
        "Resolved documentation tree"
    );
    Ok(resolved)
}

/// Report collected drift once, after the whole pass.
pub(crate) fn report_drift(output: &Output, report: &ResolveReport) {
    for warning in &report.warnings {
        output.warning(&format!("warning: {warning}"));
    }
    for notice in &report.notices {
        output.notice(&format!("note: {notice}"));
    }
}
