//! `sidenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidenav_config::CliSettings;

use crate::error::CliError;
use crate::output::Output;

use super::{PolicyArg, load_and_resolve, report_drift};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// JSON order file (overrides config).
    #[arg(long)]
    order_file: Option<PathBuf>,

    /// Unknown-key policy (overrides config).
    #[arg(long, value_enum)]
    unknown_keys: Option<PolicyArg>,

    /// Exit with an error when any warning is found.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, scanning, or resolution fails, or
    /// under `--strict` when the pass produced warnings.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            order_file: self.order_file,
            unknown_keys: self.unknown_keys.map(Into::into),
        };

        let resolved = load_and_resolve(self.config.as_deref(), cli_settings)?;

        report_drift(output, &resolved.report);

        if resolved.report.is_clean() {
            output.success("Ordering configuration matches the documentation tree");
        } else {
            output.info(&format!(
                "Found {} warning(s) and {} notice(s)",
                resolved.report.warnings.len(),
                resolved.report.notices.len()
            ));
        }

        if self.strict && !resolved.report.warnings.is_empty() {
            return Err(CliError::Validation(format!(
                "strict check failed with {} warning(s)",
                resolved.report.warnings.len()
            )));
        }

        Ok(())
    }
}
