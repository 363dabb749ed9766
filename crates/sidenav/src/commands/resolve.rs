//! `sidenav resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidenav_config::CliSettings;
use sidenav_tree::Node;

use crate::error::CliError;
use crate::output::Output;

use super::{PolicyArg, load_and_resolve, report_drift};

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
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

    /// Print the resolved tree as JSON instead of indented text.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, scanning, or resolution fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            order_file: self.order_file,
            unknown_keys: self.unknown_keys.map(Into::into),
        };

        let resolved = load_and_resolve(self.config.as_deref(), cli_settings)?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&resolved.tree)?);
        } else {
            output.data(&render_tree(&resolved.tree));
        }

        report_drift(output, &resolved.report);
        Ok(())
    }
}

/// Render the tree as indented text, one key per line.
///
/// Categories carry a trailing `/`; the root itself is not printed.
fn render_tree(root: &Node) -> String {
    let mut lines = Vec::with_capacity(root.node_count() - 1);
    render_children(root, 0, &mut lines);
    lines.join("\n")
}

fn render_children(node: &Node, depth: usize, lines: &mut Vec<String>) {
    for child in node.children() {
        let indent = "  ".repeat(depth);
        if child.is_category() {
            lines.push(format!("{indent}{}/", child.key()));
        } else {
            lines.push(format!("{indent}{}", child.key()));
        }
        render_children(child, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn split(path: &str) -> Vec<String> {
        path.split('/').map(str::to_owned).collect()
    }

    #[test]
    fn test_render_tree_indents_nested_levels() {
        let tree = Node::category(
            Vec::new(),
            vec![
                Node::category(
                    split("javascript"),
                    vec![Node::document(split("javascript/01-introduction"))],
                ),
                Node::document(split("aem")),
            ],
        );

        let rendered = render_tree(&tree);

        assert_eq!(rendered, "javascript/\n  01-introduction\naem");
    }

    #[test]
    fn test_render_tree_empty_root() {
        let tree = Node::category(Vec::new(), Vec::new());

        assert_eq!(render_tree(&tree), "");
    }
}
