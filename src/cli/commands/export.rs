use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::export;

use super::require_args;

const EXPORT_USAGE: &str = "export <csv|html> [path]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "export",
        "Export all transactions as CSV or a printable HTML report",
        EXPORT_USAGE,
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, EXPORT_USAGE)?;
    let today = context.manager.today();
    let transactions = context.manager.transactions();

    let written = match args[0].to_ascii_lowercase().as_str() {
        "csv" => {
            let path = target_path(args.get(1), export::default_csv_file_name(today));
            export::export_csv_file(&path, transactions)?
        }
        "html" | "report" | "pdf" => {
            let path = target_path(args.get(1), export::default_report_file_name(today));
            export::export_html_file(&path, transactions, today)?
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown export format `{}` (expected csv or html)",
                other
            )))
        }
    };
    output::success(format!(
        "Exported {} transactions to {}",
        transactions.len(),
        written.display()
    ));
    Ok(())
}

fn target_path(explicit: Option<&&str>, default_name: String) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_name))
}
