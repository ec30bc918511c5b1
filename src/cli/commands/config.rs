use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

use super::require_args;

const CONFIG_USAGE: &str = "config [show | set <key> <value> | path]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|s| s.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            output::section("Configuration");
            for (key, value) in context.config.entries() {
                output::line(format!("  {:<17}: {}", key, value));
            }
            Ok(())
        }
        Some("set") => {
            require_args(args, 3, CONFIG_USAGE)?;
            let mut updated = context.config.clone();
            updated.set(args[1], args[2])?;
            context.config_manager.save(&updated)?;
            context.config = updated;
            output::success(format!("{} updated", args[1]));
            Ok(())
        }
        Some("path") => {
            output::line(context.config_manager.path().display());
            output::line(format!("data: {}", context.base_dir.join("data").display()));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}` (usage: {})",
            other, CONFIG_USAGE
        ))),
    }
}
