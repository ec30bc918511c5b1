use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub aliases: &'static [&'static str],
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            aliases: &[],
            handler,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Commands in registration order, addressable by name or alias.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    aliases: HashMap<&'static str, &'static str>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        for alias in entry.aliases {
            self.aliases.insert(alias, entry.name);
        }
        if !self.commands.contains_key(entry.name) {
            self.order.push(entry.name);
        }
        self.commands.insert(entry.name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        let key = self.aliases.get(name).copied().unwrap_or(name);
        self.commands.get(key)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    /// Primary names followed by aliases; used for completion and suggestions.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.order.clone();
        names.extend(self.aliases.keys().copied());
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut ShellContext, _: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn resolves_aliases_and_keeps_order() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("help", "Show help", "help", noop));
        registry.register(CommandEntry::new("exit", "Exit", "exit", noop).with_aliases(&["quit"]));

        assert_eq!(registry.get("quit").map(|entry| entry.name), Some("exit"));
        assert!(registry.handler("missing").is_none());
        let order: Vec<_> = registry.iter().map(|entry| entry.name).collect();
        assert_eq!(order, vec!["help", "exit"]);
        assert!(registry.names().contains(&"quit"));
    }
}
