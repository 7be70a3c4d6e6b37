use crate::commands::command::{Command, Page};
use crate::core::prelude::*;

#[derive(Debug)]
pub struct KeysCommand;

impl Command for KeysCommand {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn description(&self) -> &'static str {
        "List message keys, optionally filtered: keys [prefix]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "keys")
    }

    fn execute(&self, page: &mut Page, args: &[&str]) -> Result<String> {
        let prefix = args.first().copied().unwrap_or("");
        let lines: Vec<String> = page
            .catalog()
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .map(|key| format!("  {:20} {}", key, page.lookup(key)))
            .collect();

        if lines.is_empty() {
            return Ok(format!("No keys starting with '{}'", prefix));
        }
        Ok(lines.join("\n"))
    }

    fn priority(&self) -> u8 {
        30
    }
}
