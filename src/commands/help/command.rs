use crate::commands::command::{Command, Page};
use crate::commands::handler::SIG_HELP;
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "help" | "?" | "commands")
    }

    fn execute(&self, _page: &mut Page, _args: &[&str]) -> Result<String> {
        Ok(SIG_HELP.to_string())
    }

    fn priority(&self) -> u8 {
        95
    }
}
