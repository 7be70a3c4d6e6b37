use crate::commands::command::{Command, Page};
use crate::commands::handler::SIG_EXIT;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the application"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "exit" | "quit" | "q")
    }

    fn execute(&self, _page: &mut Page, _args: &[&str]) -> Result<String> {
        Ok(format!("{}Bye.", SIG_EXIT))
    }

    fn priority(&self) -> u8 {
        100
    }
}
