use crate::commands::command::{Command, Page};
use crate::core::prelude::*;

/// Prints the catalog text for one key in the active language.
#[derive(Debug)]
pub struct TextCommand;

impl Command for TextCommand {
    fn name(&self) -> &'static str {
        "t"
    }

    fn description(&self) -> &'static str {
        "Look up a message key: t <key>"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "t" | "text")
    }

    fn execute(&self, page: &mut Page, args: &[&str]) -> Result<String> {
        let key = args
            .first()
            .ok_or_else(|| AppError::Validation("usage: t <key>".into()))?;
        Ok(page.lookup(key).to_string())
    }

    fn priority(&self) -> u8 {
        60
    }
}
