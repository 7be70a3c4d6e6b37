use crate::commands::command::{tagged, Command, Page};
use crate::core::prelude::*;

#[derive(Debug)]
pub struct ToggleCommand;

impl Command for ToggleCommand {
    fn name(&self) -> &'static str {
        "toggle"
    }

    fn description(&self) -> &'static str {
        "Switch the page to the other language"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "toggle" | "switch")
    }

    fn execute(&self, page: &mut Page, _args: &[&str]) -> Result<String> {
        let lang = page.toggle_language();
        Ok(tagged(
            "LANG",
            &format!(
                "Language changed to: {} ({})",
                lang.code().to_uppercase(),
                lang.locale_tag()
            ),
        ))
    }

    fn priority(&self) -> u8 {
        80
    }
}
