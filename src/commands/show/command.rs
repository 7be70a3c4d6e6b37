use crate::commands::command::{tagged, Command, Page};
use crate::core::prelude::*;

/// Renders the page as it currently stands.
#[derive(Debug)]
pub struct ShowCommand;

impl Command for ShowCommand {
    fn name(&self) -> &'static str {
        "show"
    }

    fn description(&self) -> &'static str {
        "Render the current page"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "show" | "render" | "page")
    }

    fn execute(&self, page: &mut Page, _args: &[&str]) -> Result<String> {
        let (title, html) = page.with_surface(|doc| (doc.title().to_string(), doc.render()));
        Ok(format!(
            "{}\n{}",
            tagged("PAGE", &format!("Title: {}", title)),
            html.trim_end()
        ))
    }
}
