use crate::commands::command::{tagged, Command, Page};
use crate::core::prelude::*;

#[derive(Debug)]
pub struct NotifyCommand;

impl Command for NotifyCommand {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn description(&self) -> &'static str {
        "Show a transient message: notify <key> [kind]"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "notify" | "msg")
    }

    fn execute(&self, page: &mut Page, args: &[&str]) -> Result<String> {
        let key = args
            .first()
            .ok_or_else(|| AppError::Validation("usage: notify <key> [kind]".into()))?;

        let message = match args.get(1) {
            Some(kind) => page.show_transient_message(key, kind),
            None => page.show_message(key),
        };

        Ok(tagged(
            "MSG",
            &format!(
                "'{}' shown as node {} for {} ms",
                page.lookup(key),
                message.node().0,
                page.settings().dismiss_after.as_millis()
            ),
        ))
    }

    fn priority(&self) -> u8 {
        60
    }
}
