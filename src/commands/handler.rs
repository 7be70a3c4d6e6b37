use super::command::Page;
use super::registry::CommandRegistry;

pub const SIG_EXIT: &str = "__EXIT__";
/// Replaced by the command list of the handler's own registry.
pub const SIG_HELP: &str = "__HELP__";

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
    pub should_exit: bool,
}

impl CommandResult {
    fn failed(message: String) -> Self {
        Self {
            message,
            success: false,
            should_exit: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            registry: crate::create_default_registry(),
        }
    }

    pub fn handle_input(&self, page: &mut Page, input: &str) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some((&command, args)) = parts.split_first() else {
            return CommandResult::failed(String::new());
        };

        log::debug!("CommandHandler processing: '{}'", input);

        match self.registry.execute(page, command, args) {
            Some(Ok(msg)) if msg == SIG_HELP => CommandResult {
                message: self.registry.help_text(),
                success: true,
                should_exit: false,
            },
            Some(Ok(msg)) => {
                let should_exit = msg.starts_with(SIG_EXIT);
                let message = match msg.strip_prefix(SIG_EXIT) {
                    Some(rest) => rest.to_string(),
                    None => msg,
                };
                CommandResult {
                    message,
                    success: true,
                    should_exit,
                }
            }
            Some(Err(e)) => {
                log::warn!("Command '{}' failed: {}", command, e);
                CommandResult::failed(e.to_string())
            }
            None => {
                log::warn!("Unknown command: {}", input);
                CommandResult::failed(format!(
                    "Unknown command: '{}'. Type 'help' for the command list.",
                    command
                ))
            }
        }
    }

    pub fn add_command<T: crate::commands::command::Command>(&mut self, command: T) {
        self.registry.register(command);
        self.registry.initialize();
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.registry.list_commands()
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
