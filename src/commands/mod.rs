pub mod command;
pub mod exit;
pub mod handler;
pub mod help;
pub mod keys;
pub mod lang;
pub mod notify;
pub mod registry;
pub mod show;
pub mod text;
pub mod toggle;

pub use command::{Command, Page};
pub use handler::{CommandHandler, CommandResult};
pub use registry::CommandRegistry;
