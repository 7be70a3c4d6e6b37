pub mod command;

pub use command::ToggleCommand;
