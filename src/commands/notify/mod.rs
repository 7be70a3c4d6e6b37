pub mod command;

pub use command::NotifyCommand;
