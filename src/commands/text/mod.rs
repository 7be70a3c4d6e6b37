pub mod command;

pub use command::TextCommand;
