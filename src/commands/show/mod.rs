pub mod command;

pub use command::ShowCommand;
