pub mod command;

pub use command::KeysCommand;
