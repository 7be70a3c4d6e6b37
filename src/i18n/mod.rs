//! Language codes, the message catalog and the files it is built from.

pub mod catalog;
pub mod error;
pub mod langs;
pub mod types;

pub use catalog::MessageCatalog;
pub use error::TranslationError;
pub use types::{LanguageCode, LanguageState};
