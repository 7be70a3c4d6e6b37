// Core essentials
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

// Standard library essentials
pub use std::sync::{Arc, Mutex};
pub use std::time::Duration;

// i18n essentials
pub use crate::i18n::{LanguageCode, MessageCatalog, TranslationError};
