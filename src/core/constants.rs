pub const APP_TITLE: &str = "BILINGUAL PAGE";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Element id of the language toggle button.
pub const DEFAULT_TOGGLE_ID: &str = "languageToggle";
/// Class of the element that receives transient messages.
pub const DEFAULT_CONTAINER_CLASS: &str = "container";
pub const DEFAULT_MESSAGE_KIND: &str = "success";

pub const DEFAULT_DISMISS_MS: u64 = 3000;
pub const MIN_DISMISS_MS: u64 = 100;
pub const MAX_DISMISS_MS: u64 = 60_000;
