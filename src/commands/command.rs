use crate::core::error::Result;
use crate::page::{Document, LocalizationToggle};

/// The page a command operates on.
pub type Page = LocalizationToggle<Document>;

pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn matches(&self, command: &str) -> bool;

    fn execute(&self, page: &mut Page, args: &[&str]) -> Result<String>;

    fn priority(&self) -> u8 {
        50
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// `[TAG] message`, the shape every command reply takes.
pub fn tagged(tag: &str, message: &str) -> String {
    format!("[{}] {}", tag, message)
}
