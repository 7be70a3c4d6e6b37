#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}

// Module definitions
pub mod commands;
pub mod core;
pub mod i18n;
pub mod page;
pub mod setup;

// Essential re-exports
pub use commands::{Command, CommandHandler, CommandRegistry, Page};
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use i18n::{LanguageCode, MessageCatalog};
pub use page::{Document, LocalizationToggle, PageSettings, TransientMessage};

use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub fn create_default_registry() -> CommandRegistry {
    use commands::{
        exit::ExitCommand, help::HelpCommand, keys::KeysCommand, lang::LanguageCommand,
        notify::NotifyCommand, show::ShowCommand, text::TextCommand, toggle::ToggleCommand,
    };

    let mut registry = CommandRegistry::new();

    registry.register(ToggleCommand);
    registry.register(LanguageCommand::new());
    registry.register(TextCommand);
    registry.register(NotifyCommand);
    registry.register(ShowCommand);
    registry.register(KeysCommand);
    registry.register(HelpCommand::new());
    registry.register(ExitCommand);

    registry.initialize();
    registry
}

/// Catalog from the configured directory, or the embedded one.
pub async fn load_catalog(config: &Config) -> Result<MessageCatalog> {
    match &config.catalog_dir {
        Some(dir) => MessageCatalog::load_from_dir(dir).await,
        None => MessageCatalog::embedded(),
    }
}

/// Loads the page (the bundled demo when `page_path` is `None`) and runs the
/// page-loaded initialisation on it.
pub async fn open_page(config: &Config, page_path: Option<&Path>) -> Result<Page> {
    let catalog = Arc::new(load_catalog(config).await?);
    let document = match page_path {
        Some(path) => Document::load(path).await?,
        None => Document::demo()?,
    };

    let page = LocalizationToggle::new(catalog, document, PageSettings::from(config));
    page.init();
    Ok(page)
}

/// Reads commands from stdin until `exit` or end of input.
pub async fn run(config: Config, page_path: Option<&Path>) -> Result<()> {
    let mut page = open_page(&config, page_path).await?;
    let handler = CommandHandler::new();

    println!(
        "{} v{} - type 'help' for commands",
        crate::core::constants::APP_TITLE,
        crate::core::constants::VERSION
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let result = handler.handle_input(&mut page, &line);
        if !result.message.is_empty() {
            println!("{}", result.message);
        }
        if result.should_exit {
            break;
        }
    }

    Ok(())
}
