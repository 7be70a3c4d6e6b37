use crate::commands::command::{tagged, Command, Page};
use crate::core::prelude::*;

#[derive(Debug, Default)]
pub struct LanguageCommand;

impl LanguageCommand {
    pub fn new() -> Self {
        Self
    }

    fn show_status(page: &Page) -> String {
        let lang = page.current_language();
        let available = LanguageCode::ALL
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}\n{}",
            tagged(
                "LANG",
                &format!(
                    "Current language: {} ({})",
                    lang.code().to_uppercase(),
                    lang.locale_tag()
                )
            ),
            tagged("LANG", &format!("Available languages: {}", available))
        )
    }
}

impl Command for LanguageCommand {
    fn name(&self) -> &'static str {
        "lang"
    }

    fn description(&self) -> &'static str {
        "Show the current language or switch to zh/en"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "lang" | "language")
    }

    fn execute(&self, page: &mut Page, args: &[&str]) -> Result<String> {
        let Some(&requested) = args.first() else {
            return Ok(Self::show_status(page));
        };

        let target: LanguageCode = requested.parse()?;
        if target == page.current_language() {
            return Ok(tagged(
                "LANG",
                &format!("Already showing {}", target.code().to_uppercase()),
            ));
        }

        // two languages: any switch is a toggle
        let lang = page.toggle_language();
        Ok(tagged(
            "LANG",
            &format!("Language changed to: {}", lang.code().to_uppercase()),
        ))
    }

    fn priority(&self) -> u8 {
        70
    }
}
