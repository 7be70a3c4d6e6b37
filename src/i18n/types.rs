// src/i18n/types.rs
use crate::i18n::error::TranslationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two display languages a page can be shown in.
///
/// `Zh` is the primary language and the state every page starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Zh,
    En,
}

impl LanguageCode {
    pub const PRIMARY: LanguageCode = LanguageCode::Zh;
    pub const SECONDARY: LanguageCode = LanguageCode::En;
    pub const ALL: [LanguageCode; 2] = [LanguageCode::Zh, LanguageCode::En];

    pub fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Value written to the document's `lang` attribute.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
        }
    }

    pub fn text_attribute(self) -> &'static str {
        match self {
            Self::Zh => "data-zh",
            Self::En => "data-en",
        }
    }

    pub fn placeholder_attribute(self) -> &'static str {
        match self {
            Self::Zh => "data-zh-placeholder",
            Self::En => "data-en-placeholder",
        }
    }

    /// Button label offering a switch *to* this language.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Zh => "🌐 中文",
            Self::En => "🌐 EN",
        }
    }

    pub fn other(self) -> LanguageCode {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            _ => Err(TranslationError::InvalidLanguage(s.to_string())),
        }
    }
}

/// Current display language of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    current: LanguageCode,
}

impl LanguageState {
    pub fn new() -> Self {
        Self {
            current: LanguageCode::PRIMARY,
        }
    }

    pub fn current(&self) -> LanguageCode {
        self.current
    }

    pub fn toggle(&mut self) -> LanguageCode {
        self.current = self.current.other();
        self.current
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_primary() {
        assert_eq!(LanguageState::new().current(), LanguageCode::Zh);
    }

    #[test]
    fn toggle_parity() {
        let mut state = LanguageState::new();
        for n in 1..=7 {
            state.toggle();
            let expected = if n % 2 == 1 {
                LanguageCode::SECONDARY
            } else {
                LanguageCode::PRIMARY
            };
            assert_eq!(state.current(), expected, "after {} toggles", n);
        }
    }

    #[test]
    fn attributes_follow_code() {
        assert_eq!(LanguageCode::Zh.text_attribute(), "data-zh");
        assert_eq!(LanguageCode::En.placeholder_attribute(), "data-en-placeholder");
        assert_eq!(LanguageCode::Zh.locale_tag(), "zh-CN");
        assert_eq!(LanguageCode::En.locale_tag(), "en");
    }

    #[test]
    fn parse_codes() {
        assert_eq!("ZH".parse::<LanguageCode>().ok(), Some(LanguageCode::Zh));
        assert_eq!("zh-CN".parse::<LanguageCode>().ok(), Some(LanguageCode::Zh));
        assert_eq!(" en ".parse::<LanguageCode>().ok(), Some(LanguageCode::En));
        assert!(matches!(
            "de".parse::<LanguageCode>(),
            Err(TranslationError::InvalidLanguage(_))
        ));
    }
}
