// src/i18n/catalog.rs
use crate::core::error::{AppError, Result};
use crate::i18n::error::TranslationError;
use crate::i18n::langs;
use crate::i18n::types::LanguageCode;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

type Messages = HashMap<String, String>;

/// Per-language key → text table of canned UI strings.
///
/// Both languages always carry the same key set; every constructor checks
/// this and refuses a catalog where one language is missing keys the other
/// has.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<LanguageCode, Messages>,
}

impl MessageCatalog {
    /// Catalog compiled into the binary from `src/i18n/langs/*.json`.
    pub fn embedded() -> Result<Self> {
        let mut messages = HashMap::new();
        for lang in LanguageCode::ALL {
            let data = langs::get_language_file(lang.code()).ok_or_else(|| {
                AppError::Translation(TranslationError::LoadError(format!(
                    "File not found: {}",
                    langs::file_name(lang.code())
                )))
            })?;
            let content = std::str::from_utf8(data.as_ref())
                .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))?;
            messages.insert(lang, Self::parse(lang, content)?);
        }
        Self::from_maps(messages)
    }

    /// Reads `zh.json` and `en.json` from `dir`.
    pub async fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut messages = HashMap::new();
        for lang in LanguageCode::ALL {
            let path = dir.join(langs::file_name(lang.code()));
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                AppError::Translation(TranslationError::LoadError(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            messages.insert(lang, Self::parse(lang, &content)?);
        }
        log::debug!("Catalog loaded from {}", dir.display());
        Self::from_maps(messages)
    }

    pub fn from_json(zh: &str, en: &str) -> Result<Self> {
        let mut messages = HashMap::new();
        messages.insert(LanguageCode::Zh, Self::parse(LanguageCode::Zh, zh)?);
        messages.insert(LanguageCode::En, Self::parse(LanguageCode::En, en)?);
        Self::from_maps(messages)
    }

    pub fn from_maps(messages: HashMap<LanguageCode, Messages>) -> Result<Self> {
        let catalog = Self { messages };
        catalog.validate()?;
        log::debug!(
            "Message catalog ready: {} keys x {} languages",
            catalog.len(),
            LanguageCode::ALL.len()
        );
        Ok(catalog)
    }

    fn parse(lang: LanguageCode, content: &str) -> Result<Messages> {
        serde_json::from_str(content).map_err(|e| {
            AppError::Translation(TranslationError::LoadError(format!(
                "Failed to parse {}: {}",
                langs::file_name(lang.code()),
                e
            )))
        })
    }

    fn validate(&self) -> Result<()> {
        for lang in LanguageCode::ALL {
            if !self.messages.contains_key(&lang) {
                return Err(AppError::Translation(TranslationError::ConfigError(
                    format!("no messages for language '{}'", lang),
                )));
            }
        }

        let problems: Vec<String> = LanguageCode::ALL
            .iter()
            .filter_map(|&lang| {
                let missing = self.missing_in(lang);
                (!missing.is_empty()).then(|| {
                    format!(
                        "keys missing from '{}': {}",
                        lang,
                        missing.into_iter().collect::<Vec<_>>().join(", ")
                    )
                })
            })
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Translation(TranslationError::ConfigError(
                problems.join("; "),
            )))
        }
    }

    /// Keys present in the other language but absent from `lang`.
    fn missing_in(&self, lang: LanguageCode) -> BTreeSet<&str> {
        let own = &self.messages[&lang];
        self.messages[&lang.other()]
            .keys()
            .filter(|key| !own.contains_key(*key))
            .map(String::as_str)
            .collect()
    }

    pub fn get(&self, lang: LanguageCode, key: &str) -> Option<&str> {
        self.messages
            .get(&lang)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// Text for `key` in `lang`, or `key` itself when the catalog has no entry.
    pub fn lookup<'a>(&'a self, lang: LanguageCode, key: &'a str) -> &'a str {
        match self.get(lang, key) {
            Some(text) => text,
            None => {
                log::trace!("No message for '{}' in {}, using key", key, lang);
                key
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages[&LanguageCode::PRIMARY].contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.messages[&LanguageCode::PRIMARY]
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.messages[&LanguageCode::PRIMARY].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
