// src/page/localizer.rs
use crate::core::config::Config;
use crate::core::constants::{
    DEFAULT_CONTAINER_CLASS, DEFAULT_DISMISS_MS, DEFAULT_MESSAGE_KIND, DEFAULT_TOGGLE_ID,
};
use crate::i18n::{LanguageCode, LanguageState, MessageCatalog};
use crate::page::localize::{apply_to, ApplyReport};
use crate::page::lock_surface;
use crate::page::notice::TransientMessage;
use crate::page::surface::Surface;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Page-level knobs the toggle needs besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub toggle_id: String,
    pub container_class: String,
    pub dismiss_after: Duration,
    pub default_kind: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            toggle_id: DEFAULT_TOGGLE_ID.into(),
            container_class: DEFAULT_CONTAINER_CLASS.into(),
            dismiss_after: Duration::from_millis(DEFAULT_DISMISS_MS),
            default_kind: DEFAULT_MESSAGE_KIND.into(),
        }
    }
}

impl From<&Config> for PageSettings {
    fn from(config: &Config) -> Self {
        Self {
            toggle_id: config.toggle_id.clone(),
            container_class: config.container_class.clone(),
            dismiss_after: config.dismiss_after,
            default_kind: config.default_kind.clone(),
        }
    }
}

/// Switches a page between its two languages and serves catalog strings in
/// whichever one is active.
///
/// Construct one per page at startup and call [`init`](Self::init) once the
/// page content is available.
pub struct LocalizationToggle<S: Surface> {
    state: LanguageState,
    catalog: Arc<MessageCatalog>,
    surface: Arc<Mutex<S>>,
    settings: PageSettings,
}

impl<S: Surface> LocalizationToggle<S> {
    pub fn new(catalog: Arc<MessageCatalog>, surface: S, settings: PageSettings) -> Self {
        Self::with_shared_surface(catalog, Arc::new(Mutex::new(surface)), settings)
    }

    pub fn with_shared_surface(
        catalog: Arc<MessageCatalog>,
        surface: Arc<Mutex<S>>,
        settings: PageSettings,
    ) -> Self {
        Self {
            state: LanguageState::new(),
            catalog,
            surface,
            settings,
        }
    }

    /// Page-loaded hook: localizes the page and labels the toggle control.
    pub fn init(&self) -> ApplyReport {
        let report = self.apply_localization();
        self.refresh_toggle_label();
        log::info!(
            "Page initialized in {} ({} elements)",
            self.current_language(),
            report.elements()
        );
        report
    }

    pub fn current_language(&self) -> LanguageCode {
        self.state.current()
    }

    /// Flips the active language and re-renders the page in it.
    pub fn toggle_language(&mut self) -> LanguageCode {
        let lang = self.state.toggle();
        let report = self.apply_localization();
        self.refresh_toggle_label();
        log::debug!(
            "Language toggled to {} ({} texts, {} placeholders, title: {})",
            lang,
            report.texts,
            report.placeholders,
            report.title
        );
        lang
    }

    pub fn apply_localization(&self) -> ApplyReport {
        apply_to(&mut *lock_surface(&self.surface), self.current_language())
    }

    /// Labels the toggle control with the language it would switch to.
    /// Returns `false` when the page has no such control.
    pub fn refresh_toggle_label(&self) -> bool {
        let label = self.current_language().other().switch_label();
        let found = lock_surface(&self.surface).set_label(&self.settings.toggle_id, label);
        if !found {
            log::trace!("No toggle control '{}' on page", self.settings.toggle_id);
        }
        found
    }

    /// Catalog text for `key` in the active language, or `key` unchanged.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.lookup(self.current_language(), key)
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    /// Runs `f` with the surface locked.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = lock_surface(&self.surface);
        f(&*guard)
    }
}

impl<S: Surface + Send + 'static> LocalizationToggle<S> {
    /// Shows the localized text for `key` at the top of the message
    /// container with style class `kind`, removed again after the
    /// configured delay.
    ///
    /// Outside a tokio runtime the message is still shown but stays until
    /// [`dismiss`](Self::dismiss) removes it.
    pub fn show_transient_message(&self, key: &str, kind: &str) -> TransientMessage {
        let text = self.lookup(key);
        let node = lock_surface(&self.surface).prepend_message(
            &self.settings.container_class,
            kind,
            text,
        );
        log::debug!("Message '{}' ({}) shown as {:?}", key, kind, node);
        TransientMessage::schedule(self.surface(), node, self.settings.dismiss_after)
    }

    /// [`show_transient_message`](Self::show_transient_message) with the
    /// default kind.
    pub fn show_message(&self, key: &str) -> TransientMessage {
        let kind = self.settings.default_kind.clone();
        self.show_transient_message(key, &kind)
    }

    /// Removes a message right away and cancels its timer.
    pub fn dismiss(&self, message: TransientMessage) -> bool {
        message.cancel();
        lock_surface(&self.surface).remove(message.node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::document::{Document, ElementSpec, PageSpec};

    fn toggle_for(page: PageSpec) -> LocalizationToggle<Document> {
        let catalog = Arc::new(MessageCatalog::embedded().unwrap());
        LocalizationToggle::new(catalog, Document::from_spec(&page), PageSettings::default())
    }

    fn page() -> PageSpec {
        PageSpec {
            lang: None,
            title: Some(ElementSpec::new("title").attr("data-en", "Dashboard")),
            body: vec![
                ElementSpec::new("button").id("languageToggle"),
                ElementSpec::new("div")
                    .class("container")
                    .child(ElementSpec::new("h2").id("h").localized("课程", "Course"))
                    .child(
                        ElementSpec::new("input")
                            .id("q")
                            .localized_placeholder("搜索", "Search"),
                    ),
            ],
        }
    }

    #[test]
    fn init_applies_primary() {
        let toggle = toggle_for(page());
        let report = toggle.init();

        assert_eq!(report.texts, 1);
        assert_eq!(report.placeholders, 1);
        // only an English title variant exists
        assert!(!report.title);

        toggle.with_surface(|doc| {
            assert_eq!(doc.text(doc.find_by_id("h").unwrap()), Some("课程"));
            assert_eq!(doc.placeholder(doc.find_by_id("q").unwrap()), Some("搜索"));
            assert_eq!(doc.text(doc.find_by_id("languageToggle").unwrap()), Some("🌐 EN"));
            assert_eq!(doc.language(), Some("zh-CN"));
            assert_eq!(doc.title(), "");
        });
    }

    #[test]
    fn toggle_rewrites_page() {
        let mut toggle = toggle_for(page());
        toggle.init();

        assert_eq!(toggle.toggle_language(), LanguageCode::En);
        toggle.with_surface(|doc| {
            assert_eq!(doc.text(doc.find_by_id("h").unwrap()), Some("Course"));
            assert_eq!(doc.placeholder(doc.find_by_id("q").unwrap()), Some("Search"));
            assert_eq!(doc.text(doc.find_by_id("languageToggle").unwrap()), Some("🌐 中文"));
            assert_eq!(doc.language(), Some("en"));
            assert_eq!(doc.title(), "Dashboard");
        });

        assert_eq!(toggle.toggle_language(), LanguageCode::Zh);
        toggle.with_surface(|doc| {
            // no Chinese title variant, so the English one stays
            assert_eq!(doc.title(), "Dashboard");
            assert_eq!(doc.language(), Some("zh-CN"));
        });
    }

    #[test]
    fn lookup_follows_language() {
        let mut toggle = toggle_for(PageSpec::default());
        assert_eq!(toggle.lookup("login_success"), "登录成功！");
        toggle.toggle_language();
        assert_eq!(toggle.lookup("login_success"), "Login successful!");
        assert_eq!(toggle.lookup("nonexistent_key"), "nonexistent_key");
    }

    #[test]
    fn missing_toggle_control_is_skipped() {
        let toggle = toggle_for(PageSpec::default());
        assert!(!toggle.refresh_toggle_label());
    }

    #[test]
    fn message_without_runtime_stays_until_dismissed() {
        let toggle = toggle_for(page());
        let message = toggle.show_message("success");
        let node = message.node();

        assert!(!message.is_scheduled());
        toggle.with_surface(|doc| assert_eq!(doc.text(node), Some("成功")));

        assert!(toggle.dismiss(message));
        assert!(!toggle.with_surface(|doc| doc.contains(node)));
    }

    #[test]
    fn settings_from_config() {
        let config = Config::from_toml("[page]\ncontainer_class = \"alerts\"\n").unwrap();
        let settings = PageSettings::from(&config);
        assert_eq!(settings.container_class, "alerts");
        assert_eq!(settings.toggle_id, DEFAULT_TOGGLE_ID);
    }
}
