// src/page/localize.rs
use crate::i18n::LanguageCode;
use crate::page::surface::{Surface, Target};

/// What a single localization pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub texts: usize,
    pub placeholders: usize,
    pub title: bool,
}

impl ApplyReport {
    pub fn elements(&self) -> usize {
        self.texts + self.placeholders
    }
}

/// Writes the `lang` variant of every localizable element, the title and
/// the document language tag.
pub fn apply_to<S: Surface + ?Sized>(surface: &mut S, lang: LanguageCode) -> ApplyReport {
    let mut report = ApplyReport::default();

    for element in surface.localizable_elements() {
        surface.assign(element.node, element.target, element.variants.pick(lang));
        match element.target {
            Target::Text => report.texts += 1,
            Target::Placeholder => report.placeholders += 1,
        }
    }

    if let Some(source) = surface.title_source() {
        if let Some(title) = source.pick(lang) {
            surface.set_title(title);
            report.title = true;
        }
    }

    if surface.document_language() != Some(lang.locale_tag()) {
        surface.set_document_language(lang.locale_tag());
    }

    report
}
