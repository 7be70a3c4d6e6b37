// src/page/surface.rs
use crate::i18n::LanguageCode;

/// Handle to a node owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Property of an element that a localized value is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Text,
    Placeholder,
}

/// The two author-supplied variants of a localizable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
    pub zh: String,
    pub en: String,
}

impl Variants {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    pub fn pick(&self, lang: LanguageCode) -> &str {
        match lang {
            LanguageCode::Zh => &self.zh,
            LanguageCode::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableElement {
    pub node: NodeId,
    pub target: Target,
    pub variants: Variants,
}

/// Per-language title values carried by the page's title element.
///
/// Unlike body elements the title does not need both variants; a missing or
/// empty variant leaves the current title in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSource {
    pub zh: Option<String>,
    pub en: Option<String>,
}

impl TitleSource {
    pub fn pick(&self, lang: LanguageCode) -> Option<&str> {
        let value = match lang {
            LanguageCode::Zh => self.zh.as_deref(),
            LanguageCode::En => self.en.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// What the localizer needs from whatever renders the page.
///
/// Lookups of absent elements return `None`/`false`; none of these calls
/// can fail.
pub trait Surface {
    /// Elements carrying both text attributes or both placeholder
    /// attributes, in document order.
    fn localizable_elements(&self) -> Vec<LocalizableElement>;

    fn assign(&mut self, node: NodeId, target: Target, value: &str);

    fn title_source(&self) -> Option<TitleSource>;
    fn set_title(&mut self, title: &str);

    fn document_language(&self) -> Option<&str>;
    fn set_document_language(&mut self, tag: &str);

    /// Sets the text of the element with this id. `false` if there is none.
    fn set_label(&mut self, element_id: &str, label: &str) -> bool;

    /// Inserts a message node as the first child of the first element with
    /// `container_class`, or of the body when no such element exists.
    fn prepend_message(&mut self, container_class: &str, class: &str, text: &str) -> NodeId;

    fn remove(&mut self, node: NodeId) -> bool;
}
