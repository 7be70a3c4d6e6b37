// src/page/document.rs
use crate::core::error::{AppError, Result};
use crate::i18n::LanguageCode;
use crate::page::surface::{
    LocalizableElement, NodeId, Surface, Target, TitleSource, Variants,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const DEMO_PAGE: &str = include_str!("pages/login.json");
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// Declarative description of an element, used both as a builder and as the
/// JSON page file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    /// Space separated class list.
    pub class: Option<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl Default for ElementSpec {
    fn default() -> Self {
        Self {
            tag: "div".into(),
            id: None,
            class: None,
            attrs: BTreeMap::new(),
            text: None,
            placeholder: None,
            children: Vec::new(),
        }
    }
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Adds the `data-zh`/`data-en` text pair.
    pub fn localized(self, zh: &str, en: &str) -> Self {
        self.attr(LanguageCode::Zh.text_attribute(), zh)
            .attr(LanguageCode::En.text_attribute(), en)
    }

    /// Adds the `data-zh-placeholder`/`data-en-placeholder` pair.
    pub fn localized_placeholder(self, zh: &str, en: &str) -> Self {
        self.attr(LanguageCode::Zh.placeholder_attribute(), zh)
            .attr(LanguageCode::En.placeholder_attribute(), en)
    }
}

/// A whole page: `<html lang>`, an optional `<title>` and the body content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    pub lang: Option<String>,
    pub title: Option<ElementSpec>,
    pub body: Vec<ElementSpec>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
            placeholder: None,
            parent: None,
            children: Vec::new(),
        }
    }

    fn from_spec(spec: &ElementSpec) -> Self {
        Self {
            id: spec.id.clone(),
            classes: spec
                .class
                .as_deref()
                .map(|c| c.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            attributes: spec.attrs.clone(),
            text: spec.text.clone(),
            placeholder: spec.placeholder.clone(),
            ..Self::new(&spec.tag)
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn variants(&self, zh_attr: &str, en_attr: &str) -> Option<Variants> {
        Some(Variants::new(self.attribute(zh_attr)?, self.attribute(en_attr)?))
    }
}

/// In-memory page model implementing [`Surface`].
///
/// Nodes live in an arena; removed nodes leave a tombstone so ids are never
/// reused. Writes that would not change anything are skipped, and
/// [`Document::revision`] counts the ones that did.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    title_node: Option<NodeId>,
    /// Title of a page without a `<title>` element.
    detached_title: String,
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Some(Node::new("html"))],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            title_node: None,
            detached_title: String::new(),
            revision: 0,
        };
        doc.head = doc.insert_node(doc.root, Node::new("head"), None);
        doc.body = doc.insert_node(doc.root, Node::new("body"), None);
        doc.revision = 0;
        doc
    }

    pub fn from_spec(spec: &PageSpec) -> Self {
        let mut doc = Self::new();

        if let Some(lang) = &spec.lang {
            let root = doc.root;
            if let Some(node) = doc.node_mut(root) {
                node.attributes.insert("lang".into(), lang.clone());
            }
        }

        if let Some(title) = &spec.title {
            let title_spec = ElementSpec {
                tag: "title".into(),
                ..title.clone()
            };
            let id = doc.append(doc.head, &title_spec);
            doc.title_node = Some(id);
        }

        for element in &spec.body {
            doc.append(doc.body, element);
        }

        // building is not a mutation of the loaded page
        doc.revision = 0;
        doc
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: PageSpec = serde_json::from_str(json)
            .map_err(|e| AppError::Validation(format!("Page JSON: {}", e)))?;
        Ok(Self::from_spec(&spec))
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(AppError::Io)?;
        let doc = Self::from_json(&content)?;
        log::debug!("Page loaded from {}", path.display());
        Ok(doc)
    }

    /// The bundled login page.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_PAGE)
    }

    /// Appends `spec` and its subtree as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, spec: &ElementSpec) -> NodeId {
        let id = self.insert_node(parent, Node::from_spec(spec), None);
        for child in &spec.children {
            self.append(id, child);
        }
        id
    }

    fn insert_node(&mut self, parent: NodeId, mut node: Node, index: Option<usize>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(Some(node));
        if let Some(parent) = self.node_mut(parent) {
            match index {
                Some(i) => parent.children.insert(i.min(parent.children.len()), id),
                None => parent.children.push(id),
            }
        }
        self.revision += 1;
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.text.as_deref())
    }

    pub fn placeholder(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.placeholder.as_deref())
    }

    /// Text of the `<title>` element, like `document.title`.
    pub fn title(&self) -> &str {
        match self.title_node {
            Some(id) => self.text(id).unwrap_or_default(),
            None => &self.detached_title,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.node(self.root).and_then(|n| n.attribute("lang"))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Live nodes in document order.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                order.push(id);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    pub fn find_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&id| self.node(id).and_then(|n| n.id.as_deref()) == Some(element_id))
    }

    pub fn find_by_class(&self, class: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&id| self.node(id).is_some_and(|n| n.has_class(class)))
    }

    fn detach_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
    }

    fn replace_text(&mut self, id: NodeId, value: &str) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        if node.text.as_deref() == Some(value) && node.children.is_empty() {
            return false;
        }

        // like textContent, the new text replaces any child elements
        let children = node.children.clone();
        for child in children {
            self.detach_subtree(child);
        }
        if let Some(node) = self.node_mut(id) {
            node.children.clear();
            node.text = Some(value.into());
        }
        true
    }

    /// HTML-like rendering of the current page.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        let indent = "  ".repeat(depth);

        let mut open = format!("<{}", node.tag);
        if let Some(element_id) = &node.id {
            open.push_str(&format!(" id=\"{}\"", escape(element_id)));
        }
        if !node.classes.is_empty() {
            open.push_str(&format!(" class=\"{}\"", escape(&node.classes.join(" "))));
        }
        for (name, value) in &node.attributes {
            open.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        if let Some(placeholder) = &node.placeholder {
            open.push_str(&format!(" placeholder=\"{}\"", escape(placeholder)));
        }

        if VOID_TAGS.contains(&node.tag.as_str()) {
            out.push_str(&format!("{}{}/>\n", indent, open));
            return;
        }

        let text = node.text.as_deref().map(escape).unwrap_or_default();
        if node.children.is_empty() {
            out.push_str(&format!("{}{}>{}</{}>\n", indent, open, text, node.tag));
            return;
        }

        out.push_str(&format!("{}{}>\n", indent, open));
        if !text.is_empty() {
            out.push_str(&format!("{}  {}\n", indent, text));
        }
        for &child in &node.children {
            self.render_node(child, depth + 1, out);
        }
        out.push_str(&format!("{}</{}>\n", indent, node.tag));
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Document {
    fn localizable_elements(&self) -> Vec<LocalizableElement> {
        let (zh, en) = (LanguageCode::Zh, LanguageCode::En);
        let mut texts = Vec::new();
        let mut placeholders = Vec::new();

        for id in self.walk() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if let Some(variants) = node.variants(zh.text_attribute(), en.text_attribute()) {
                texts.push(LocalizableElement {
                    node: id,
                    target: Target::Text,
                    variants,
                });
            }
            if let Some(variants) =
                node.variants(zh.placeholder_attribute(), en.placeholder_attribute())
            {
                placeholders.push(LocalizableElement {
                    node: id,
                    target: Target::Placeholder,
                    variants,
                });
            }
        }

        texts.extend(placeholders);
        texts
    }

    fn assign(&mut self, node: NodeId, target: Target, value: &str) {
        let changed = match target {
            Target::Text => self.replace_text(node, value),
            Target::Placeholder => match self.node_mut(node) {
                Some(n) if n.placeholder.as_deref() != Some(value) => {
                    n.placeholder = Some(value.into());
                    true
                }
                _ => false,
            },
        };
        if changed {
            self.revision += 1;
        }
    }

    fn title_source(&self) -> Option<TitleSource> {
        let node = self.node(self.title_node?)?;
        Some(TitleSource {
            zh: node.attribute(LanguageCode::Zh.text_attribute()).map(str::to_string),
            en: node.attribute(LanguageCode::En.text_attribute()).map(str::to_string),
        })
    }

    fn set_title(&mut self, title: &str) {
        if self.title() == title {
            return;
        }
        match self.title_node {
            Some(id) => {
                self.replace_text(id, title);
            }
            None => self.detached_title = title.into(),
        }
        self.revision += 1;
    }

    fn document_language(&self) -> Option<&str> {
        self.language()
    }

    fn set_document_language(&mut self, tag: &str) {
        if self.language() == Some(tag) {
            return;
        }
        let root = self.root;
        if let Some(node) = self.node_mut(root) {
            node.attributes.insert("lang".into(), tag.into());
            self.revision += 1;
        }
    }

    fn set_label(&mut self, element_id: &str, label: &str) -> bool {
        match self.find_by_id(element_id) {
            Some(id) => {
                if self.replace_text(id, label) {
                    self.revision += 1;
                }
                true
            }
            None => false,
        }
    }

    fn prepend_message(&mut self, container_class: &str, class: &str, text: &str) -> NodeId {
        let container = self.find_by_class(container_class).unwrap_or(self.body);
        let spec = ElementSpec::new("div").class(class).text(text);
        self.insert_node(container, Node::from_spec(&spec), Some(0))
    }

    fn remove(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return false;
        };
        if node == self.head || node == self.body {
            return false;
        }
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|&c| c != node);
        }
        if self.title_node == Some(node) {
            self.detached_title = self.title().to_string();
            self.title_node = None;
        }
        self.detach_subtree(node);
        self.revision += 1;
        true
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_spec(&PageSpec {
            lang: Some("zh-CN".into()),
            title: Some(
                ElementSpec::new("title")
                    .localized("登录", "Login")
                    .text("登录"),
            ),
            body: vec![ElementSpec::new("div")
                .class("container card")
                .child(ElementSpec::new("h1").id("heading").localized("欢迎", "Welcome"))
                .child(
                    ElementSpec::new("input")
                        .id("username")
                        .localized_placeholder("用户名", "Username"),
                )],
        })
    }

    #[test]
    fn building_does_not_count_as_mutation() {
        let doc = sample();
        assert_eq!(doc.revision(), 0);
        assert_eq!(doc.title(), "登录");
        assert_eq!(doc.language(), Some("zh-CN"));
    }

    #[test]
    fn localizable_elements_in_document_order() {
        let doc = sample();
        let elements = doc.localizable_elements();
        let targets: Vec<Target> = elements.iter().map(|e| e.target).collect();

        // title, h1, then the placeholder pass
        assert_eq!(targets, vec![Target::Text, Target::Text, Target::Placeholder]);
        assert_eq!(elements[1].variants.pick(LanguageCode::En), "Welcome");
        assert_eq!(Some(elements[1].node), doc.find_by_id("heading"));
    }

    #[test]
    fn unchanged_writes_are_skipped() {
        let mut doc = sample();
        let heading = doc.find_by_id("heading").unwrap();

        doc.assign(heading, Target::Text, "欢迎");
        assert_eq!(doc.revision(), 1);
        doc.assign(heading, Target::Text, "欢迎");
        assert_eq!(doc.revision(), 1);

        doc.set_document_language("zh-CN");
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn text_replaces_children() {
        let mut doc = sample();
        let container = doc.find_by_class("container").unwrap();
        let heading = doc.find_by_id("heading").unwrap();

        doc.assign(container, Target::Text, "plain");
        assert!(doc.children(container).is_empty());
        assert!(!doc.contains(heading));
    }

    #[test]
    fn prepend_and_remove_message() {
        let mut doc = sample();
        let container = doc.find_by_class("container").unwrap();

        let msg = doc.prepend_message("container", "error", "错误");
        assert_eq!(doc.children(container)[0], msg);
        assert_eq!(doc.text(msg), Some("错误"));
        assert!(doc.node(msg).unwrap().has_class("error"));

        assert!(doc.remove(msg));
        assert!(!doc.contains(msg));
        assert!(!doc.remove(msg));
        assert_ne!(doc.children(container).first(), Some(&msg));
    }

    #[test]
    fn message_falls_back_to_body() {
        let mut doc = Document::new();
        let msg = doc.prepend_message("container", "info", "hi");
        assert_eq!(doc.children(doc.body()), &[msg]);
    }

    #[test]
    fn title_follows_title_element_text() {
        let mut doc = Document::from_spec(&PageSpec {
            lang: None,
            title: Some(
                ElementSpec::new("title")
                    .localized("", "Dashboard")
                    .text("Dashboard"),
            ),
            body: Vec::new(),
        });
        assert_eq!(doc.title(), "Dashboard");

        crate::page::localize::apply_to(&mut doc, LanguageCode::Zh);

        // the empty variant is written as element text, so the title is empty too
        assert_eq!(doc.title(), "");
        assert!(doc.render().contains("data-zh=\"\"></title>"));

        crate::page::localize::apply_to(&mut doc, LanguageCode::En);
        assert_eq!(doc.title(), "Dashboard");
    }

    #[test]
    fn title_without_title_element() {
        let mut doc = Document::new();
        doc.set_title("Plain");
        assert_eq!(doc.title(), "Plain");
        assert_eq!(doc.revision(), 1);
        doc.set_title("Plain");
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn label_on_missing_element() {
        let mut doc = Document::new();
        assert!(!doc.set_label("languageToggle", "🌐 EN"));
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn render_escapes_and_closes() {
        let mut doc = sample();
        let heading = doc.find_by_id("heading").unwrap();
        doc.assign(heading, Target::Text, "<b>&</b>");

        let html = doc.render();
        assert!(html.starts_with("<html lang=\"zh-CN\">"));
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(html.contains("<input id=\"username\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn demo_page_parses() {
        let doc = Document::demo().unwrap();
        assert!(doc.find_by_id("languageToggle").is_some());
        assert!(doc.find_by_class("container").is_some());
        assert!(!doc.localizable_elements().is_empty());
    }

    #[test]
    fn bad_page_json() {
        assert!(matches!(
            Document::from_json("[1, 2]"),
            Err(AppError::Validation(_))
        ));
    }
}
