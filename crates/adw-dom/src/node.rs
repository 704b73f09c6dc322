// File: src/node.rs
// Purpose: Owned element / text tree

use crate::escape::{decode_entities, escape_attr, escape_text};
use std::fmt;

/// Elements that never have children or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on output
    Text(String),
    /// Markup emitted verbatim (parsed text, doctype, script bodies)
    Raw(String),
    Comment(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Node::Raw(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// True for text nodes holding only whitespace
    pub fn is_whitespace(&self) -> bool {
        match self {
            Node::Text(t) | Node::Raw(t) => t.trim().is_empty(),
            _ => false,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Raw(t) => out.push_str(&decode_entities(t)),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Comment(_) => {}
        }
    }

    /// Serializes this node into `out`
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(t) => escape_text(t, out),
            Node::Raw(t) => out.push_str(t),
            Node::Comment(c) => {
                out.push_str("<!--");
                out.push_str(c);
                out.push_str("-->");
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with ordered attributes and owned children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets the attribute only when `value` is Some
    pub fn with_opt_attr(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with_attr(name, v),
            None => self,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k == name)
    }

    /// Replaces an existing value in place or appends a new attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(k, _)| k == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Attributes in source order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// HTML boolean attribute semantics: present and not `"false"`
    pub fn flag(&self, name: &str) -> bool {
        self.attr(name)
            .map(|v| !v.eq_ignore_ascii_case("false"))
            .unwrap_or(false)
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        let missing: Vec<&str> = class
            .split_whitespace()
            .filter(|c| !self.has_class(c))
            .collect();
        if missing.is_empty() {
            return;
        }
        let joined = self
            .classes()
            .chain(missing)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", joined);
    }

    // ========================================================================
    // Children
    // ========================================================================

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Child elements assigned to `slot`
    pub fn slotted<'a>(&'a self, slot: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements()
            .filter(move |el| el.attr("slot") == Some(slot))
    }

    /// Child nodes outside the `known` slots
    ///
    /// Elements naming a slot that is not in `known` are included, so content
    /// with a mistyped slot name still has somewhere to go.
    pub fn outside_slots<'a>(&'a self, known: &'a [&'a str]) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |node| match node {
            Node::Element(el) => el.attr("slot").map_or(true, |slot| !known.contains(&slot)),
            _ => true,
        })
    }

    /// True when the element has element children or non-blank text
    pub fn has_content(&self) -> bool {
        self.children.iter().any(|n| match n {
            Node::Comment(_) => false,
            other => !other.is_whitespace(),
        })
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl maud::Render for Node {
    fn render_to(&self, buffer: &mut String) {
        self.write_html(buffer);
    }
}

impl maud::Render for Element {
    fn render_to(&self, buffer: &mut String) {
        self.write_html(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_and_serialize() {
        let el = Element::new("button")
            .with_attr("type", "button")
            .with_class("adw-button")
            .with_class("flat")
            .with_text("Save & quit");
        assert_eq!(
            el.to_html(),
            r#"<button type="button" class="adw-button flat">Save &amp; quit</button>"#
        );
    }

    #[test]
    fn test_empty_attribute_is_bare() {
        let el = Element::new("button").with_attr("disabled", "");
        assert_eq!(el.to_html(), "<button disabled></button>");
    }

    #[test]
    fn test_void_element() {
        let el = Element::new("img").with_attr("src", "a.png");
        assert_eq!(el.to_html(), r#"<img src="a.png">"#);
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut el = Element::new("a").with_attr("href", "#/").with_attr("id", "x");
        el.set_attr("href", "#/login");
        let attrs: Vec<_> = el.attributes().collect();
        assert_eq!(attrs, vec![("href", "#/login"), ("id", "x")]);
    }

    #[test]
    fn test_add_class_deduplicates() {
        let mut el = Element::new("div").with_class("a b");
        el.add_class("b c");
        assert_eq!(el.attr("class"), Some("a b c"));
    }

    #[test]
    fn test_flag() {
        let el = Element::new("x")
            .with_attr("disabled", "")
            .with_attr("open", "false");
        assert!(el.flag("disabled"));
        assert!(!el.flag("open"));
        assert!(!el.flag("missing"));
    }

    #[test]
    fn test_slotted_and_outside_slots() {
        let el = Element::new("adw-header-bar")
            .with_child(Element::new("span").with_attr("slot", "start"))
            .with_child(Node::text("hello"))
            .with_child(Element::new("em"))
            .with_child(Element::new("b").with_attr("slot", "right"));
        assert_eq!(el.slotted("start").count(), 1);
        assert_eq!(el.slotted("end").count(), 0);
        assert_eq!(el.outside_slots(&["start", "end"]).count(), 3);
        assert_eq!(el.outside_slots(&["start", "right"]).count(), 2);
    }

    #[test]
    fn test_maud_render_bridge() {
        let badge = Element::new("span").with_class("badge").with_text("3");
        let markup = maud::html! { p { (badge) } };
        assert_eq!(markup.into_string(), r#"<p><span class="badge">3</span></p>"#);
    }
}
