// File: src/document.rs
// Purpose: Document root with queries and in-place element replacement

use crate::node::{Element, Node};
use crate::parser::parse_fragment;
use std::fmt;

/// A parsed document or fragment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Parses markup; never fails (see [`parse_fragment`])
    pub fn parse(html: &str) -> Self {
        Self::new(parse_fragment(html))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    /// All elements in document order
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        collect(&self.children, &mut |_: &Element| true, &mut found);
        found
    }

    /// Elements with the given tag name, in document order
    pub fn elements_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect(&self.children, &mut |el: &Element| el.tag == tag, &mut found);
        found
    }

    pub fn count_tag(&self, tag: &str) -> usize {
        self.elements_by_tag(tag).len()
    }

    /// First element matching `predicate`, in document order
    pub fn find_first(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        find_in(&self.children, &predicate)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.find_first(|el| el.attr("id") == Some(id))
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_in_mut(&mut self.children, &|el: &Element| el.attr("id") == Some(id))
    }

    /// Content of `<meta name="{name}" content="...">`
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.find_first(|el| el.tag == "meta" && el.attr("name") == Some(name))
            .and_then(|el| el.attr("content"))
    }

    /// Replaces every element named `tag` with the node built by `build`
    ///
    /// Descendants are visited before their ancestors, so a nested element
    /// with the same tag is replaced first and the outer `build` sees the
    /// already replaced subtree. Each replacement is a single swap in the
    /// parent's child list. Returns the number of replacements.
    pub fn replace_elements<F>(&mut self, tag: &str, mut build: F) -> usize
    where
        F: FnMut(&Element) -> Node,
    {
        replace_in(&mut self.children, tag, &mut build)
    }
}

fn collect<'a>(
    nodes: &'a [Node],
    predicate: &mut dyn FnMut(&Element) -> bool,
    found: &mut Vec<&'a Element>,
) {
    for node in nodes {
        if let Node::Element(el) = node {
            if predicate(el) {
                found.push(el);
            }
            collect(&el.children, predicate, found);
        }
    }
}

fn find_in<'a>(nodes: &'a [Node], predicate: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    nodes.iter().find_map(|node| match node {
        Node::Element(el) if predicate(el) => Some(el),
        Node::Element(el) => find_in(&el.children, predicate),
        _ => None,
    })
}

fn find_in_mut<'a>(
    nodes: &'a mut [Node],
    predicate: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            if predicate(el) {
                return Some(el);
            }
            if let Some(found) = find_in_mut(&mut el.children, predicate) {
                return Some(found);
            }
        }
    }
    None
}

fn replace_in(
    nodes: &mut [Node],
    tag: &str,
    build: &mut dyn FnMut(&Element) -> Node,
) -> usize {
    let mut count = 0;
    for node in nodes.iter_mut() {
        let replacement = match node {
            Node::Element(el) => {
                count += replace_in(&mut el.children, tag, build);
                (el.tag == tag).then(|| build(el))
            }
            _ => None,
        };
        if let Some(replacement) = replacement {
            *node = replacement;
            count += 1;
        }
    }
    count
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl maud::Render for Document {
    fn render_to(&self, buffer: &mut String) {
        for child in &self.children {
            child.write_html(buffer);
        }
    }
}
