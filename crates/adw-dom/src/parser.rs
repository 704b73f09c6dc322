// File: src/parser.rs
// Purpose: Tolerant HTML fragment parser producing an owned node tree

use crate::escape::decode_entities;
use crate::node::{Element, Node};
use once_cell::sync::Lazy;
use regex::Regex;

static START_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^<([A-Za-z][A-Za-z0-9:_-]*)((?:\s+[^\s"'<>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
    )
    .unwrap()
});

static END_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^</([A-Za-z][A-Za-z0-9:_-]*)\s*>").unwrap());

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#).unwrap()
});

/// Elements whose content is kept as raw text
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Parses an HTML fragment into nodes
///
/// The parser never fails. Unmatched end tags are dropped, unclosed
/// elements are closed at the end of input, and a `<` that does not start a
/// tag is kept as text.
pub fn parse_fragment(input: &str) -> Vec<Node> {
    let mut builder = TreeBuilder::default();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if let Some(body) = rest.strip_prefix("<!--") {
            let (comment, consumed) = match body.find("-->") {
                Some(end) => (&body[..end], 4 + end + 3),
                None => (body, rest.len()),
            };
            builder.push(Node::Comment(comment.to_string()));
            pos += consumed;
            continue;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let consumed = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            builder.push(Node::Raw(rest[..consumed].to_string()));
            pos += consumed;
            continue;
        }

        if let Some(caps) = END_TAG.captures(rest) {
            builder.close(&caps[1].to_ascii_lowercase());
            pos += caps[0].len();
            continue;
        }

        if let Some(caps) = START_TAG.captures(rest) {
            let mut element = Element::new(&caps[1]);
            for attr in ATTRIBUTE.captures_iter(&caps[2]) {
                let value = attr
                    .get(2)
                    .or_else(|| attr.get(3))
                    .or_else(|| attr.get(4))
                    .map(|m| decode_entities(m.as_str()))
                    .unwrap_or_default();
                if !element.has_attr(&attr[1].to_ascii_lowercase()) {
                    element.set_attr(&attr[1], value);
                }
            }
            pos += caps[0].len();

            let self_closing = !caps[3].is_empty();
            if element.is_void() || self_closing {
                builder.push(Node::Element(element));
            } else if RAW_TEXT_ELEMENTS.contains(&element.tag.as_str()) {
                let closing = format!("</{}", element.tag);
                let body = &input[pos..];
                let end = find_ascii_ci(body, &closing).unwrap_or(body.len());
                if end > 0 {
                    element.children.push(Node::Raw(body[..end].to_string()));
                }
                pos += end;
                pos += input[pos..].find('>').map(|i| i + 1).unwrap_or(input.len() - pos);
                builder.push(Node::Element(element));
            } else {
                builder.open(element);
            }
            continue;
        }

        // Text runs to the next '<' that is not at the current position
        let end = rest.as_bytes()[1..]
            .iter()
            .position(|&b| b == b'<')
            .map(|i| i + 1)
            .unwrap_or(rest.len());
        builder.push_text(&rest[..end]);
        pos += end;
    }

    builder.finish()
}

fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn current_children(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(el) => &mut el.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, node: Node) {
        self.current_children().push(node);
    }

    fn push_text(&mut self, text: &str) {
        let children = self.current_children();
        if let Some(Node::Raw(last)) = children.last_mut() {
            last.push_str(text);
        } else {
            children.push(Node::Raw(text.to_string()));
        }
    }

    fn open(&mut self, element: Element) {
        self.open.push(element);
    }

    fn close(&mut self, tag: &str) {
        let Some(index) = self.open.iter().rposition(|el| el.tag == tag) else {
            tracing::debug!("Ignoring unmatched end tag </{}>", tag);
            return;
        };
        while self.open.len() > index {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        if let Some(element) = self.open.pop() {
            self.push(Node::Element(element));
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.root
    }
}
