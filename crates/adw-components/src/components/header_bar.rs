use super::{default_button_appearance, non_empty, take_slot, take_unslotted};
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::{Element, Node};

/// Title bar with start, title and end areas (`adw-header-bar`)
///
/// Children without a slot land in the start area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBar {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub start: Vec<Node>,
    pub title_widget: Vec<Node>,
    pub end: Vec<Node>,
}

impl HeaderBar {
    /// Named slots; other children go to the start area
    pub const SLOTS: &'static [&'static str] = &["start", "title", "end"];

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_start(mut self, node: impl Into<Node>) -> Self {
        self.start.push(node.into());
        self
    }

    pub fn with_end(mut self, node: impl Into<Node>) -> Self {
        self.end.push(node.into());
        self
    }

    fn title_area(&self) -> Element {
        let mut area = Element::new("div").with_class("adw-header-bar-title-area");
        if !self.title_widget.is_empty() {
            area.children.extend(self.title_widget.iter().cloned());
            return area;
        }
        if let Some(title) = &self.title {
            area.children.push(
                Element::new("h1")
                    .with_class("adw-header-bar-title")
                    .with_text(title.as_str())
                    .into(),
            );
        }
        if let Some(subtitle) = &self.subtitle {
            area.children.push(
                Element::new("span")
                    .with_class("adw-header-bar-subtitle")
                    .with_text(subtitle.as_str())
                    .into(),
            );
        }
        area
    }
}

/// Clones a slot, defaulting nested buttons to `flat` before upgrading them
fn header_slot(nodes: Vec<Node>, registry: &ComponentRegistry) -> Vec<Node> {
    let mut nodes = nodes;
    default_button_appearance(&mut nodes, "flat");
    registry.upgrade_subtree(nodes)
}

impl Component for HeaderBar {
    const TAG: &'static str = "adw-header-bar";
    const SCHEMA: &'static [&'static str] = &["title", "subtitle"];

    fn from_placeholder(placeholder: &Element, registry: &ComponentRegistry) -> Parsed<Self> {
        let mut start = take_slot(placeholder, "start");
        start.extend(take_unslotted(placeholder, Self::SLOTS));

        let state = Self {
            title: non_empty(placeholder.attr("title")),
            subtitle: non_empty(placeholder.attr("subtitle")),
            start: header_slot(start, registry),
            title_widget: header_slot(take_slot(placeholder, "title"), registry),
            end: header_slot(take_slot(placeholder, "end"), registry),
        };

        let empty = state.title.is_none()
            && state.start.is_empty()
            && state.title_widget.is_empty()
            && state.end.is_empty();
        if empty {
            Parsed::degraded(state, "header bar has no title and no content")
        } else {
            Parsed::ok(state)
        }
    }

    fn render(&self) -> Element {
        Element::new("header")
            .with_class("adw-header-bar")
            .with_child(
                Element::new("div")
                    .with_class("adw-header-bar-start")
                    .with_children(self.start.iter().cloned()),
            )
            .with_child(self.title_area())
            .with_child(
                Element::new("div")
                    .with_class("adw-header-bar-end")
                    .with_children(self.end.iter().cloned()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adw_dom::parse_fragment;
    use pretty_assertions::assert_eq;

    fn placeholder(html: &str) -> Element {
        parse_fragment(html)
            .into_iter()
            .find_map(|n| n.as_element().cloned())
            .unwrap()
    }

    #[test]
    fn test_title_and_subtitle() {
        let html = HeaderBar {
            subtitle: Some("Latest posts".to_string()),
            ..HeaderBar::new("Feed")
        }
        .render()
        .to_html();
        assert_eq!(
            html,
            concat!(
                r#"<header class="adw-header-bar">"#,
                r#"<div class="adw-header-bar-start"></div>"#,
                r#"<div class="adw-header-bar-title-area"><h1 class="adw-header-bar-title">Feed</h1>"#,
                r#"<span class="adw-header-bar-subtitle">Latest posts</span></div>"#,
                r#"<div class="adw-header-bar-end"></div>"#,
                r#"</header>"#
            )
        );
    }

    #[test]
    fn test_slotted_buttons_default_to_flat() {
        let el = placeholder(concat!(
            r#"<adw-header-bar title="Blog">"#,
            r#"<adw-button slot="start" icon="go-previous"></adw-button>"#,
            r#"<adw-button slot="end" appearance="suggested" label="Post"></adw-button>"#,
            r#"</adw-header-bar>"#
        ));
        let parsed = HeaderBar::from_placeholder(&el, &ComponentRegistry::with_defaults());
        assert!(parsed.issue.is_none());

        let start = parsed.state.start[0].as_element().unwrap();
        assert_eq!(start.tag, "button");
        assert!(start.has_class("flat"));

        let end = parsed.state.end[0].as_element().unwrap();
        assert!(end.has_class("suggested-action"));
        assert!(!end.has_class("flat"));
    }

    #[test]
    fn test_title_slot_replaces_heading() {
        let el = placeholder(r#"<adw-header-bar title="ignored"><span slot="title">Custom</span></adw-header-bar>"#);
        let html = HeaderBar::from_placeholder(&el, &ComponentRegistry::new())
            .state
            .render()
            .to_html();
        assert!(html.contains(r#"<div class="adw-header-bar-title-area"><span>Custom</span></div>"#));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_empty_header_degrades() {
        let el = placeholder("<adw-header-bar>  </adw-header-bar>");
        let parsed = HeaderBar::from_placeholder(&el, &ComponentRegistry::new());
        assert!(parsed.issue.is_some());
    }
}
