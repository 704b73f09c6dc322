use super::{non_empty, take_slot, take_unslotted};
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::{Element, Node};

/// Modal dialog (`adw-dialog`)
///
/// Rendered closed unless `open` is set. Opening and closing only toggles
/// the native `open` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: Option<String>,
    pub open: bool,
    pub closable: bool,
    pub body: Vec<Node>,
    pub footer: Vec<Node>,
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            title: None,
            open: false,
            closable: true,
            body: Vec::new(),
            footer: Vec::new(),
        }
    }
}

impl Dialog {
    /// Named slots; other children form the body
    pub const SLOTS: &'static [&'static str] = &["footer"];
}

impl Component for Dialog {
    const TAG: &'static str = "adw-dialog";
    const SCHEMA: &'static [&'static str] = &["title", "open", "closable"];

    fn from_placeholder(placeholder: &Element, registry: &ComponentRegistry) -> Parsed<Self> {
        let closable = placeholder
            .attr("closable")
            .map(|v| !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        let state = Self {
            title: non_empty(placeholder.attr("title")),
            open: placeholder.flag("open"),
            closable,
            body: registry.upgrade_subtree(take_unslotted(placeholder, Self::SLOTS)),
            footer: registry.upgrade_subtree(take_slot(placeholder, "footer")),
        };

        if state.body.is_empty() {
            Parsed::degraded(state, "dialog has no body")
        } else {
            Parsed::ok(state)
        }
    }

    fn render(&self) -> Element {
        let mut dialog = Element::new("dialog")
            .with_class("adw-dialog")
            .with_attr("aria-modal", "true");
        if self.open {
            dialog.set_attr("open", "");
        }

        let mut header = Element::new("header").with_class("adw-dialog-header");
        if let Some(title) = &self.title {
            header.children.push(
                Element::new("h2")
                    .with_class("adw-dialog-title")
                    .with_text(title.as_str())
                    .into(),
            );
            dialog.set_attr("aria-label", title.as_str());
        }
        if self.closable {
            header.children.push(
                Element::new("button")
                    .with_attr("type", "button")
                    .with_class("adw-dialog-close")
                    .with_attr("aria-label", "Close")
                    .with_attr("data-action", "close-dialog")
                    .into(),
            );
        }
        if header.has_content() {
            dialog.children.push(header.into());
        }

        dialog.children.push(
            Element::new("div")
                .with_class("adw-dialog-body")
                .with_children(self.body.iter().cloned())
                .into(),
        );

        if !self.footer.is_empty() {
            dialog.children.push(
                Element::new("footer")
                    .with_class("adw-dialog-footer")
                    .with_children(self.footer.iter().cloned())
                    .into(),
            );
        }

        dialog
    }
}
