use super::{icon, non_empty, take_unslotted};
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::{Element, Node};

/// Full-page placeholder for empty or error states (`adw-status-page`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub actions: Vec<Node>,
}

impl StatusPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn action(mut self, node: impl Into<Node>) -> Self {
        self.actions.push(node.into());
        self
    }
}

impl Component for StatusPage {
    const TAG: &'static str = "adw-status-page";
    const SCHEMA: &'static [&'static str] = &["title", "description", "icon"];

    fn from_placeholder(placeholder: &Element, registry: &ComponentRegistry) -> Parsed<Self> {
        Parsed::ok(Self {
            title: non_empty(placeholder.attr("title")),
            description: non_empty(placeholder.attr("description")),
            icon: non_empty(placeholder.attr("icon")),
            actions: registry.upgrade_subtree(take_unslotted(placeholder, &[])),
        })
    }

    fn render(&self) -> Element {
        let mut page = Element::new("div").with_class("adw-status-page");
        if let Some(name) = &self.icon {
            page.children.push(icon("adw-status-page-icon", name).into());
        }
        if let Some(title) = &self.title {
            page.children.push(
                Element::new("h2")
                    .with_class("adw-status-page-title")
                    .with_text(title.as_str())
                    .into(),
            );
        }
        if let Some(description) = &self.description {
            page.children.push(
                Element::new("p")
                    .with_class("adw-status-page-description")
                    .with_text(description.as_str())
                    .into(),
            );
        }
        if !self.actions.is_empty() {
            page.children.push(
                Element::new("div")
                    .with_class("adw-status-page-actions")
                    .with_children(self.actions.iter().cloned())
                    .into(),
            );
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Button;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_not_found_page() {
        let html = StatusPage::new("Page not found")
            .description("Nothing lives at this address.")
            .icon("dialog-question-symbolic")
            .action(Button::new("Back to feed").href("#/feed").render())
            .render()
            .to_html();

        assert_eq!(
            html,
            concat!(
                r#"<div class="adw-status-page">"#,
                r#"<span class="adw-status-page-icon icon-dialog-question-symbolic" aria-hidden="true"></span>"#,
                r#"<h2 class="adw-status-page-title">Page not found</h2>"#,
                r#"<p class="adw-status-page-description">Nothing lives at this address.</p>"#,
                r#"<div class="adw-status-page-actions">"#,
                r##"<a href="#/feed" role="button" class="adw-button"><span class="adw-button-label">Back to feed</span></a>"##,
                r#"</div></div>"#
            )
        );
    }
}
