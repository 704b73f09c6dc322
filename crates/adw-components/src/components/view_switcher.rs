use super::{icon, non_empty};
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::Element;

const ITEM_TAG: &str = "adw-view-switcher-item";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwitcherPolicy {
    #[default]
    Wide,
    Narrow,
}

impl SwitcherPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wide" => Some(Self::Wide),
            "narrow" => Some(Self::Narrow),
            _ => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Narrow => "narrow",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSwitcherItem {
    pub name: String,
    pub title: String,
    pub icon: Option<String>,
    pub active: bool,
}

impl ViewSwitcherItem {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    fn from_element(el: &Element, index: usize) -> Self {
        let name = non_empty(el.attr("name")).unwrap_or_else(|| index.to_string());
        let title = non_empty(el.attr("title"))
            .or_else(|| non_empty(Some(el.text_content().as_str())))
            .unwrap_or_else(|| name.clone());
        Self {
            name,
            title,
            icon: non_empty(el.attr("icon")),
            active: el.flag("active"),
        }
    }

    fn render(&self) -> Element {
        let mut tab = Element::new("button")
            .with_attr("type", "button")
            .with_class("adw-view-switcher-button")
            .with_attr("role", "tab")
            .with_attr("aria-selected", if self.active { "true" } else { "false" })
            .with_attr("data-view", self.name.as_str());
        if self.active {
            tab.add_class("active");
        }
        if let Some(name) = &self.icon {
            tab.children.push(icon("adw-view-switcher-icon", name).into());
        }
        tab.with_child(
            Element::new("span")
                .with_class("adw-view-switcher-label")
                .with_text(self.title.as_str()),
        )
    }
}

/// Tab strip for switching between named views (`adw-view-switcher`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSwitcher {
    pub policy: SwitcherPolicy,
    pub items: Vec<ViewSwitcherItem>,
}

impl ViewSwitcher {
    pub fn new(items: Vec<ViewSwitcherItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
        .with_default_active()
    }

    /// Marks the first item active when none is; later actives are cleared
    fn with_default_active(mut self) -> Self {
        let first_active = self.items.iter().position(|item| item.active).unwrap_or(0);
        for (index, item) in self.items.iter_mut().enumerate() {
            item.active = index == first_active;
        }
        self
    }

    pub fn select(&mut self, name: &str) -> bool {
        if !self.items.iter().any(|item| item.name == name) {
            return false;
        }
        for item in &mut self.items {
            item.active = item.name == name;
        }
        true
    }

    pub fn active(&self) -> Option<&ViewSwitcherItem> {
        self.items.iter().find(|item| item.active)
    }
}

impl Component for ViewSwitcher {
    const TAG: &'static str = "adw-view-switcher";
    const SCHEMA: &'static [&'static str] = &["policy"];

    fn from_placeholder(placeholder: &Element, _registry: &ComponentRegistry) -> Parsed<Self> {
        let items: Vec<_> = placeholder
            .child_elements()
            .filter(|el| el.tag == ITEM_TAG)
            .enumerate()
            .map(|(index, el)| ViewSwitcherItem::from_element(el, index))
            .collect();

        let policy = placeholder
            .attr("policy")
            .and_then(SwitcherPolicy::parse)
            .unwrap_or_default();

        let state = Self { policy, items }.with_default_active();
        if state.items.is_empty() {
            Parsed::degraded(state, "view switcher has no items")
        } else {
            Parsed::ok(state)
        }
    }

    fn render(&self) -> Element {
        Element::new("nav")
            .with_class("adw-view-switcher")
            .with_class(self.policy.class())
            .with_attr("role", "tablist")
            .with_children(self.items.iter().map(ViewSwitcherItem::render))
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
    fn test_first_item_active_by_default() {
        let el = placeholder(concat!(
            r#"<adw-view-switcher policy="narrow">"#,
            r#"<adw-view-switcher-item name="feed" title="Feed" icon="view-list"></adw-view-switcher-item>"#,
            r#"<adw-view-switcher-item name="settings">Settings</adw-view-switcher-item>"#,
            r#"</adw-view-switcher>"#
        ));
        let parsed = ViewSwitcher::from_placeholder(&el, &ComponentRegistry::new());
        assert!(parsed.issue.is_none());
        assert_eq!(parsed.state.active().map(|i| i.name.as_str()), Some("feed"));
        assert_eq!(parsed.state.items[1].title, "Settings");

        let html = parsed.state.render().to_html();
        assert!(html.starts_with(r#"<nav class="adw-view-switcher narrow" role="tablist">"#));
        assert!(html.contains(concat!(
            r#"<button type="button" class="adw-view-switcher-button active" role="tab" aria-selected="true" data-view="feed">"#,
            r#"<span class="adw-view-switcher-icon icon-view-list" aria-hidden="true"></span>"#,
            r#"<span class="adw-view-switcher-label">Feed</span></button>"#
        )));
        assert!(html.contains(r#"aria-selected="false" data-view="settings""#));
    }

    #[test]
    fn test_explicit_active_wins() {
        let mut switcher = ViewSwitcher::new(vec![
            ViewSwitcherItem::new("feed", "Feed"),
            ViewSwitcherItem {
                active: true,
                ..ViewSwitcherItem::new("profile", "Profile")
            },
        ]);
        assert_eq!(switcher.active().map(|i| i.name.as_str()), Some("profile"));

        assert!(switcher.select("feed"));
        assert!(!switcher.select("missing"));
        assert_eq!(switcher.active().map(|i| i.name.as_str()), Some("feed"));
    }

    #[test]
    fn test_unnamed_item_uses_index() {
        let el = placeholder(r#"<adw-view-switcher><adw-view-switcher-item title="One"></adw-view-switcher-item></adw-view-switcher>"#);
        let parsed = ViewSwitcher::from_placeholder(&el, &ComponentRegistry::new());
        assert_eq!(parsed.state.items[0].name, "0");
    }

    #[test]
    fn test_no_items_degrades() {
        let el = placeholder("<adw-view-switcher></adw-view-switcher>");
        let parsed = ViewSwitcher::from_placeholder(&el, &ComponentRegistry::new());
        assert_eq!(parsed.issue.as_deref(), Some("view switcher has no items"));
        assert_eq!(
            parsed.state.render().to_html(),
            r#"<nav class="adw-view-switcher wide" role="tablist"></nav>"#
        );
    }
}
