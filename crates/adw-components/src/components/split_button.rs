use super::{icon, non_empty, take_slot, take_unslotted, Appearance};
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::{Element, Node};

/// Button with an attached dropdown menu (`adw-split-button`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitButton {
    pub label: String,
    pub appearance: Option<Appearance>,
    pub disabled: bool,
    pub menu: Vec<Node>,
}

impl SplitButton {
    fn main_button(&self) -> Element {
        let mut button = Element::new("button")
            .with_attr("type", "button")
            .with_class("adw-split-button-main")
            .with_text(self.label.as_str());
        if let Some(appearance) = self.appearance {
            button.add_class(appearance.class());
        }
        self.apply_disabled(&mut button);
        button
    }

    fn toggle_button(&self) -> Element {
        let mut toggle = Element::new("button")
            .with_attr("type", "button")
            .with_class("adw-split-button-toggle")
            .with_attr("aria-haspopup", "menu")
            .with_attr("aria-expanded", "false")
            .with_attr("aria-label", "More options")
            .with_child(icon("adw-button-icon", "pan-down-symbolic"));
        if let Some(appearance) = self.appearance {
            toggle.add_class(appearance.class());
        }
        self.apply_disabled(&mut toggle);
        toggle
    }

    fn apply_disabled(&self, button: &mut Element) {
        if self.disabled {
            button.set_attr("disabled", "");
            button.set_attr("aria-disabled", "true");
        }
    }
}

impl Component for SplitButton {
    const TAG: &'static str = "adw-split-button";
    const SCHEMA: &'static [&'static str] = &["label", "appearance", "disabled"];

    fn from_placeholder(placeholder: &Element, registry: &ComponentRegistry) -> Parsed<Self> {
        let label = non_empty(placeholder.attr("label"));
        // Children outside the menu slot are menu entries as well
        let mut menu = take_slot(placeholder, "menu");
        menu.extend(take_unslotted(placeholder, &["menu"]));
        let state = Self {
            label: label.clone().unwrap_or_default(),
            appearance: placeholder.attr("appearance").and_then(Appearance::parse),
            disabled: placeholder.flag("disabled"),
            menu: registry.upgrade_subtree(menu),
        };

        match label {
            Some(_) => Parsed::ok(state),
            None => Parsed::degraded(state, "split button has no label"),
        }
    }

    fn render(&self) -> Element {
        let menu = Element::new("div")
            .with_class("adw-split-button-menu")
            .with_attr("role", "menu")
            .with_attr("hidden", "")
            .with_children(self.menu.iter().cloned());

        Element::new("div")
            .with_class("adw-split-button linked")
            .with_child(self.main_button())
            .with_child(self.toggle_button())
            .with_child(menu)
    }
}
