use super::{icon, non_empty, take_unslotted};
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::{Element, Node};

/// Visual and semantic role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Suggested,
    Destructive,
    Flat,
}

impl Appearance {
    /// Parses the `appearance` attribute; unknown values are ignored
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "suggested" => Some(Self::Suggested),
            "destructive" => Some(Self::Destructive),
            "flat" => Some(Self::Flat),
            other => {
                tracing::debug!("Unknown button appearance '{}'", other);
                None
            }
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Suggested => "suggested-action",
            Self::Destructive => "destructive-action",
            Self::Flat => "flat",
        }
    }
}

/// Push button, or a link styled as one when `href` is set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button {
    pub label: Option<String>,
    pub content: Vec<Node>,
    pub appearance: Option<Appearance>,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub disabled: bool,
    pub circular: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Component for Button {
    const TAG: &'static str = "adw-button";
    const SCHEMA: &'static [&'static str] =
        &["appearance", "href", "icon", "disabled", "circular", "label"];

    fn from_placeholder(placeholder: &Element, _registry: &ComponentRegistry) -> Parsed<Self> {
        Parsed::ok(Self {
            label: non_empty(placeholder.attr("label")),
            content: take_unslotted(placeholder, &[]),
            appearance: placeholder.attr("appearance").and_then(Appearance::parse),
            href: non_empty(placeholder.attr("href")),
            icon: non_empty(placeholder.attr("icon")),
            disabled: placeholder.flag("disabled"),
            circular: placeholder.flag("circular"),
        })
    }

    fn render(&self) -> Element {
        let mut el = match &self.href {
            Some(href) => Element::new("a")
                .with_attr("href", href.as_str())
                .with_attr("role", "button"),
            None => Element::new("button").with_attr("type", "button"),
        };
        el.add_class("adw-button");

        if let Some(appearance) = self.appearance {
            el.add_class(appearance.class());
        }
        if self.circular {
            el.add_class("circular");
        }
        if self.disabled {
            if self.href.is_none() {
                el.set_attr("disabled", "");
            }
            el.set_attr("aria-disabled", "true");
        }

        if let Some(name) = &self.icon {
            el.children.push(icon("adw-button-icon", name).into());
        }

        if !self.content.is_empty() {
            el.children.extend(self.content.iter().cloned());
        } else if let Some(label) = &self.label {
            el.children.push(
                Element::new("span")
                    .with_class("adw-button-label")
                    .with_text(label.as_str())
                    .into(),
            );
        }

        if self.content.is_empty() && self.label.is_none() {
            if let Some(name) = &self.icon {
                el.set_attr("aria-label", name.as_str());
            }
        }

        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_plain() {
        assert_eq!(
            Button::new("Save").render().to_html(),
            r#"<button type="button" class="adw-button"><span class="adw-button-label">Save</span></button>"#
        );
    }

    #[test]
    fn test_render_link_disabled() {
        let html = Button::new("Docs")
            .href("#/docs")
            .disabled(true)
            .render()
            .to_html();
        assert_eq!(
            html,
            r##"<a href="#/docs" role="button" class="adw-button" aria-disabled="true"><span class="adw-button-label">Docs</span></a>"##
        );
    }

    #[test]
    fn test_icon_only_gets_aria_label() {
        let button = Button {
            icon: Some("open-menu-symbolic".to_string()),
            circular: true,
            ..Button::default()
        };
        let el = button.render();
        assert!(el.has_class("circular"));
        assert_eq!(el.attr("aria-label"), Some("open-menu-symbolic"));
    }

    #[test]
    fn test_appearance_parse() {
        assert_eq!(Appearance::parse("Suggested"), Some(Appearance::Suggested));
        assert_eq!(Appearance::parse("loud"), None);
    }
}
