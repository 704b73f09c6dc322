use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::Element;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl SpinnerSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Some(Self::Small),
            "normal" | "" => Some(Self::Normal),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// Indeterminate progress indicator (`adw-spinner`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    pub size: SpinnerSize,
    pub active: bool,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            size: SpinnerSize::Normal,
            active: true,
        }
    }
}

impl Component for Spinner {
    const TAG: &'static str = "adw-spinner";
    const SCHEMA: &'static [&'static str] = &["size", "active"];

    fn from_placeholder(placeholder: &Element, _registry: &ComponentRegistry) -> Parsed<Self> {
        let active = placeholder
            .attr("active")
            .map(|v| !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        let size = placeholder
            .attr("size")
            .and_then(SpinnerSize::parse)
            .unwrap_or_default();
        Parsed::ok(Self { size, active })
    }

    fn render(&self) -> Element {
        let mut el = Element::new("div")
            .with_class("adw-spinner")
            .with_attr("role", "progressbar")
            .with_attr("aria-label", "Loading")
            .with_attr("aria-busy", if self.active { "true" } else { "false" });
        match self.size {
            SpinnerSize::Small => el.add_class("small"),
            SpinnerSize::Large => el.add_class("large"),
            SpinnerSize::Normal => {}
        }
        if !self.active {
            el.add_class("stopped");
        }
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_spinner() {
        assert_eq!(
            Spinner::default().render().to_html(),
            r#"<div class="adw-spinner" role="progressbar" aria-label="Loading" aria-busy="true"></div>"#
        );
    }

    #[test]
    fn test_inactive_large() {
        let el = Element::new("adw-spinner")
            .with_attr("size", "large")
            .with_attr("active", "false");
        let spinner = Spinner::from_placeholder(&el, &ComponentRegistry::new()).state;
        let rendered = spinner.render();
        assert_eq!(rendered.attr("aria-busy"), Some("false"));
        assert_eq!(rendered.attr("class"), Some("adw-spinner large stopped"));
    }
}
