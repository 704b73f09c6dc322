use super::take_unslotted;
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::{Element, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Linear layout container (`adw-box`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxContainer {
    pub orientation: Orientation,
    pub spacing: Option<u32>,
    pub homogeneous: bool,
    pub children: Vec<Node>,
}

impl BoxContainer {
    pub fn horizontal(spacing: u32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            spacing: Some(spacing),
            ..Self::default()
        }
    }

    pub fn vertical(spacing: u32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            spacing: Some(spacing),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for BoxContainer {
    const TAG: &'static str = "adw-box";
    const SCHEMA: &'static [&'static str] = &["orientation", "spacing", "homogeneous"];

    fn from_placeholder(placeholder: &Element, _registry: &ComponentRegistry) -> Parsed<Self> {
        let mut issue = None;

        let orientation = match placeholder.attr("orientation") {
            Some(value) => Orientation::parse(value).unwrap_or_else(|| {
                issue = Some(format!("unknown orientation '{}'", value));
                Orientation::default()
            }),
            None => Orientation::default(),
        };

        let spacing = match placeholder.attr("spacing").map(str::trim) {
            Some(value) => match value.trim_end_matches("px").parse::<u32>() {
                Ok(px) => Some(px),
                Err(_) => {
                    issue = Some(format!("invalid spacing '{}'", value));
                    None
                }
            },
            None => None,
        };

        let state = Self {
            orientation,
            spacing,
            homogeneous: placeholder.flag("homogeneous"),
            children: take_unslotted(placeholder, &[]),
        };

        match issue {
            Some(reason) => Parsed::degraded(state, reason),
            None => Parsed::ok(state),
        }
    }

    fn render(&self) -> Element {
        let mut el = Element::new("div")
            .with_class("adw-box")
            .with_class(self.orientation.class())
            .with_opt_attr("style", self.spacing.map(|px| format!("gap: {}px", px)));
        if self.homogeneous {
            el.set_attr("data-homogeneous", "true");
        }
        el.with_children(self.children.iter().cloned())
    }
}
