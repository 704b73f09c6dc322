//! Built-in components
//!
//! Each component is a plain state struct with a pure `render`, plus the
//! `from_placeholder` reader used by the upgrade pass.

mod button;
mod container;
mod dialog;
mod header_bar;
mod like_button;
mod spinner;
mod split_button;
mod status_page;
mod view_switcher;

pub use button::{Appearance, Button};
pub use container::{BoxContainer, Orientation};
pub use dialog::Dialog;
pub use header_bar::HeaderBar;
pub use like_button::LikeButton;
pub use spinner::{Spinner, SpinnerSize};
pub use split_button::SplitButton;
pub use status_page::StatusPage;
pub use view_switcher::{SwitcherPolicy, ViewSwitcher, ViewSwitcherItem};

use crate::registry::Component;
use adw_dom::{Element, Node};

/// `<span class="adw-button-icon icon-NAME" aria-hidden="true">`
pub(crate) fn icon(class: &str, name: &str) -> Element {
    Element::new("span")
        .with_class(class)
        .with_class(&format!("icon-{}", name))
        .with_attr("aria-hidden", "true")
}

/// Clones the children assigned to `slot`, dropping their `slot` attribute
pub(crate) fn take_slot(placeholder: &Element, slot: &str) -> Vec<Node> {
    placeholder
        .slotted(slot)
        .map(|el| {
            let mut clone = el.clone();
            clone.remove_attr("slot");
            Node::Element(clone)
        })
        .collect()
}

/// Clones the children outside the `known` slots, trimming blank text
///
/// Children naming an unknown slot lose the attribute and land here too.
pub(crate) fn take_unslotted(placeholder: &Element, known: &[&str]) -> Vec<Node> {
    placeholder
        .outside_slots(known)
        .filter(|node| !node.is_whitespace())
        .map(|node| match node {
            Node::Element(el) if el.has_attr("slot") => {
                tracing::warn!(
                    "<{}> has no slot '{}', using its default area",
                    placeholder.tag,
                    el.attr("slot").unwrap_or_default()
                );
                let mut clone = el.clone();
                clone.remove_attr("slot");
                Node::Element(clone)
            }
            other => other.clone(),
        })
        .collect()
}

/// Gives nested button placeholders a default appearance
///
/// Only buttons without an explicit `appearance` are touched.
pub(crate) fn default_button_appearance(nodes: &mut [Node], appearance: &str) {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            if el.tag == Button::TAG && !el.has_attr("appearance") {
                el.set_attr("appearance", appearance);
            }
            default_button_appearance(&mut el.children, appearance);
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
