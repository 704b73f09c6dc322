use super::icon;
use crate::registry::{Component, ComponentRegistry, Parsed};
use adw_dom::Element;

/// Toggleable like counter bound to a post or comment (`adw-like-button`)
///
/// The rendered button carries its whole state in `data-*` attributes, so a
/// click handler can rebuild it with [`LikeButton::from_rendered`] without
/// keeping anything else around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeButton {
    pub item_type: String,
    pub item_id: String,
    pub liked: bool,
    pub like_count: u64,
}

impl LikeButton {
    pub fn new(item_type: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            item_id: item_id.into(),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, liked: bool, like_count: u64) -> Self {
        self.apply(liked, like_count);
        self
    }

    /// Action segment for the toggle request: `like` or `unlike`
    pub fn toggle_action(&self) -> &'static str {
        if self.liked {
            "unlike"
        } else {
            "like"
        }
    }

    /// Applies the server's answer to a toggle
    pub fn apply(&mut self, liked: bool, like_count: u64) {
        self.liked = liked;
        self.like_count = like_count;
    }

    /// Reads state back from a rendered `button.adw-like-button`
    pub fn from_rendered(el: &Element) -> Option<Self> {
        if !el.has_class("adw-like-button") {
            return None;
        }
        Some(Self {
            item_type: el.attr("data-item-type")?.to_string(),
            item_id: el.attr("data-item-id")?.to_string(),
            liked: el.attr("aria-pressed") == Some("true"),
            like_count: parse_count(el.attr("data-like-count")),
        })
    }
}

fn parse_count(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}

impl Component for LikeButton {
    const TAG: &'static str = "adw-like-button";
    const SCHEMA: &'static [&'static str] = &["item-type", "item-id", "liked", "like-count"];

    fn from_placeholder(placeholder: &Element, _registry: &ComponentRegistry) -> Parsed<Self> {
        let state = Self {
            item_type: placeholder.attr("item-type").unwrap_or("post").trim().to_string(),
            item_id: placeholder.attr("item-id").unwrap_or_default().trim().to_string(),
            liked: placeholder.flag("liked"),
            like_count: parse_count(placeholder.attr("like-count")),
        };
        if state.item_id.is_empty() {
            Parsed::degraded(state, "like button has no item-id")
        } else {
            Parsed::ok(state)
        }
    }

    fn render(&self) -> Element {
        let icon_name = if self.liked {
            "heart-filled-symbolic"
        } else {
            "heart-outline-symbolic"
        };
        let mut button = Element::new("button")
            .with_attr("type", "button")
            .with_class("adw-like-button flat")
            .with_attr("aria-pressed", if self.liked { "true" } else { "false" })
            .with_attr("aria-label", if self.liked { "Unlike" } else { "Like" })
            .with_attr("data-item-type", self.item_type.as_str())
            .with_attr("data-item-id", self.item_id.as_str())
            .with_attr("data-like-count", self.like_count.to_string())
            .with_child(icon("adw-button-icon", icon_name))
            .with_child(
                Element::new("span")
                    .with_class("adw-like-count")
                    .with_text(self.like_count.to_string()),
            );
        if self.liked {
            button.add_class("liked");
        }
        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_unliked() {
        assert_eq!(
            LikeButton::new("post", "42").with_state(false, 3).render().to_html(),
            concat!(
                r#"<button type="button" class="adw-like-button flat" aria-pressed="false" aria-label="Like" "#,
                r#"data-item-type="post" data-item-id="42" data-like-count="3">"#,
                r#"<span class="adw-button-icon icon-heart-outline-symbolic" aria-hidden="true"></span>"#,
                r#"<span class="adw-like-count">3</span></button>"#
            )
        );
    }

    #[test]
    fn test_toggle_round_trip_through_markup() {
        let mut like = LikeButton::new("comment", "7");
        assert_eq!(like.toggle_action(), "like");

        like.apply(true, 1);
        let rendered = like.render();
        assert!(rendered.has_class("liked"));

        let restored = LikeButton::from_rendered(&rendered).unwrap();
        assert_eq!(restored, like);
        assert_eq!(restored.toggle_action(), "unlike");
    }

    #[test]
    fn test_placeholder_without_id_degrades() {
        let el = Element::new("adw-like-button").with_attr("like-count", "many");
        let parsed = LikeButton::from_placeholder(&el, &ComponentRegistry::new());
        assert!(parsed.issue.is_some());
        assert_eq!(parsed.state.item_type, "post");
        assert_eq!(parsed.state.like_count, 0);
    }
}
