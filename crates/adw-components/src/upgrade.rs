// File: src/upgrade.rs
// Purpose: Declarative upgrade pass from placeholder markup to components

use crate::registry::ComponentRegistry;
use adw_dom::{Document, Element, Node};

/// A placeholder that was upgraded into a degraded replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedPlaceholder {
    pub tag: String,
    pub reason: String,
}

/// Outcome of one upgrade pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeReport {
    /// Placeholders replaced at document level
    pub upgraded: usize,
    pub degraded: Vec<DegradedPlaceholder>,
}

impl UpgradeReport {
    pub fn is_clean(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Runs the upgrade pass over a document
///
/// Tag types are processed in registry order; within a tag type every
/// occurrence is replaced, innermost first. A placeholder that cannot be
/// fully read still gets a (degraded) replacement, so the pass always
/// reaches the end of the document. Upgraded markup contains no placeholder
/// tags, so running the pass again changes nothing.
pub fn upgrade_document(document: &mut Document, registry: &ComponentRegistry) -> UpgradeReport {
    let report = upgrade_nodes(&mut document.children, registry);
    tracing::debug!(
        "Upgrade pass replaced {} placeholders ({} degraded)",
        report.upgraded,
        report.degraded.len()
    );
    report
}

/// Parses, upgrades and re-serializes a markup string
pub fn upgrade_html(html: &str, registry: &ComponentRegistry) -> (String, UpgradeReport) {
    let mut document = Document::parse(html);
    let report = upgrade_document(&mut document, registry);
    (document.to_html(), report)
}

pub(crate) fn upgrade_nodes(nodes: &mut Vec<Node>, registry: &ComponentRegistry) -> UpgradeReport {
    let mut report = UpgradeReport::default();
    let mut scratch = Document::new(std::mem::take(nodes));

    for upgrader in registry.upgraders() {
        let tag = upgrader.tag().to_string();
        let replaced = scratch.replace_elements(&tag, |placeholder| {
            let upgraded = upgrader.upgrade(placeholder, registry);
            if let Some(reason) = upgraded.issue {
                tracing::warn!("Degraded <{}>: {}", tag, reason);
                report.degraded.push(DegradedPlaceholder {
                    tag: tag.clone(),
                    reason,
                });
            }
            upgraded.node
        });
        report.upgraded += replaced;
    }

    *nodes = scratch.children;
    report
}

/// Copies non-schema attributes from the placeholder onto its replacement
///
/// `class` values are appended to the replacement's classes. `slot` is
/// consumed. Any other attribute is copied only when the replacement does
/// not define it.
pub fn pass_through(placeholder: &Element, replacement: &mut Element, schema: &[&str]) {
    for (name, value) in placeholder.attributes() {
        if name == "slot" || schema.contains(&name) {
            continue;
        }
        if name == "class" {
            replacement.add_class(value);
        } else if !replacement.has_attr(name) {
            replacement.set_attr(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pass_through_rules() {
        let placeholder = Element::new("adw-button")
            .with_attr("appearance", "flat")
            .with_attr("id", "save")
            .with_attr("type", "submit")
            .with_attr("slot", "end")
            .with_attr("class", "wide");
        let mut replacement = Element::new("button")
            .with_attr("type", "button")
            .with_class("adw-button");

        pass_through(&placeholder, &mut replacement, &["appearance"]);

        assert_eq!(
            replacement.to_html(),
            r#"<button type="button" class="adw-button wide" id="save"></button>"#
        );
    }
}
