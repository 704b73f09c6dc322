// File: src/dom.rs
// Purpose: Live-document helpers: content region, placeholder upgrade, root attributes

use crate::error::{WebError, WebResult};
use adw_app::{ContentRegion, Settings};
use adw_components::{upgrade_html, ComponentRegistry};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::DomUnavailable)
}

pub fn document() -> WebResult<Document> {
    window()?.document().ok_or(WebError::DomUnavailable)
}

/// The element views are rendered into
#[derive(Debug, Clone)]
pub struct DomRegion {
    element: Element,
}

impl DomRegion {
    pub fn new(document: &Document, id: &str) -> WebResult<Self> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| WebError::ElementNotFound(id.to_string()))?;
        Ok(Self { element })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ContentRegion for DomRegion {
    fn replace(&self, html: &str) {
        self.element.set_inner_html(html);
    }
}

/// Upgrades every placeholder already in the document
///
/// Only outermost placeholders are rewritten; nested ones are handled as
/// part of their ancestor's markup. Returns the number of replacements.
pub fn upgrade_placeholders(document: &Document, registry: &ComponentRegistry) -> WebResult<usize> {
    let selector = registry.tags().collect::<Vec<_>>().join(",");
    if selector.is_empty() {
        return Ok(0);
    }

    let nodes = document.query_selector_all(&selector)?;
    let mut upgraded = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(parent) = element.parent_element() {
            if parent.closest(&selector)?.is_some() {
                continue;
            }
        }

        let (html, report) = upgrade_html(&element.outer_html(), registry);
        for degraded in &report.degraded {
            tracing::warn!("Degraded <{}>: {}", degraded.tag, degraded.reason);
        }
        element.set_outer_html(&html);
        upgraded += report.upgraded;
    }

    tracing::debug!("Upgraded {} placeholders in the document", upgraded);
    Ok(upgraded)
}

/// Sets `data-theme` and `data-accent-color` on `<html>`
pub fn apply_settings(document: &Document, settings: Settings) -> WebResult<()> {
    let root = document
        .document_element()
        .ok_or(WebError::DomUnavailable)?;
    for (name, value) in settings.root_attributes() {
        root.set_attribute(name, value)?;
    }
    Ok(())
}

/// `content` of `<meta name="{name}">`
pub fn meta_content(document: &Document, name: &str) -> WebResult<Option<String>> {
    let meta = document.query_selector(&format!("meta[name=\"{}\"]", name))?;
    Ok(meta
        .and_then(|m| m.get_attribute("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty()))
}
