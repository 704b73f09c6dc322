// File: src/dispatcher.rs
// Purpose: Renders a resolved view and writes it into the content region

use crate::error::DispatchError;
use crate::region::ContentRegion;
use crate::routes::View;
use crate::settings::Settings;
use crate::source::ContentSource;
use crate::views;
use adw_components::{upgrade_html, ComponentRegistry};
use maud::Markup;
use std::cell::Cell;
use std::collections::HashMap;

/// Maps view names to render procedures
///
/// Remote views fetch once and render on success; a failed fetch is
/// returned as is, with no retry and no fallback content. Views without a
/// renderer are a no-op. Rendered markup goes through the upgrade pass
/// before it is written.
pub struct Dispatcher<S> {
    source: S,
    registry: ComponentRegistry,
    settings: Cell<Settings>,
}

impl<S: ContentSource> Dispatcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            registry: ComponentRegistry::with_defaults(),
            settings: Cell::new(Settings::default()),
        }
    }

    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        self.settings.set(settings);
        self
    }

    /// Settings shown by the settings view
    pub fn set_settings(&self, settings: Settings) {
        self.settings.set(settings);
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Renders a view; `None` means the view has no renderer
    ///
    /// Unknown view names render the not-found fragment.
    pub async fn render(
        &self,
        view_name: &str,
        params: &HashMap<String, String>,
    ) -> Result<Option<String>, DispatchError> {
        let Some(view) = View::from_name(view_name) else {
            tracing::debug!("Unknown view '{}', rendering not-found", view_name);
            return Ok(Some(self.not_found()));
        };

        let markup = match view {
            View::Feed => {
                let page_no = page_param(params)?;
                let page = self.source.feed(page_no).await?;
                views::feed(&page, page_no)
            }
            View::Post => {
                let id = params
                    .get("id")
                    .ok_or(DispatchError::MissingParam("id"))?;
                let post = self.source.post(id).await?;
                views::post(&post)
            }
            View::Login => views::login(),
            View::Register => views::register(),
            View::Settings => views::settings(self.settings.get()),
            View::PostEditor | View::Profile => {
                tracing::debug!("View '{}' has no renderer", view);
                return Ok(None);
            }
        };

        Ok(Some(self.finish(markup)))
    }

    /// Renders a view into `region`; returns false for no-op views
    pub async fn dispatch(
        &self,
        view_name: &str,
        params: &HashMap<String, String>,
        region: &impl ContentRegion,
    ) -> Result<bool, DispatchError> {
        match self.render(view_name, params).await? {
            Some(html) => {
                region.replace(&html);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn not_found(&self) -> String {
        self.finish(views::not_found())
    }

    fn finish(&self, markup: Markup) -> String {
        let (html, report) = upgrade_html(&markup.into_string(), &self.registry);
        if !report.is_clean() {
            tracing::warn!("{} degraded placeholders in view", report.degraded.len());
        }
        html
    }
}

/// `page` parameter of the feed routes; absent means the first page
fn page_param(params: &HashMap<String, String>) -> Result<u32, DispatchError> {
    match params.get("page") {
        None => Ok(1),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| DispatchError::InvalidParam {
                name: "page",
                value: value.clone(),
            }),
    }
}
