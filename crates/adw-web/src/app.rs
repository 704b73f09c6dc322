// File: src/app.rs
// Purpose: Wires the navigator, toasts, likes and settings to browser events

use crate::dom::{self, DomRegion};
use crate::error::{WebError, WebResult};
use crate::scheduler::TimeoutScheduler;
use crate::storage::LocalStorageStore;
use adw_api::{ApiClient, Credentials, Registration};
use adw_app::csrf::CSRF_META_NAME;
use adw_app::{AccentColor, Config, DispatchError, Navigator, SettingsManager, Theme};
use adw_components::{Component, LikeButton, Toast, ToastId, ToastOverlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlDialogElement, HtmlFormElement};

const TOAST_HOST_ID: &str = "adw-toast-host";

pub struct App {
    document: Document,
    navigator: Navigator<ApiClient, DomRegion>,
    toasts: ToastOverlay<TimeoutScheduler>,
    settings: RefCell<SettingsManager<LocalStorageStore>>,
    config: Config,
}

impl App {
    /// Builds the app for the current page
    ///
    /// The backend is the page's own origin; the CSRF token comes from the
    /// `csrf-token` meta tag.
    pub fn new(mut config: Config) -> WebResult<Rc<Self>> {
        let window = dom::window()?;
        let document = dom::document()?;
        config.api.base_url = window.location().origin()?;

        let settings = SettingsManager::open(LocalStorageStore::default(), config.ui.default_settings())
            .map_err(|err| WebError::Js(format!("{:#}", err)))?;
        dom::apply_settings(&document, settings.current())?;

        let csrf_token = dom::meta_content(&document, CSRF_META_NAME)?;
        let region = DomRegion::new(&document, &config.ui.content_id)?;
        let navigator = adw_app::navigator(&config, csrf_token, settings.current(), region);

        let toasts = ToastOverlay::new(TimeoutScheduler::new(window));
        let host = toast_host(&document)?;
        toasts.on_change(move |overlay| host.set_inner_html(&overlay.to_html()));

        Ok(Rc::new(Self {
            document,
            navigator,
            toasts,
            settings: RefCell::new(settings),
            config,
        }))
    }

    pub fn client(&self) -> &ApiClient {
        self.navigator.dispatcher().source()
    }

    /// Upgrades static placeholders, hooks events and renders the current hash
    pub fn start(self: &Rc<Self>) -> WebResult<()> {
        dom::upgrade_placeholders(&self.document, self.navigator.dispatcher().registry())?;

        let app = Rc::clone(self);
        listen(&dom::window()?.into(), "hashchange", move |_| app.navigate_current())?;

        let app = Rc::clone(self);
        listen(&self.document, "click", move |event| {
            if let Err(err) = app.on_click(&event) {
                tracing::error!("Click handler failed: {}", err);
            }
        })?;

        let app = Rc::clone(self);
        listen(&self.document, "submit", move |event| {
            if let Err(err) = app.on_submit(&event) {
                tracing::error!("Submit handler failed: {}", err);
            }
        })?;

        self.navigate_current();
        Ok(())
    }

    pub fn toast(&self, title: impl Into<String>) -> ToastId {
        self.toasts
            .add(Toast::new(title).with_timeout(self.config.ui.toast_timeout()))
    }

    fn navigate_current(self: &Rc<Self>) {
        let hash = match dom::window().and_then(|w| Ok(w.location().hash()?)) {
            Ok(hash) => hash,
            Err(err) => {
                tracing::error!("Cannot read location hash: {}", err);
                return;
            }
        };

        let app = Rc::clone(self);
        spawn_local(async move {
            if let Err(err) = app.navigator.navigate(&hash).await {
                app.report(&err);
            }
        });
    }

    fn report(&self, err: &DispatchError) {
        if err.is_network_failure() {
            self.toast("Could not reach the server");
        } else {
            self.toast(err.to_string());
        }
    }

    fn on_click(self: &Rc<Self>, event: &Event) -> WebResult<()> {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return Ok(());
        };

        if let Some(button) = target.closest("button.adw-like-button")? {
            self.toggle_like(button);
        } else if let Some(button) = target.closest("[data-action=\"dismiss-toast\"]")? {
            if let Some(id) = toast_id(&button) {
                self.toasts.dismiss(id);
            }
        } else if let Some(button) = target.closest("[data-action=\"close-dialog\"]")? {
            if let Some(dialog) = button.closest("dialog")? {
                if let Ok(dialog) = dialog.dyn_into::<HtmlDialogElement>() {
                    dialog.close();
                }
            }
        } else if let Some(toggle) = target.closest(".adw-split-button-toggle")? {
            toggle_split_menu(&toggle)?;
        } else if let Some(button) = target.closest(".adw-view-switcher-button")? {
            select_switcher_button(&button)?;
        } else if let Some(choice) = target.closest("[data-theme-choice]")? {
            if let Some(theme) = choice.get_attribute("data-theme-choice") {
                match theme.parse::<Theme>() {
                    Ok(theme) => self.change_settings(Some(theme), None),
                    Err(err) => tracing::warn!("{}", err),
                }
            }
        } else if let Some(choice) = target.closest("[data-accent-choice]")? {
            if let Some(color) = choice.get_attribute("data-accent-choice") {
                match color.parse::<AccentColor>() {
                    Ok(color) => self.change_settings(None, Some(color)),
                    Err(err) => tracing::warn!("{}", err),
                }
            }
        }
        Ok(())
    }

    fn toggle_like(self: &Rc<Self>, element: Element) {
        let Some(button) = like_state(&element) else {
            tracing::warn!("Like button without item data");
            return;
        };
        if element.get_attribute("aria-busy").as_deref() == Some("true") {
            return;
        }
        logged("mark like button busy", element.set_attribute("aria-busy", "true"));

        let app = Rc::clone(self);
        spawn_local(async move {
            match adw_app::toggle_like(app.client(), &button).await {
                Ok(updated) => element.set_outer_html(&updated.render().to_html()),
                Err(err) => {
                    logged("clear like button busy", element.remove_attribute("aria-busy"));
                    app.report(&err.into());
                }
            }
        });
    }

    fn change_settings(self: &Rc<Self>, theme: Option<Theme>, accent: Option<AccentColor>) {
        let app = Rc::clone(self);
        spawn_local(async move {
            let Ok(mut manager) = app.settings.try_borrow_mut() else {
                tracing::debug!("Settings change already in progress");
                return;
            };

            // Applied locally first; a failed push is only reported
            let result = match (theme, accent) {
                (Some(theme), _) => manager.set_theme(theme, app.client()).await,
                (None, Some(accent)) => manager.set_accent_color(accent, app.client()).await,
                (None, None) => Ok(()),
            };
            let current = manager.current();
            drop(manager);

            if let Err(err) = dom::apply_settings(&app.document, current) {
                tracing::error!("Cannot apply settings: {}", err);
            }
            app.navigator.dispatcher().set_settings(current);
            if let Err(err) = result {
                tracing::error!("{:#}", err);
                app.toast("Settings saved on this device only");
            }
            app.navigate_current();
        });
    }

    fn on_submit(self: &Rc<Self>, event: &Event) -> WebResult<()> {
        let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return Ok(());
        };
        let Some(kind) = form.get_attribute("data-form") else {
            return Ok(());
        };
        event.prevent_default();

        let data = FormData::new_with_form(&form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();

        let app = Rc::clone(self);
        match kind.as_str() {
            "login" => {
                let credentials = Credentials {
                    username: field("username"),
                    password: field("password"),
                };
                spawn_local(async move {
                    let result = app.client().login(&credentials).await;
                    app.after_auth(result.map(|_| "Logged in"));
                });
            }
            "register" => {
                let full_name = Some(field("full_name")).filter(|n| !n.trim().is_empty());
                let registration = Registration {
                    username: field("username"),
                    email: field("email"),
                    password: field("password"),
                    full_name,
                };
                spawn_local(async move {
                    let result = app.client().register(&registration).await;
                    app.after_auth(result.map(|_| "Account created"));
                });
            }
            other => tracing::debug!("Unhandled form '{}'", other),
        }
        Ok(())
    }

    fn after_auth(&self, result: Result<&'static str, adw_api::ApiError>) {
        match result {
            Ok(message) => {
                self.toast(message);
                if let Ok(window) = dom::window() {
                    logged("go to feed", window.location().set_hash("#/feed"));
                }
            }
            Err(err) => {
                let message = match err.status() {
                    Some(400 | 401 | 403) => "Check your details and try again",
                    _ => "Could not reach the server",
                };
                self.toast(message);
            }
        }
    }
}

fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> WebResult<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Logs a failed DOM call that needs no further handling; true on success
fn logged<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("Failed to {}: {:?}", action, err);
            false
        }
    }
}

fn toast_host(document: &Document) -> WebResult<Element> {
    if let Some(host) = document.get_element_by_id(TOAST_HOST_ID) {
        return Ok(host);
    }
    let body = document.body().ok_or(WebError::DomUnavailable)?;
    let host = document.create_element("div")?;
    host.set_id(TOAST_HOST_ID);
    body.append_child(&host)?;
    Ok(host)
}

fn toast_id(button: &Element) -> Option<ToastId> {
    button.get_attribute("data-toast-id")?.parse().ok()
}

/// Rebuilds the like button state from its rendered attributes
fn like_state(element: &Element) -> Option<LikeButton> {
    let parsed = adw_dom::Document::parse(&element.outer_html());
    parsed
        .find_first(|el| el.has_class("adw-like-button"))
        .and_then(LikeButton::from_rendered)
}

fn toggle_split_menu(toggle: &Element) -> WebResult<()> {
    let Some(split) = toggle.closest(".adw-split-button")? else {
        return Ok(());
    };
    let Some(menu) = split.query_selector(".adw-split-button-menu")? else {
        return Ok(());
    };
    let open = menu.has_attribute("hidden");
    if open {
        menu.remove_attribute("hidden")?;
    } else {
        menu.set_attribute("hidden", "")?;
    }
    toggle.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
    Ok(())
}

fn select_switcher_button(button: &Element) -> WebResult<()> {
    let Some(nav) = button.closest(".adw-view-switcher")? else {
        return Ok(());
    };
    let buttons = nav.query_selector_all(".adw-view-switcher-button")?;
    for index in 0..buttons.length() {
        if let Some(other) = buttons.get(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            other.class_list().remove_1("active")?;
            other.set_attribute("aria-selected", "false")?;
        }
    }
    button.class_list().add_1("active")?;
    button.set_attribute("aria-selected", "true")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_reports_outcome() {
        assert!(logged("succeed", Ok::<(), String>(())));
        assert!(!logged("fail", Err::<(), _>("NotAllowedError".to_string())));
    }
}
