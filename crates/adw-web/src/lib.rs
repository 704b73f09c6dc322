// File: adw-web/src/lib.rs
// Purpose: Browser entry point

//! # adw-web
//!
//! Runs the Adwaita-web front end inside a page:
//!
//! 1. Placeholders already in the document are upgraded in place
//! 2. `hashchange` drives the [`adw_app::Navigator`], rendering into the
//!    element with id `app-content`
//! 3. Clicks on like buttons, toast close buttons, dialogs, split buttons,
//!    view switchers and settings choices are handled by one delegated
//!    listener
//! 4. Network failures surface as toasts
//!
//! Settings live in `localStorage` and are pushed to the backend on change.

pub mod app;
pub mod dom;
pub mod error;
pub mod scheduler;
pub mod storage;

pub use app::App;
pub use dom::DomRegion;
pub use error::{WebError, WebResult};
pub use scheduler::TimeoutScheduler;
pub use storage::LocalStorageStore;

use adw_app::Config;
use std::str::FromStr;
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = Config::default();
    init_logging(&config.logging.level);

    let app = App::new(config)?;
    app.start()?;
    Ok(())
}

/// Sends `tracing` events to the browser console
fn init_logging(level: &str) {
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(console_level(level))
            .build(),
    );
}

/// Configured level; unknown names fall back to `info`
fn console_level(level: &str) -> tracing::Level {
    tracing::Level::from_str(level.trim()).unwrap_or(tracing::Level::INFO)
}
