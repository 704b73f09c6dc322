// File: adw-app/src/lib.rs
// Purpose: Blog front end wiring: routes, views, dispatcher and settings

//! # adw-app
//!
//! Everything between a hash change and the markup in the content region,
//! independent of the browser:
//!
//! - [`routes`]: the blog route table and the [`View`] names it resolves to
//! - [`views`]: Maud templates for each view
//! - [`Dispatcher`]: renders a view (fetching remote data when needed) and
//!   runs the upgrade pass over the result
//! - [`Navigator`]: matches a hash, dispatches it and drops stale renders
//! - [`settings`]: theme and accent color, stored locally and synced
//!
//! ```
//! use adw_app::{routes::blog_routes, View};
//!
//! let table = blog_routes(true);
//! let found = table.match_path("#/posts/42").unwrap();
//! assert_eq!(View::from_name(&found.view), Some(View::Post));
//! assert_eq!(found.param("id"), Some("42"));
//! ```

pub mod config;
pub mod csrf;
pub mod dispatcher;
pub mod error;
pub mod like;
pub mod navigator;
pub mod region;
pub mod routes;
pub mod settings;
pub mod source;
pub mod views;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use like::toggle_like;
pub use navigator::{Navigator, Outcome};
pub use region::{ContentRegion, MemoryRegion};
pub use routes::{blog_routes, View};
pub use settings::{AccentColor, Settings, SettingsManager, SettingsStore, SettingsSync, Theme};
pub use source::{ContentSource, LikeBackend};

use adw_api::ApiClient;

/// Navigator over the REST backend described by `config`
pub fn navigator<R: ContentRegion>(
    config: &Config,
    csrf_token: Option<String>,
    settings: Settings,
    region: R,
) -> Navigator<ApiClient, R> {
    let client = csrf::api_client(&config.api, csrf_token);
    let dispatcher = Dispatcher::new(client).with_settings(settings);
    Navigator::new(blog_routes(config.router.case_insensitive), dispatcher, region)
}
