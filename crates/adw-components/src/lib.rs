// File: adw-components/src/lib.rs
// Purpose: Component states, pure render functions and the upgrade pass

//! # adw-components
//!
//! Every component is a state struct plus a pure `render` into an
//! [`adw_dom::Element`]. Nothing here touches a live document: the browser
//! binding and the CLI both go through the same functions.
//!
//! ## Upgrading placeholder markup
//!
//! ```
//! use adw_components::{upgrade_html, ComponentRegistry};
//!
//! let registry = ComponentRegistry::with_defaults();
//! let (html, report) = upgrade_html(
//!     r#"<adw-button appearance="suggested" data-x="1">Post</adw-button>"#,
//!     &registry,
//! );
//!
//! assert_eq!(
//!     html,
//!     r#"<button type="button" class="adw-button suggested-action" data-x="1">Post</button>"#
//! );
//! assert_eq!(report.upgraded, 1);
//! ```

pub mod components;
pub mod registry;
pub mod toast;
pub mod upgrade;

pub use components::*;
pub use registry::{Component, ComponentRegistry, ComponentUpgrader, Parsed, Upgraded, Upgrader};
pub use toast::{ManualScheduler, Scheduler, TaskHandle, Toast, ToastId, ToastOverlay};
pub use upgrade::{pass_through, upgrade_document, upgrade_html, DegradedPlaceholder, UpgradeReport};
