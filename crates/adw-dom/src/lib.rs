//! Owned markup tree used by the Adwaita-web components.
//!
//! Components render into [`Element`] values, the upgrade pass rewrites a
//! parsed [`Document`], and views embed either inside Maud templates through
//! the [`maud::Render`] implementations.

pub mod document;
pub mod escape;
pub mod node;
pub mod parser;

pub use document::Document;
pub use node::{Element, Node, VOID_ELEMENTS};
pub use parser::parse_fragment;
