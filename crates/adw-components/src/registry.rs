// File: src/registry.rs
// Purpose: Caller-owned registry mapping placeholder tags to components

use crate::upgrade::{pass_through, upgrade_nodes};
use adw_dom::{Element, Node};
use std::marker::PhantomData;

/// State read from a placeholder, plus the reason it is degraded (if any)
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<C> {
    pub state: C,
    pub issue: Option<String>,
}

impl<C> Parsed<C> {
    pub fn ok(state: C) -> Self {
        Self { state, issue: None }
    }

    pub fn degraded(state: C, issue: impl Into<String>) -> Self {
        Self {
            state,
            issue: Some(issue.into()),
        }
    }
}

/// A component: pure state → markup rendering plus its placeholder schema
///
/// `render` never looks at the document; everything it needs is in the
/// state read by `from_placeholder`.
pub trait Component: Sized {
    /// Placeholder tag name, e.g. `adw-button`
    const TAG: &'static str;
    /// Attributes consumed by the component. Everything else passes through.
    const SCHEMA: &'static [&'static str];

    fn from_placeholder(placeholder: &Element, registry: &ComponentRegistry) -> Parsed<Self>;

    fn render(&self) -> Element;
}

/// Result of upgrading a single placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct Upgraded {
    pub node: Node,
    pub issue: Option<String>,
}

/// Object-safe binding between a placeholder tag and its replacement
pub trait Upgrader {
    fn tag(&self) -> &str;

    fn schema(&self) -> &[&'static str];

    fn upgrade(&self, placeholder: &Element, registry: &ComponentRegistry) -> Upgraded;
}

/// Adapts a [`Component`] to the [`Upgrader`] interface
pub struct ComponentUpgrader<C>(PhantomData<fn() -> C>);

impl<C> Default for ComponentUpgrader<C> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<C: Component> Upgrader for ComponentUpgrader<C> {
    fn tag(&self) -> &str {
        C::TAG
    }

    fn schema(&self) -> &[&'static str] {
        C::SCHEMA
    }

    fn upgrade(&self, placeholder: &Element, registry: &ComponentRegistry) -> Upgraded {
        let parsed = C::from_placeholder(placeholder, registry);
        let mut replacement = parsed.state.render();
        pass_through(placeholder, &mut replacement, C::SCHEMA);
        Upgraded {
            node: Node::Element(replacement),
            issue: parsed.issue,
        }
    }
}

/// Ordered set of upgraders
///
/// Order is processing order for the upgrade pass: composites first, the
/// generic container last. The registry is built by the caller and passed
/// by reference; nothing registers itself globally.
#[derive(Default)]
pub struct ComponentRegistry {
    upgraders: Vec<Box<dyn Upgrader>>,
}

impl ComponentRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in component in processing order
    pub fn with_defaults() -> Self {
        use crate::components::*;

        Self::new()
            .with::<HeaderBar>()
            .with::<Dialog>()
            .with::<SplitButton>()
            .with::<ViewSwitcher>()
            .with::<StatusPage>()
            .with::<LikeButton>()
            .with::<Spinner>()
            .with::<Button>()
            .with::<BoxContainer>()
    }

    /// Appends a component (functional builder)
    pub fn with<C: Component + 'static>(mut self) -> Self {
        self.register::<C>();
        self
    }

    pub fn register<C: Component + 'static>(&mut self) {
        self.register_upgrader(Box::new(ComponentUpgrader::<C>::default()));
    }

    /// Adds an upgrader; re-registering a tag replaces it in its original slot
    pub fn register_upgrader(&mut self, upgrader: Box<dyn Upgrader>) {
        match self.upgraders.iter().position(|u| u.tag() == upgrader.tag()) {
            Some(index) => self.upgraders[index] = upgrader,
            None => self.upgraders.push(upgrader),
        }
    }

    /// Registered tags in processing order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.upgraders.iter().map(|u| u.tag())
    }

    pub fn get(&self, tag: &str) -> Option<&dyn Upgrader> {
        self.upgraders
            .iter()
            .find(|u| u.tag() == tag)
            .map(|u| u.as_ref())
    }

    pub fn is_placeholder(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub(crate) fn upgraders(&self) -> &[Box<dyn Upgrader>] {
        &self.upgraders
    }

    /// Upgrades a single placeholder element, if its tag is registered
    pub fn upgrade_element(&self, placeholder: &Element) -> Option<Upgraded> {
        self.get(&placeholder.tag)
            .map(|upgrader| upgrader.upgrade(placeholder, self))
    }

    /// Upgrades every registered placeholder inside detached nodes
    ///
    /// Composites use this for the content they clone out of their slots.
    pub fn upgrade_subtree(&self, nodes: Vec<Node>) -> Vec<Node> {
        let mut nodes = nodes;
        upgrade_nodes(&mut nodes, self);
        nodes
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}
