//! Rebuild-on-demand: keep raw options, derive the node tree lazily.
//!
//! A [`Rebuild`] is either *dirty* (no cached tree) or *clean* (the cached
//! tree reflects the current options). It starts dirty. Rendering moves it
//! to clean by discarding the old tree and calling [`Build::build`]; any
//! mutable access to the options or the extra attributes moves it back to
//! dirty. Rendering never dirties it, so consecutive renders are identical.

use alloc::string::String;
use core::cell::{Ref, RefCell};
use core::fmt::{self, Debug};

use crate::{
    Environment,
    attributes::{Attributes, HasAttributes},
    host::Escaper,
    node::Node,
    render::Render,
};

/// Derives a node tree from a configuration.
pub trait Build {
    /// Builds the tree for the current configuration.
    fn build(&self, env: &Environment) -> Node;
}

/// A configuration plus its lazily built tree.
pub struct Rebuild<C> {
    config: C,
    env: Environment,
    attributes: Attributes,
    tree: RefCell<Option<Node>>,
}

impl<C: Build> Rebuild<C> {
    /// Wraps `config`. The first render builds the tree.
    pub fn new(env: &Environment, config: C) -> Self {
        Self {
            config,
            env: env.clone(),
            attributes: Attributes::new(),
            tree: RefCell::new(None),
        }
    }

    /// The current configuration.
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Mutable access to the configuration. Marks the tree dirty.
    pub fn config_mut(&mut self) -> &mut C {
        self.invalidate();
        &mut self.config
    }

    /// The environment this component renders against.
    pub const fn env(&self) -> &Environment {
        &self.env
    }

    /// Returns the configuration, dropping the cached tree.
    pub fn into_config(self) -> C {
        self.config
    }

    /// Whether the next render has to rebuild the tree.
    pub fn is_dirty(&self) -> bool {
        self.tree.borrow().is_none()
    }

    /// Drops the cached tree.
    pub fn invalidate(&mut self) {
        self.tree.get_mut().take();
    }

    /// The current tree, rebuilding it first when dirty.
    pub fn tree(&self) -> Ref<'_, Node> {
        if self.is_dirty() {
            let tree = self.build_tree();
            *self.tree.borrow_mut() = Some(tree);
        }
        Ref::map(self.tree.borrow(), |tree| {
            tree.as_ref().unwrap_or(&EMPTY)
        })
    }

    /// Consumes the wrapper and returns the tree.
    pub fn into_node(self) -> Node {
        match self.tree.into_inner() {
            Some(tree) => tree,
            None => Self::assemble(&self.config, &self.env, &self.attributes),
        }
    }

    fn build_tree(&self) -> Node {
        tracing::trace!(
            component = core::any::type_name::<C>(),
            "rebuilding component tree"
        );
        Self::assemble(&self.config, &self.env, &self.attributes)
    }

    fn assemble(config: &C, env: &Environment, attributes: &Attributes) -> Node {
        let mut tree = config.build(env);
        if !attributes.is_empty() {
            if let Some(root) = tree.root_element_mut() {
                root.merge_attributes(attributes);
            } else {
                tracing::debug!(
                    component = core::any::type_name::<C>(),
                    "component rendered no element; extra attributes dropped"
                );
            }
        }
        tree
    }
}

static EMPTY: Node = Node::empty();

impl<C: Build> Render for Rebuild<C> {
    fn write_html_with(&self, escaper: &dyn Escaper, out: &mut String) {
        self.tree().write_html_with(escaper, out);
    }
}

/// Reads and writes the extra attributes merged onto the built root, not the
/// root's own attributes: `has_class` only reports classes added through this
/// trait. Inspect [`Rebuild::tree`] for what [`Build::build`] produced.
impl<C: Build> HasAttributes for Rebuild<C> {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        self.invalidate();
        &mut self.attributes
    }
}

impl<C: Debug> Debug for Rebuild<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rebuild")
            .field("config", &self.config)
            .field("attributes", &self.attributes)
            .field("dirty", &self.tree.borrow().is_none())
            .finish_non_exhaustive()
    }
}
