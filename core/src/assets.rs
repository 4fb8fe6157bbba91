//! Per-request stylesheet and script registry.
//!
//! Components enqueue the CSS and JS they depend on while building. A handle
//! is stored once no matter how often it is enqueued, and printing a handle
//! marks it as printed so later prints in the same request skip it. The host
//! calls [`AssetRegistry::print_styles`] and [`AssetRegistry::print_scripts`]
//! where its page layout wants them, and [`AssetRegistry::reset`] between
//! requests.

use alloc::{
    borrow::Cow,
    collections::BTreeSet,
    rc::Rc,
    string::String,
    vec::Vec,
};
use core::cell::RefCell;

use crate::{
    attributes::HasAttributes,
    html,
    node::{HasChildren, Node},
};

/// The kind of a registered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// Inline CSS, printed as `<style>`.
    Style,
    /// Inline JS, printed as `<script>`.
    Script,
}

#[derive(Debug, Clone)]
struct Asset {
    handle: Cow<'static, str>,
    kind: AssetKind,
    source: Cow<'static, str>,
}

#[derive(Debug, Default)]
struct Registry {
    queue: Vec<Asset>,
    printed: BTreeSet<(AssetKind, Cow<'static, str>)>,
}

impl Registry {
    fn enqueue(&mut self, kind: AssetKind, handle: Cow<'static, str>, source: Cow<'static, str>) {
        if self
            .queue
            .iter()
            .any(|asset| asset.kind == kind && asset.handle == handle)
        {
            return;
        }
        tracing::trace!(handle = %handle, ?kind, "asset enqueued");
        self.queue.push(Asset {
            handle,
            kind,
            source,
        });
    }
}

/// A shared, cheaply cloneable asset queue.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry(Rc<RefCell<Registry>>);

impl AssetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a stylesheet. Repeated handles are ignored.
    pub fn enqueue_style(
        &self,
        handle: impl Into<Cow<'static, str>>,
        css: impl Into<Cow<'static, str>>,
    ) {
        self.0
            .borrow_mut()
            .enqueue(AssetKind::Style, handle.into(), css.into());
    }

    /// Queues a script. Repeated handles are ignored.
    pub fn enqueue_script(
        &self,
        handle: impl Into<Cow<'static, str>>,
        js: impl Into<Cow<'static, str>>,
    ) {
        self.0
            .borrow_mut()
            .enqueue(AssetKind::Script, handle.into(), js.into());
    }

    /// Whether `handle` of `kind` has been queued this request.
    #[must_use]
    pub fn is_enqueued(&self, kind: AssetKind, handle: &str) -> bool {
        self.0
            .borrow()
            .queue
            .iter()
            .any(|asset| asset.kind == kind && asset.handle == handle)
    }

    /// Handles of `kind` queued this request, in enqueue order.
    #[must_use]
    pub fn handles(&self, kind: AssetKind) -> Vec<String> {
        self.0
            .borrow()
            .queue
            .iter()
            .filter(|asset| asset.kind == kind)
            .map(|asset| asset.handle.clone().into_owned())
            .collect()
    }

    /// Emits every queued stylesheet not yet printed.
    #[must_use]
    pub fn print_styles(&self) -> Node {
        self.print(AssetKind::Style)
    }

    /// Emits every queued script not yet printed.
    #[must_use]
    pub fn print_scripts(&self) -> Node {
        self.print(AssetKind::Script)
    }

    /// Forgets everything; call once per request.
    pub fn reset(&self) {
        let mut registry = self.0.borrow_mut();
        registry.queue.clear();
        registry.printed.clear();
    }

    fn print(&self, kind: AssetKind) -> Node {
        let mut registry = self.0.borrow_mut();
        let Registry { queue, printed } = &mut *registry;
        let (tag, suffix) = match kind {
            AssetKind::Style => ("style", "css"),
            AssetKind::Script => ("script", "js"),
        };

        let mut nodes = Vec::new();
        for asset in queue.iter().filter(|asset| asset.kind == kind) {
            if !printed.insert((kind, asset.handle.clone())) {
                continue;
            }
            nodes.push(
                html::element(tag)
                    .id(alloc::format!("{}-{suffix}", asset.handle))
                    .raw(asset.source.clone().into_owned()),
            );
        }
        Node::fragment(nodes)
    }
}
