//! Rendering-component and drop-handler handles.
//!
//! The engine never renders anything; it stores component handles for the
//! embedding application's view layer and hands back drop handlers in
//! registration order. Both traits are collaborator shapes only.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::scope::ConfigScope;

/// Handle for a rendering component contributed by a package.
pub trait Component: Send + Sync {}

/// Handle for a drag-and-drop handler contributed by a package.
pub trait DropHandler: Send + Sync {}

impl ConfigScope {
    /// Register a component under `name` (overwrites in this scope).
    pub fn add_component(&self, name: impl Into<String>, component: Arc<dyn Component>) {
        let name = name.into();
        debug!(scope = %self.path(), component = %name, "add component");
        self.components.insert(name, component);
    }

    /// Hierarchical component lookup.
    pub fn get_component(&self, name: &str) -> Option<Arc<dyn Component>> {
        self.lookup(|scope| &scope.components, name)
    }

    pub fn require_component(&self, name: &str) -> Result<Arc<dyn Component>> {
        self.lookup_strict(|scope| &scope.components, name)
    }

    /// Append a drop handler to this scope's ordered list.
    pub fn add_drop_handler(&self, handler: Arc<dyn DropHandler>) {
        self.drop_handlers.write().push(handler);
    }

    /// All drop handlers registered on this scope, in registration order.
    pub fn get_drop_handlers(&self) -> Vec<Arc<dyn DropHandler>> {
        self.drop_handlers.read().clone()
    }
}
